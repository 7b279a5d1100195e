//! Control mode and operator roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the backend drives the devices itself or leaves them to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    #[default]
    Auto,
    Manual,
}

impl ControlMode {
    /// Build from the `auto_mode` flag carried by API responses.
    #[must_use]
    pub fn from_auto_flag(auto_mode: bool) -> Self {
        if auto_mode { Self::Auto } else { Self::Manual }
    }

    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Text of the `#current-mode` label.
    #[must_use]
    pub fn label(self) -> String {
        format!("Current mode: {self}")
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::Manual => f.write_str("Manual"),
        }
    }
}

/// Role of the signed-in operator.
///
/// Unknown roles are kept verbatim so they round-trip through the bootstrap
/// document unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Operator,
    #[default]
    Viewer,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Operator => "operator",
            Self::Viewer => "viewer",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            "operator" => Self::Operator,
            "viewer" => Self::Viewer,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device buttons are locked while the backend runs the automatic loop,
/// except for administrators.
#[must_use]
pub fn device_controls_enabled(mode: ControlMode, role: &Role) -> bool {
    !mode.is_auto() || role.is_admin()
}

//! Error types shared across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Validation failures raised while building domain values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("device name must not be empty")]
    EmptyDeviceName,

    #[error("unknown device status {0:?}, expected ON or OFF")]
    InvalidDeviceStatus(String),

    #[error("unknown threshold parameter {0:?}")]
    UnknownThresholdParam(String),

    #[error("threshold value {0:?} is not a number")]
    InvalidThresholdValue(String),

    #[error("invalid alert id {0:?}")]
    InvalidAlertId(String),
}

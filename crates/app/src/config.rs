//! Configuration loading: TOML document with key/value overrides.
//!
//! Every field has a sensible default so the document may be empty.
//! Overrides (environment variables on native hosts, `localStorage` in the
//! browser) take precedence over document values.

use std::str::FromStr;
use std::time::Duration;

use greenhouse_domain::time::{DEFAULT_CLOCK_FORMAT, is_valid_clock_format};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Control API location.
    pub api: ApiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Background polling of the latest data.
    pub refresh: RefreshConfig,
    /// Threshold editing behavior.
    pub thresholds: ThresholdConfig,
    /// Header clock.
    pub clock: ClockConfig,
    /// Toast notifications.
    pub notifications: NotificationConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between polls. `0` disables polling.
    pub interval_secs: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// What happens after the server accepts a new threshold.
    pub refresh: ThresholdRefresh,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// `strftime` pattern of the header clock.
    pub format: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays on screen.
    pub timeout_ms: u32,
}

/// Follow-up after a successful threshold update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdRefresh {
    /// Reload the whole page to pick up authoritative server state.
    #[default]
    Reload,
    /// Keep the page and store the accepted value in place.
    InPlace,
}

impl FromStr for ThresholdRefresh {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reload" => Ok(Self::Reload),
            "in_place" => Ok(Self::InPlace),
            other => Err(ConfigError::Validation(format!(
                "unknown threshold refresh policy {other:?}"
            ))),
        }
    }
}

impl DashboardConfig {
    /// Parse `document`, apply overrides from `lookup`, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an override cannot be
    /// parsed, or a value fails validation.
    pub fn load(
        document: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(document)?;
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(val) = lookup("GREENHOUSE_API_BASE") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("GREENHOUSE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("GREENHOUSE_REFRESH_SECS") {
            self.refresh.interval_secs = val.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("refresh interval {val:?} is not a number"))
            })?;
        }
        if let Some(val) = lookup("GREENHOUSE_THRESHOLD_REFRESH") {
            self.thresholds.refresh = val.parse()?;
        }
        if let Some(val) = lookup("GREENHOUSE_CLOCK_FORMAT") {
            self.clock.format = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.api.base_url;
        if !(base.is_empty()
            || base.starts_with('/')
            || base.starts_with("http://")
            || base.starts_with("https://"))
        {
            return Err(ConfigError::Validation(format!(
                "api base url {base:?} must be empty, absolute, or start with '/'"
            )));
        }
        if !is_valid_clock_format(&self.clock.format) {
            return Err(ConfigError::Validation(format!(
                "clock format {:?} is not a valid strftime pattern",
                self.clock.format
            )));
        }
        if self.notifications.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "notification timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Polling period, `None` when polling is disabled.
    #[must_use]
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh.interval_secs > 0).then(|| Duration::from_secs(self.refresh.interval_secs))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "greenhouse_dashboard_leptos=info,greenhouse_app=info".to_string(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_CLOCK_FORMAT.to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { timeout_ms: 5000 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config document")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

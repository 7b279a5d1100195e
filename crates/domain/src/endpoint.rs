//! Control API routes.

use std::fmt::Write as _;

use crate::device::DeviceStatus;
use crate::history::HistoryWindow;
use crate::id::{AlertId, DeviceName};
use crate::threshold::ThresholdParam;

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Every call the dashboard makes.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    SetDeviceStatus {
        device: DeviceName,
        status: DeviceStatus,
    },
    ToggleMode,
    HandleAlert(AlertId),
    UpdateThreshold {
        param: ThresholdParam,
        value: f64,
    },
    LatestData,
    ModeStatus,
    /// Spreadsheet download, linked rather than fetched.
    ExportData(HistoryWindow),
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::LatestData | Self::ModeStatus | Self::ExportData(_) => Method::Get,
            _ => Method::Post,
        }
    }

    /// Path relative to the API origin, with dynamic segments encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::SetDeviceStatus { device, status } => format!(
                "/api/device/{}/{}",
                encode_path_segment(device.as_str()),
                status.as_str()
            ),
            Self::ToggleMode => "/api/mode/toggle".to_string(),
            Self::HandleAlert(id) => format!("/api/alert/{id}/handle"),
            Self::UpdateThreshold { param, value } => {
                format!("/api/threshold/{}/{}", param.as_str(), value)
            }
            Self::LatestData => "/api/get-latest-data".to_string(),
            Self::ModeStatus => "/api/get-mode-status".to_string(),
            Self::ExportData(window) => format!("/export-data?hours={}", window.export_hours()),
        }
    }

    /// Full URL under `base_url` (trailing slashes on the base are ignored).
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

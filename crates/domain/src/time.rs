//! Clock display helpers.

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

/// Numeric date/time layout used by the zh-CN locale (`2026/10/15 08:05:09`).
pub const DEFAULT_CLOCK_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Whether `pattern` is a `strftime` pattern chrono can render.
#[must_use]
pub fn is_valid_clock_format(pattern: &str) -> bool {
    !pattern.is_empty() && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// Render a local wall-clock time for the header clock.
///
/// Falls back to [`DEFAULT_CLOCK_FORMAT`] when `pattern` is not a valid
/// `strftime` pattern.
#[must_use]
pub fn format_clock(now: NaiveDateTime, pattern: &str) -> String {
    let pattern = if is_valid_clock_format(pattern) {
        pattern
    } else {
        DEFAULT_CLOCK_FORMAT
    };
    now.format(pattern).to_string()
}

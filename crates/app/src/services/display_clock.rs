//! Display clock: the header's wall-clock readout.

use chrono::NaiveDateTime;
use greenhouse_domain::time::format_clock;

use crate::ports::Ticker;

/// Renders the current local time on every tick.
pub struct DisplayClock<N> {
    format: String,
    now: N,
}

impl<N: Fn() -> NaiveDateTime> DisplayClock<N> {
    /// `now` supplies the local wall-clock time.
    pub fn new(format: impl Into<String>, now: N) -> Self {
        Self {
            format: format.into(),
            now,
        }
    }

    /// Format the current time.
    pub fn render(&self) -> String {
        format_clock((self.now)(), &self.format)
    }

    /// Write the time to `sink` right away, then after every tick, forever.
    pub async fn run<T: Ticker>(&self, mut ticker: T, mut sink: impl FnMut(String)) {
        sink(self.render());
        loop {
            ticker.tick().await;
            sink(self.render());
        }
    }
}

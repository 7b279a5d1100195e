use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use greenhouse_app::ports::Ticker;

/// [`Ticker`] on top of `setTimeout`.
pub struct TimeoutTicker {
    period_ms: u32,
}

impl TimeoutTicker {
    pub fn every(period: Duration) -> Self {
        Self {
            period_ms: u32::try_from(period.as_millis()).unwrap_or(u32::MAX),
        }
    }
}

impl Ticker for TimeoutTicker {
    async fn tick(&mut self) {
        TimeoutFuture::new(self.period_ms).await;
    }
}

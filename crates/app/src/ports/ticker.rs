//! Ticker port: periodic wake-ups.

use std::future::Future;

/// Resolves once per period.
pub trait Ticker {
    /// Wait for the next tick.
    fn tick(&mut self) -> impl Future<Output = ()>;
}

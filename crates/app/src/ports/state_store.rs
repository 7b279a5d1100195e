//! State store port: where the dashboard view state lives.

use greenhouse_domain::dashboard::DashboardState;

/// Owner of the [`DashboardState`] the views render from.
///
/// Reactive adapters notify their views from [`update`](Self::update).
pub trait StateStore {
    /// Read the state without subscribing to changes.
    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;

    /// Mutate the state and return whatever `f` produces.
    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

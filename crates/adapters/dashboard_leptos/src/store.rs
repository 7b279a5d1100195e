//! Reactive [`StateStore`] backed by a Leptos signal.

use greenhouse_app::ports::StateStore;
use greenhouse_domain::dashboard::DashboardState;
use leptos::prelude::*;

/// The dashboard state as a signal.
///
/// Components subscribe through [`with`](Self::with); the controller mutates
/// through [`StateStore::update`], which notifies every subscriber.
#[derive(Clone, Copy)]
pub struct SignalStore(RwSignal<DashboardState>);

impl SignalStore {
    pub fn new(state: DashboardState) -> Self {
        Self(RwSignal::new(state))
    }

    /// Tracked read, for use inside reactive closures.
    pub fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.0.with(f)
    }
}

impl StateStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.0.write();
        f(&mut state)
    }
}

/// Access the store from Leptos context.
///
/// Must be called below the root [`App`](crate::App).
pub fn use_store() -> SignalStore {
    use_context::<SignalStore>().expect("SignalStore not found in context")
}

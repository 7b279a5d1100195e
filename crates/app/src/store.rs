//! In-memory [`StateStore`] for hosts without a reactive runtime.

use std::sync::{Arc, Mutex, PoisonError};

use greenhouse_domain::dashboard::DashboardState;

use crate::ports::StateStore;

/// Shared, lock-protected dashboard state.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    state: Arc<Mutex<DashboardState>>,
}

impl LocalStore {
    #[must_use]
    pub fn new(state: DashboardState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Clone the current state.
    #[must_use]
    pub fn snapshot(&self) -> DashboardState {
        self.read(Clone::clone)
    }
}

impl StateStore for LocalStore {
    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenhouse_domain::mode::ControlMode;

    #[test]
    fn should_share_state_between_clones() {
        let store = LocalStore::default();
        let other = store.clone();
        store.update(|s| s.set_mode(ControlMode::Manual));
        assert_eq!(other.read(DashboardState::mode), Some(ControlMode::Manual));
    }

    #[test]
    fn should_return_value_from_update() {
        let store = LocalStore::default();
        let enabled = store.update(|s| {
            s.set_mode(ControlMode::Auto);
            s.device_controls_enabled()
        });
        assert!(!enabled);
        assert_eq!(store.snapshot().mode(), Some(ControlMode::Auto));
    }
}

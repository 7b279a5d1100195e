//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. Futures returned by ports are not required to be `Send`: the
//! dashboard runs on the browser's single-threaded event loop.

pub mod control_api;
pub mod operator;
pub mod state_store;
pub mod ticker;

pub use control_api::ControlApi;
pub use operator::{Notice, Operator};
pub use state_store::StateStore;
pub use ticker::Ticker;

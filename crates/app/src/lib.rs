//! # greenhouse-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ControlApi`: send commands to and poll the greenhouse backend
//!   - `Operator`: confirmation dialogs, prompts, notifications, page reload
//!   - `StateStore`: the reactive store the views render from
//!   - `Ticker`: periodic wake-ups for the display clock
//! - Define **use-cases** as services:
//!   - `DashboardController`: device power, control mode, alerts, thresholds, refresh
//!   - `DisplayClock`: the header clock
//! - Load the dashboard configuration
//!
//! ## Dependency rule
//! Depends on `greenhouse-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;
pub mod store;

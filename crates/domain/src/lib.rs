//! # greenhouse-domain
//!
//! Pure domain model for the greenhouse monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, clock formatting
//! - Define **Devices** (actuators switched ON/OFF: heater, fan, pump, …)
//! - Define the **control mode** (automatic/manual) and operator **roles**
//! - Define **Alerts** raised by the backend and their acknowledgment state
//! - Define **Thresholds** (numeric setpoints per monitored parameter)
//! - Define the sensor **history window** and its export cap
//! - Describe the Control API wire format and endpoint paths
//! - Hold the dashboard view state and per-entity request sequencing
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod alert;
pub mod dashboard;
pub mod device;
pub mod endpoint;
pub mod history;
pub mod mode;
pub mod response;
pub mod sensor;
pub mod sequence;
pub mod threshold;

//! Control API port: the greenhouse backend over HTTP/JSON.

use std::future::Future;

use greenhouse_domain::endpoint::Endpoint;
use greenhouse_domain::response::{ApiResponse, LatestData};

use crate::error::TransportError;

/// Sends commands to the backend and reads back its current state.
pub trait ControlApi {
    /// Call a command or status endpoint and decode its envelope.
    ///
    /// Application-level failures come back as `Ok` with a non-success
    /// [`ApiResponse`]; only transport and decoding problems are errors.
    fn send(&self, endpoint: Endpoint) -> impl Future<Output = Result<ApiResponse, TransportError>>;

    /// Fetch the latest sensor reading and device statuses.
    fn latest_data(&self) -> impl Future<Output = Result<LatestData, TransportError>>;
}

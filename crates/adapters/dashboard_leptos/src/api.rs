//! HTTP control API client wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use greenhouse_app::error::TransportError;
use greenhouse_app::ports::ControlApi;
use greenhouse_domain::endpoint::{Endpoint, Method};
use greenhouse_domain::response::{ApiResponse, LatestData};
use serde_json::Value;

/// [`ControlApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpControlApi {
    base_url: String,
}

impl HttpControlApi {
    /// `base_url` prefixes every endpoint path; empty means same origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute link to `endpoint`, for routes the browser opens itself.
    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.base_url)
    }

    async fn call(&self, endpoint: Endpoint) -> Result<Value, TransportError> {
        let url = self.url(&endpoint);
        let request = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        let resp = request.send().await.map_err(transport)?;
        read_envelope(resp).await
    }
}

fn transport(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

/// Read the JSON envelope whatever the HTTP status.
///
/// The backend answers refusals (e.g. a 403 for a missing role) with the
/// same `{status, message}` body as successes, so only a body that is not
/// JSON counts as a transport failure.
async fn read_envelope(resp: Response) -> Result<Value, TransportError> {
    let status = resp.status();
    match resp.json::<Value>().await {
        Ok(body) => Ok(body),
        Err(_) if !(200..300).contains(&status) => {
            Err(TransportError::new(format!("HTTP {status}")))
        }
        Err(err) => Err(transport(err)),
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, TransportError> {
    serde_json::from_value(body).map_err(|err| TransportError::new(err.to_string()))
}

impl ControlApi for HttpControlApi {
    fn send(&self, endpoint: Endpoint) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        async move { decode(self.call(endpoint).await?) }
    }

    fn latest_data(&self) -> impl Future<Output = Result<LatestData, TransportError>> {
        async move { decode(self.call(Endpoint::LatestData).await?) }
    }
}

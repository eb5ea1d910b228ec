use common::fetch::{CandidateTransport, FetchError};
use common::submit::{SubmitError, SubmitTransport};
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{RequestCache, RequestMode};

/// `fetch` through `gloo-net`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl CandidateTransport for GlooTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = Request::get(url)
            .mode(RequestMode::Cors)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl SubmitTransport for GlooTransport {
    /// The scripts do not send CORS headers, so the POST goes out `no-cors`
    /// and the opaque response is dropped.
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), SubmitError> {
        Request::post(url)
            .mode(RequestMode::NoCors)
            .json(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(())
    }
}

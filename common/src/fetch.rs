//! Candidate retrieval: cache check, remote GET, normalization.
//!
//! [`CandidateService::fetch_candidates`] never fails. Every [`FetchError`] is
//! logged at the boundary and turned into an empty list, which the directory
//! shows as "no candidates".

use log::{debug, error, info};
use serde_json::Value;
use thiserror::Error;

use crate::cache::{CachePort, CandidateCache, Clock};
use crate::model::candidate::Candidate;
use crate::normalize::normalize_rows;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Candidate script URL is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Response body is not valid JSON: {0}")]
    Decode(String),

    #[error("Response body is not a JSON array")]
    NotAnArray,
}

/// HTTP GET returning a decoded JSON body.
///
/// Implementations must bypass intermediary caches and report non-success
/// statuses as [`FetchError::Status`].
#[allow(async_fn_in_trait)]
pub trait CandidateTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Builds `{endpoint}?action=getCandidates&t={epoch_ms}`.
pub fn candidates_url(endpoint: &str, epoch_ms: i64) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}action=getCandidates&t={epoch_ms}")
}

pub struct CandidateService<T, P, C> {
    endpoint: Option<String>,
    transport: T,
    cache: CandidateCache<P, C>,
}

impl<T, P, C> CandidateService<T, P, C>
where
    T: CandidateTransport,
    P: CachePort,
    C: Clock,
{
    pub fn new(endpoint: Option<String>, transport: T, cache: CandidateCache<P, C>) -> Self {
        Self {
            endpoint,
            transport,
            cache,
        }
    }

    /// Returns the visible candidates, from cache when fresh.
    ///
    /// `force_refresh` skips the cache read; the result is still written back.
    pub async fn fetch_candidates(&self, force_refresh: bool) -> Vec<Candidate> {
        if !force_refresh {
            if let Some((candidates, age)) = self.cache.read() {
                debug!("Serving {} candidates from cache ({age} ms old)", candidates.len());
                return candidates;
            }
        }

        match self.try_fetch_remote().await {
            Ok(candidates) => {
                info!("Fetched {} visible candidates", candidates.len());
                self.cache.write(&candidates);
                candidates
            }
            Err(e) => {
                error!("Failed to fetch candidates: {e}");
                Vec::new()
            }
        }
    }

    /// One remote round trip with the error kept, bypassing the cache.
    pub async fn try_fetch_remote(&self) -> Result<Vec<Candidate>, FetchError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(FetchError::NotConfigured)?;

        let now = self.cache.now_millis();
        let body = self.transport.get_json(&candidates_url(endpoint, now)).await?;

        normalize_rows(&body, now)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

//! Browser adapters for the ports defined in `common`.
//!
//! - `clock`: `js_sys::Date` as the cache clock.
//! - `storage`: `window.localStorage` as the cache port.
//! - `http`: `gloo-net` for the candidate GET and the form POSTs.
//! - `config`: loads the endpoint URLs from the launcher.

pub mod clock;
pub mod config;
pub mod http;
pub mod storage;

use common::cache::CandidateCache;
use common::fetch::CandidateService;
use common::model::config::EndpointConfig;

use clock::BrowserClock;
use http::GlooTransport;
use storage::LocalStoragePort;

pub type BrowserCandidateService = CandidateService<GlooTransport, LocalStoragePort, BrowserClock>;

pub fn candidate_service(endpoints: &EndpointConfig) -> BrowserCandidateService {
    CandidateService::new(
        endpoints.candidate_url().map(str::to_string),
        GlooTransport,
        CandidateCache::new(LocalStoragePort, BrowserClock),
    )
}

//! # Endpoint Configuration Service
//!
//! The frontend is a static bundle and cannot read the launcher's environment,
//! so the two script URLs are published here and fetched once at startup.
//!
//! ## Registered Routes
//!
//! *   **`GET /api/config`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Returns the `EndpointConfig` as JSON
//!       (`candidateScriptUrl`, `policyScriptUrl`, either may be `null`).

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(get::process))
}

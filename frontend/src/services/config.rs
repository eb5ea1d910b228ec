use common::model::config::EndpointConfig;
use gloo_net::http::Request;
use log::{info, warn};

const CONFIG_PATH: &str = "/api/config";

/// URLs baked in at build time, used when the launcher is not reachable
/// (for example when the bundle is hosted as plain static files).
pub fn build_time_endpoints() -> EndpointConfig {
    EndpointConfig::new(
        option_env!("CANDIDATE_SCRIPT_URL").map(str::to_string),
        option_env!("POLICY_SCRIPT_URL").map(str::to_string),
    )
}

/// Reads `/api/config`, filling gaps from [`build_time_endpoints`].
pub async fn load_endpoints() -> EndpointConfig {
    let fallback = build_time_endpoints();

    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            warn!("{CONFIG_PATH} returned {}, using build-time URLs", resp.status());
            return fallback;
        }
        Err(e) => {
            warn!("Could not load {CONFIG_PATH}: {e}");
            return fallback;
        }
    };

    match response.json::<EndpointConfig>().await {
        Ok(runtime) => {
            let endpoints = runtime.or(fallback);
            info!(
                "Endpoints loaded (candidates: {}, policy: {})",
                endpoints.candidate_url().is_some(),
                endpoints.policy_url().is_some()
            );
            endpoints
        }
        Err(e) => {
            warn!("{CONFIG_PATH} body is not an endpoint config: {e}");
            fallback
        }
    }
}

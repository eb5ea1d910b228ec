mod config;
mod services;

use crate::config::Config;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open browser: {e}");
            }
        });
    }

    let endpoints = web::Data::new(config.endpoints.clone());

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(endpoints.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use actix_web::{http::header, test, web, App};
    use common::model::config::EndpointConfig;
    use serde_json::{json, Value};

    use crate::services;

    fn endpoints() -> EndpointConfig {
        EndpointConfig::new(Some("https://script/candidate".to_string()), None)
    }

    #[actix_web::test]
    async fn test_config_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(endpoints()))
                .service(services::config::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "candidateScriptUrl": "https://script/candidate", "policyScriptUrl": null })
        );
    }

    #[actix_web::test]
    async fn test_unknown_path_serves_index() {
        let app = test::init_service(
            App::new().default_service(web::route().to(services::assets::serve_embedded)),
        )
        .await;

        let req = test::TestRequest::get().uri("/candidates/si").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}

use actix_web::{http::header, web, HttpResponse, Responder};
use common::model::config::EndpointConfig;

/// Serves the endpoint URLs. Never cached, so a restart with new URLs takes
/// effect on the next page load.
pub async fn process(endpoints: web::Data<EndpointConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(endpoints.get_ref())
}

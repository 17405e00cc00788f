use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::errors::{json_error_handler, route_not_found};
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Health check
        .route("/health", web::get().to(health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // Auth routes
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(handlers::login))
                .route("/signup", web::post().to(handlers::signup)),
        )
        // User routes
        .service(
            web::scope("/users")
                .route("", web::get().to(handlers::get_users))
                // Must be before /{id}
                .route("/profile/update", web::put().to(handlers::update_profile))
                .route("/{id}", web::get().to(handlers::get_user)),
        )
        .default_service(web::to(route_not_found));
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

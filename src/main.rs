mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod routes;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::CONFIG;
use crate::services::{AuthService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Initialize services
    let auth_service = web::Data::new(AuthService::new());
    let user_service = web::Data::new(UserService::new());

    // Start HTTP server
    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}

pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;

#[cfg(test)]
pub mod test_utils;

use actix_web::web;

/// Registers every route the server exposes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .service(handlers::generate_facts)
        .service(handlers::health_check)
        .service(handlers::health_check_live);
}

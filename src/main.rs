use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use fact_or_fake_server::{
    app_state::AppState, config::Config, configure_routes, middleware::RequestIdMiddleware,
};

fn build_cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env file loaded: {}", e);
    }
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config
        .validate()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    if let Some(masked) = config.masked_api_key() {
        log::info!("LLM API key loaded: {}", masked);
    }

    let state = AppState::new(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!(
        "Starting HTTP server on {}:{} (model: {})",
        config.web_server_host,
        config.web_server_port,
        config.llm_model
    );

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(build_cors(&config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}

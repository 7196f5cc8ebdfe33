use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use vibe_lab_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::warn!("Configuration problem: {}", err);
    }

    let state = AppState::new(&config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    if config.access_token.is_some() {
        log::info!("Access token required on /api routes");
    }

    let access_token = config.access_token.clone();
    log::info!(
        "starting HTTP server on http://{}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        let access_token = access_token.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(move |cfg| handlers::configure_routes(cfg, access_token))
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}

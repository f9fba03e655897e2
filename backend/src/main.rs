use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use appstore::config::Config;
use appstore::database::Database;
use appstore::services;
use appstore::state::AppState;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;
    let db = Database::open(&config.database_url).map_err(std::io::Error::other)?;
    info!("Using database at {}", config.database_url);
    if config.enforce_admin_auth {
        info!("Admin routes require the x-admin-password header");
    }

    let state = web::Data::new(AppState::new(db, &config));
    let url = format!("http://{}:{}", config.host, config.port);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(appstore::json_config())
            .app_data(state.clone())
            .configure(services::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

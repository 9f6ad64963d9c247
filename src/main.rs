use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use env_logger::Env;
use log::info;
use sqlx::mysql::MySqlPoolOptions;

mod config;
mod error;
mod models;
mod routes;

use config::Config;

/// Any origin, method and header may call the API.
pub(crate) fn cors() -> Cors {
    Cors::permissive()
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the logger reads RUST_LOG.
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env()?;
    let pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options()?)
        .await
        .context("Failed to create pool")?;

    let (host, port) = config.bind_address();
    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(cors())
            .wrap(Logger::default())
            .configure(routes::routes::api_configure)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}

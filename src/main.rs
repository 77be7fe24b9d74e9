use std::time::Duration;

use actix_web::{App, HttpServer, middleware, web};
use contacts_service::db::{DbPool, establish_connection_pool, lazy_connection_pool};
use contacts_service::models::config::{DatabaseConfig, ServerConfig};
use contacts_service::repository::DieselRepository;
use contacts_service::routes::{configure, cors};

/// Build the pool according to the startup policy.
///
/// By default an unreachable database aborts startup. With `lazy_connect`
/// the failure is only logged and requests fail individually until the
/// database becomes reachable.
fn connect(database: &DatabaseConfig) -> Option<DbPool> {
    let url = database.connection_string();
    let timeout = Duration::from_millis(database.connection_timeout_ms);

    match establish_connection_pool(&url, timeout) {
        Ok(pool) => {
            log::info!("Connected to the database");
            Some(pool)
        }
        Err(e) if database.lazy_connect => {
            log::error!("Database connection failed: {e}; serving anyway");
            Some(lazy_connection_pool(&url, timeout))
        }
        Err(e) => {
            log::error!("Database connection failed: {e}");
            None
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let Some(pool) = connect(&server_config.database) else {
        std::process::exit(1);
    };
    let repo = web::Data::new(DieselRepository::new(pool));

    let bind_address = (server_config.host.clone(), server_config.port);
    log::info!(
        "Server is running on {}:{}",
        server_config.host,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors())
            .app_data(repo.clone())
            .configure(configure::<DieselRepository>)
    })
    .bind(bind_address)?
    .run()
    .await
}

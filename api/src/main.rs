use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use qp_api::middleware::cors::create_cors;
use qp_api::routes::{self, AppState};
use qp_core::services::token::{TokenService, TokenServiceConfig};
use qp_shared::config::ServerConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting QrPass API server");

    let token_config = TokenServiceConfig::from_env();
    info!(
        "Loading key material from {}",
        token_config.key_path.display()
    );

    // One service instance backs every request; bad key material aborts
    // startup before the listener binds.
    let token_service =
        TokenService::new(token_config).context("failed to initialize the token service")?;
    let state = AppState {
        token_service: Arc::new(token_service),
    };

    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::init_routes)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}

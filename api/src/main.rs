use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};

use cva_api::{create_app, telemetry, AppState};
use cva_core::{
    AuthService, AuthServiceConfig, PasswordHasher, TokenService, TokenServiceConfig,
    VerificationCodeService, VerificationServiceConfig,
};
use cva_infra::{create_code_store, create_notifier, create_user_repository};
use cva_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting CVACare API server");
    for warning in config.production_warnings() {
        warn!("{}", warning);
    }

    let code_store = create_code_store(&config.cache)
        .await
        .context("failed to initialise verification code store")?;
    let user_repository = create_user_repository(&config.database)
        .await
        .context("failed to initialise user store")?;
    let notifier = create_notifier(
        &config.email,
        config.environment,
        config.verification.code_ttl_minutes,
    )
    .context("failed to initialise email notifier")?;

    let verification_service = Arc::new(VerificationCodeService::new(
        code_store,
        VerificationServiceConfig::from(&config.verification),
    ));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        verification_service,
        notifier,
        token_service,
        PasswordHasher::new(config.auth.bcrypt_cost),
        AuthServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState::new(auth_service));
    let environment = config.environment;
    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server =
        HttpServer::new(move || create_app(app_state.clone(), environment)).bind(&bind_address)?;
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;
    info!("Server stopped");

    Ok(())
}

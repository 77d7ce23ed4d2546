mod actor_framework;
mod domain;

mod cart_actor;
mod comment_actor;
mod favorite_actor;
mod order_actor;
mod product_actor;
mod recycled_actor;
mod session_actor;
mod user_actor;

mod app_system;
mod auth;
mod clients;
mod config;
mod http;
mod integrations;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use crate::app_system::{setup_tracing, StoreSystem};
use crate::auth::JwtKeys;
use crate::config::Config;
use crate::http::AppState;
use crate::integrations::{HostedGeocoder, HostedPaymentGateway, HttpMailer};
use chrono::Duration;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::load();
    info!(port = config.port, "Starting jewelry storefront API");

    // Live third-party clients
    let payment = Arc::new(HostedPaymentGateway::new(
        config.payment_url.clone(),
        config.payment_secret_key.clone(),
    ));
    let mailer = Arc::new(HttpMailer::new(
        config.mail_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    ));
    let geocoder = Arc::new(HostedGeocoder::new(
        config.geocode_url.clone(),
        config.geocode_api_key.clone(),
    ));

    // Collection actors and their clients
    let system = StoreSystem::new(payment, mailer);

    let state = AppState::new(
        &system,
        JwtKeys::new(&config.jwt_secret),
        Duration::hours(config.token_ttl_hours),
        geocoder,
    );
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|e| format!("Failed to bind port {}: {}", config.port, e))?;

    info!("Listening on {}", listener.local_addr().map_err(|e| e.to_string())?);
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    system.shutdown().await?;
    Ok(())
}

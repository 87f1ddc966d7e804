//! # Marquee Server
//!
//! JSON HTTP API for the Marquee movie catalog.
//!
//! ## Overview
//!
//! The server exposes CRUD operations over a single movie resource:
//!
//! - **Strict request decoding**: one JSON value per body, unknown fields
//!   rejected, 1 MiB ceiling
//! - **Field-level validation**: every failing field reported in one 422
//! - **Filtering, sorting, pagination**: safelist-driven ORDER BY over the
//!   list endpoint
//! - **Uniform envelopes**: every body is a single-key JSON object
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - PostgreSQL (via sqlx) for persistent storage
//! - tracing for structured request logging

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::PostgresMovieStore;

use crate::config::Config;
use crate::state::AppState;

mod config;
mod db;
mod errors;
mod handlers;
mod params;
mod request;
mod routes;
mod state;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; real environment variables and flags win.
    dotenvy::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::connect(&config).await?;

    let store = PostgresMovieStore::new(pool);
    store
        .initialize_schema()
        .await
        .context("database migration failed")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    let app = routes::create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, env = %config.env, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
        return;
    }
    info!("shutdown signal received");
}

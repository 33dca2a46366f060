//! ISA Retail API Server
//!
//! Lets retail customers browse a fund catalog and place ISA investments,
//! subject to the annual contribution limit.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryCustomerRepository, InMemoryFundRepository, InMemoryInvestmentRepository};
use app::{FundService, InvestmentService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub investment_service: Arc<
        InvestmentService<
            InMemoryInvestmentRepository,
            InMemoryCustomerRepository,
            InMemoryFundRepository,
        >,
    >,
    pub fund_service: Arc<FundService<InMemoryFundRepository>>,
}

impl AppState {
    /// Wire both services over the given stores
    pub fn new(
        investments: Arc<InMemoryInvestmentRepository>,
        customers: Arc<InMemoryCustomerRepository>,
        funds: Arc<InMemoryFundRepository>,
    ) -> Self {
        let fund_service = Arc::new(FundService::new(funds.clone()));
        let investment_service = Arc::new(InvestmentService::new(investments, customers, funds));

        Self {
            investment_service,
            fund_service,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over the given state
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        // Fund catalog
        .route("/funds", get(handlers::list_funds))
        .route("/funds/:id", get(handlers::get_fund))
        // Investments
        .route("/investments", post(handlers::create_investment))
        .route("/investments/:id", get(handlers::get_investment))
        .route(
            "/customers/:id/investments",
            get(handlers::get_customer_investments),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,isa_retail_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Retail ISA API...");

    // Load configuration
    let config = Config::from_env();

    // Seeded stores
    let customer_repo = Arc::new(InMemoryCustomerRepository::seeded());
    let fund_repo = Arc::new(InMemoryFundRepository::seeded());
    let investment_repo = Arc::new(InMemoryInvestmentRepository::new());

    let state = AppState::new(investment_repo, customer_repo, fund_repo);
    let app = build_router(state, config.request_timeout);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    let shutdown = Arc::new(tokio::sync::Notify::new());
    let server = {
        let shutdown = shutdown.clone();
        axum::serve(listener, app).with_graceful_shutdown(async move {
            shutdown.notified().await;
        })
    };
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => {
            result.context("Server task failed")?.context("Server error")?;
            return Ok(());
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutting down server...");
        }
    }

    shutdown.notify_one();
    match tokio::time::timeout(config.shutdown_grace, server).await {
        Ok(result) => {
            result.context("Server task failed")?.context("Server error")?;
            tracing::info!("Server gracefully stopped");
        }
        Err(_) => {
            tracing::warn!(
                "In-flight requests still running after {:?}, forcing shutdown",
                config.shutdown_grace
            );
        }
    }

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

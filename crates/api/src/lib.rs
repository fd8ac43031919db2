//! # Planning API
//!
//! The API crate provides the web server of the reservation planning service.
//! It defines RESTful endpoints for managing users, reservations and
//! disponibilities (availability windows).
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate request bodies and call the repositories
//! - **Middleware**: Map domain errors and middleware failures to envelopes
//! - **Config**: Handle environment and application configuration
//!
//! Every response body is an envelope: `{ status, message, code, data }` on
//! success, `{ status, message, code }` on failure.

/// Configuration module for API settings
pub mod config;
/// Request handlers, one module per entity
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, error_handling::HandleErrorLayer, http::HeaderValue};
use eyre::{Result, WrapErr};
use planning_db::{
    DbPool,
    repositories::{
        DisponibilityRepository, PgDisponibilityRepository, PgReservationRepository,
        PgUserRepository, ReservationRepository, UserRepository,
    },
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Handlers only see the repository traits, so tests can swap the
/// PostgreSQL implementations for mocks.
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState::from_pool(db_pool));
/// let app = planning_api::app(state);
/// ```
pub struct ApiState {
    pub users: Arc<dyn UserRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub disponibilities: Arc<dyn DisponibilityRepository>,
}

impl ApiState {
    /// Builds the state backed by PostgreSQL repositories sharing one pool.
    pub fn from_pool(db_pool: DbPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(db_pool.clone())),
            reservations: Arc::new(PgReservationRepository::new(db_pool.clone())),
            disponibilities: Arc::new(PgDisponibilityRepository::new(db_pool)),
        }
    }
}

/// Builds the application router with all routes and request tracing.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Entity endpoints
        .nest(
            "/api/v1",
            Router::new()
                .merge(routes::user::routes())
                .merge(routes::reservation::routes())
                .merge(routes::disponibility::routes()),
        )
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// This function initializes logging, builds the router, applies CORS and the
/// request timeout, and serves until the listener fails.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool for database operations
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_pool(db_pool));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid origin in API_CORS_ORIGINS")?;

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware; elapsed requests get a REQUEST/TIMEOUT envelope
    let app = app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(
                middleware::error_handling::handle_middleware_error,
            ))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

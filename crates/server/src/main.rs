// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use space_revenue_api::{
    AnyDatasetSource, ApiError, DEFAULT_DATASET_URL, FileDatasetSource, HttpDatasetSource,
    ReservationService,
};
use space_revenue_domain::QueryResult;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Space Revenue Server - monthly revenue and unreserved capacity for office reservations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the reservation CSV dataset
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    dataset_url: String,

    /// Read the dataset from a local file instead of the URL
    #[arg(long)]
    dataset_file: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Load the dataset at startup instead of on the first query
    #[arg(long)]
    prefetch: bool,
}

impl Args {
    /// Chooses the dataset source; a local file wins over the URL.
    fn dataset_source(&self) -> AnyDatasetSource {
        self.dataset_file.as_ref().map_or_else(
            || HttpDatasetSource::new(self.dataset_url.clone()).into(),
            |path| FileDatasetSource::new(path).into(),
        )
    }
}

/// Application state shared across handlers.
///
/// The service caches the dataset internally and is read-only afterwards,
/// so no lock is needed around it.
#[derive(Clone)]
struct AppState {
    /// The cached reservation query service.
    service: Arc<ReservationService<AnyDatasetSource>>,
}

/// Query parameters for the expected revenue endpoint.
#[derive(Debug, Deserialize)]
struct ExpectedQuery {
    /// Month number, 1-12.
    month: u8,
    /// Calendar year.
    year: i32,
}

/// API response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always "ok" while the server is running.
    status: String,
    /// Whether a dataset load has completed.
    dataset_loaded: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DatasetUnavailable { .. } => {
                error!(error = %err, "Reservation dataset unavailable");
                Self {
                    status: StatusCode::BAD_GATEWAY,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/expected` endpoint.
///
/// Returns prorated revenue and unreserved capacity for one month.
async fn handle_expected(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ExpectedQuery>,
) -> Result<Json<QueryResult>, HttpError> {
    info!(
        month = query.month,
        year = query.year,
        "Handling expected revenue request"
    );

    let result: QueryResult = app_state
        .service
        .expected(query.month, query.year)
        .await?;

    Ok(Json(result))
}

/// Handler for GET `/health` endpoint.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        dataset_loaded: app_state.service.is_loaded(),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/expected", get(handle_expected))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Space Revenue Server");

    let source: AnyDatasetSource = args.dataset_source();
    let app_state: AppState = AppState {
        service: Arc::new(ReservationService::new(source)),
    };

    if args.prefetch {
        // A failure here is cached; queries will report it
        match app_state.service.records().await {
            Ok(records) => info!(records = records.len(), "Prefetched reservation dataset"),
            Err(err) => warn!(error = %err, "Prefetch of reservation dataset failed"),
        }
    }

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

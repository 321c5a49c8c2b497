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
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use clap::Parser;
use dispo::StatsReport;
use dispo_api::{
    ApiError, AvailabilityResponse, CsvPreviewResult, DurationResponse, ServiceIntervalsRequest,
    ServiceIntervalsResponse, StatsRequest, compute_availability, compute_durations,
    compute_stats, compute_stats_csv, preview_incidents_csv, service_intervals,
};
use dispo_domain::{StatsConfig, Tz, parse_timezone, validate_stats_config};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Dispo Server - HTTP server for the Dispo availability engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// JSON file with the default stats configuration. Built-in defaults apply if omitted.
    #[arg(short, long)]
    defaults: Option<PathBuf>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Configuration applied to requests that carry none.
    defaults: Arc<StatsConfig>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Optional query parameters for the CSV preview.
#[derive(Debug, Clone, Deserialize)]
struct CsvPreviewQuery {
    /// IANA timezone for timestamps without an offset.
    timezone: Option<String>,
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
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/stats` endpoint.
///
/// Computes both chart series for the submitted incidents.
async fn handle_stats(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<StatsRequest>,
) -> Result<Json<StatsReport>, HttpError> {
    info!(incidents = req.incidents.len(), "Handling stats request");
    let report: StatsReport = compute_stats(req, &app_state.defaults, Utc::now())?;
    Ok(Json(report))
}

/// Handler for POST `/stats/availability` endpoint.
async fn handle_availability(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<StatsRequest>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(
        incidents = req.incidents.len(),
        "Handling availability request"
    );
    let response: AvailabilityResponse =
        compute_availability(req, &app_state.defaults, Utc::now())?;
    Ok(Json(response))
}

/// Handler for POST `/stats/durations` endpoint.
async fn handle_durations(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<StatsRequest>,
) -> Result<Json<DurationResponse>, HttpError> {
    info!(incidents = req.incidents.len(), "Handling durations request");
    let response: DurationResponse = compute_durations(req, &app_state.defaults, Utc::now())?;
    Ok(Json(response))
}

/// Handler for POST `/stats/csv` endpoint.
///
/// Returns the report as a CSV attachment.
async fn handle_stats_csv(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<StatsRequest>,
) -> Result<Response, HttpError> {
    info!(incidents = req.incidents.len(), "Handling stats CSV request");
    let body: String = compute_stats_csv(req, &app_state.defaults, Utc::now())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"dispo-stats.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// Handler for POST `/service_intervals` endpoint.
async fn handle_service_intervals(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ServiceIntervalsRequest>,
) -> Result<Json<ServiceIntervalsResponse>, HttpError> {
    info!(start = %req.start, end = %req.end, "Handling service_intervals request");
    let response: ServiceIntervalsResponse = service_intervals(req, &app_state.defaults)?;
    Ok(Json(response))
}

/// Handler for POST `/incidents/csv_preview` endpoint.
///
/// The body is raw CSV text. Timestamps without an offset are read in the
/// `timezone` query parameter, or the default configuration's timezone.
async fn handle_csv_preview(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<CsvPreviewQuery>,
    body: String,
) -> Result<Json<CsvPreviewResult>, HttpError> {
    info!(bytes = body.len(), "Handling csv_preview request");
    let tz: Tz = match query.timezone {
        Some(name) => parse_timezone(&name).map_err(ApiError::from)?,
        None => app_state.defaults.timezone,
    };
    let result: CsvPreviewResult = preview_incidents_csv(&body, tz)?;
    info!(
        total_rows = result.total_rows,
        valid_count = result.valid_count,
        "Previewed incident CSV"
    );
    Ok(Json(result))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/stats", post(handle_stats))
        .route("/stats/availability", post(handle_availability))
        .route("/stats/durations", post(handle_durations))
        .route("/stats/csv", post(handle_stats_csv))
        .route("/service_intervals", post(handle_service_intervals))
        .route("/incidents/csv_preview", post(handle_csv_preview))
        .with_state(app_state)
}

/// Loads and validates the default configuration.
fn load_defaults(path: Option<&Path>) -> Result<StatsConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(StatsConfig::default());
    };
    info!("Loading default configuration from: {}", path.display());
    let raw: String = std::fs::read_to_string(path)?;
    let config: StatsConfig = serde_json::from_str(&raw)?;
    validate_stats_config(&config)?;
    Ok(config)
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

    info!("Initializing Dispo Server");

    let defaults: StatsConfig = load_defaults(args.defaults.as_deref())?;
    info!(
        period_type = %defaults.period_type,
        period_count = defaults.period_count,
        timezone = %defaults.timezone,
        "Default configuration ready"
    );

    let app_state: AppState = AppState {
        defaults: Arc::new(defaults),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

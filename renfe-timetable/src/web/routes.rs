//! HTTP route handlers.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::cors::CorsLayer;

use crate::domain::{Station, TimetableEntry, days_between};
use crate::scrape::{ScrapeError, SearchRequest};
use crate::stations::StationError;
use crate::timetable::fetch_timetable;

use super::dto::{AliveResponse, ErrorResponse, TrainsQuery};
use super::state::AppState;

/// Results-settle wait applied when the query gives none.
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 3;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/is-alive", get(is_alive))
        .route("/stations", get(list_stations))
        .route("/stations/:name", get(search_stations))
        .route("/trains", get(get_trains))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn is_alive() -> Json<AliveResponse> {
    Json(AliveResponse { status: "we good!" })
}

/// The full station directory.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.directory.all().await)
}

/// Stations whose name contains the path segment; an empty array is a
/// valid answer.
async fn search_stations(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Station>> {
    Json(state.directory.search(&name).await)
}

/// Run a timetable search between two station ids on a given date.
async fn get_trains(
    State(state): State<AppState>,
    Query(query): Query<TrainsQuery>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    if !state.directory.exists(&query.origin).await {
        return Err(AppError::BadRequest {
            message: "Invalid origin station!".to_string(),
        });
    }
    if !state.directory.exists(&query.destination).await {
        return Err(AppError::BadRequest {
            message: "Invalid destination station!".to_string(),
        });
    }

    let today = Local::now().date_naive();
    let days_from_today = days_between(today, &query.date).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let origin = state.directory.name_for_id(&query.origin).await?;
    let destination = state.directory.name_for_id(&query.destination).await?;

    let request = SearchRequest {
        origin,
        destination,
        days_from_today,
        settle_timeout: Duration::from_secs(
            query.search_timeout.unwrap_or(DEFAULT_SEARCH_TIMEOUT_SECS),
        ),
    };

    let entries = fetch_timetable(&state.scrape, &request).await?;
    Ok(Json(entries))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Scrape(ScrapeError),
    Internal { message: String },
}

impl From<ScrapeError> for AppError {
    fn from(e: ScrapeError) -> Self {
        AppError::Scrape(e)
    }
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Scrape and parse failures surface as 505 with a detail message.
        let (status, detail) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Scrape(e) => {
                let detail = match &e {
                    ScrapeError::SiteStructureChanged { .. } => {
                        format!("Parsing failed! Something has changed in renfe site: {e}")
                    }
                    ScrapeError::Automation(_) => format!(
                        "Something went wrong while trying to navigate through renfe site: {e}"
                    ),
                };
                (StatusCode::HTTP_VERSION_NOT_SUPPORTED, detail)
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, "{detail}");

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};
use skydesk_core::document::ids;
use skydesk_core::render::TableRenderer;
use skydesk_core::{FetchOutcome, FilterCriteria, FlightId, FlightSearchPanel, MemoryDocument};
use tracing::info;

use crate::error::AppError;
use crate::page;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search_page))
        .route("/fragments/flights", get(flights_fragment))
        .route("/flights/{id}", get(flight_detail))
}

/// Mounts a panel on a fresh document holding the submitted form values,
/// runs page load or form submission, and returns the table contents.
async fn run_panel(state: &AppState, params: &FilterCriteria) -> Result<String, AppError> {
    let doc = Arc::new(MemoryDocument::search_page());
    let submitted = params.origin.is_some() || params.destination.is_some() || params.departure_date.is_some();
    if submitted {
        doc.set_input(ids::ORIGIN, params.origin.clone().unwrap_or_default())?;
        doc.set_input(ids::DESTINATION, params.destination.clone().unwrap_or_default())?;
        doc.set_input(ids::DEPARTURE_DATE, params.departure_date.clone().unwrap_or_default())?;
    }

    let panel = FlightSearchPanel::new(state.api.clone(), doc.clone(), TableRenderer::new(state.display));
    let outcome = if submitted { panel.submit().await? } else { panel.init().await? };
    if let FetchOutcome::Rendered { rows } = outcome {
        info!("Rendered {} flight rows", rows);
    }

    Ok(doc.inner_html(ids::FLIGHTS_LIST)?)
}

async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<FilterCriteria>,
) -> Result<Html<String>, AppError> {
    let rows = run_panel(&state, &params).await?;
    Ok(Html(page::search_page(state.display.locale, &params, &rows)))
}

async fn flights_fragment(
    State(state): State<AppState>,
    Query(params): Query<FilterCriteria>,
) -> Result<Html<String>, AppError> {
    Ok(Html(run_panel(&state, &params).await?))
}

async fn flight_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: FlightId = match id.parse() {
        Ok(id) => id,
        Err(never) => match never {},
    };
    let flight = state
        .api
        .get_flight(&id)
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", id)))?;

    let renderer = TableRenderer::new(state.display);
    Ok(Html(page::flight_page(&renderer, &flight)))
}

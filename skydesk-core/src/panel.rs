use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::document::{ids, Document};
use crate::flight::Flight;
use crate::render::TableRenderer;
use crate::repository::FlightsApi;
use crate::search::FilterCriteria;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The table now shows this response.
    Rendered { rows: usize },
    /// A newer fetch was issued while this one was in flight; its response was dropped.
    Superseded,
}

/// Search form plus results table, bound to a flights API.
///
/// Each fetch takes a ticket from a monotonically increasing counter. Only
/// the holder of the most recent ticket may write to the table, so the last
/// request issued wins regardless of the order responses arrive in. The
/// ticket is checked and the table written under `render_lock`.
pub struct FlightSearchPanel {
    api: Arc<dyn FlightsApi>,
    document: Arc<dyn Document>,
    renderer: TableRenderer,
    latest: AtomicU64,
    render_lock: Mutex<()>,
}

impl FlightSearchPanel {
    pub fn new(api: Arc<dyn FlightsApi>, document: Arc<dyn Document>, renderer: TableRenderer) -> Self {
        Self {
            api,
            document,
            renderer,
            latest: AtomicU64::new(0),
            render_lock: Mutex::new(()),
        }
    }

    /// Page load: full listing, no filters.
    pub async fn init(&self) -> CoreResult<FetchOutcome> {
        self.fetch_flights(&FilterCriteria::default()).await
    }

    /// Form submission: reads the three search inputs and fetches with them.
    pub async fn submit(&self) -> CoreResult<FetchOutcome> {
        let filters = self.document.read_filters()?;
        info!("Search submitted: {:?}", filters.pairs());
        self.fetch_flights(&filters).await
    }

    pub async fn fetch_flights(&self, filters: &FilterCriteria) -> CoreResult<FetchOutcome> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let flights = self.api.list_flights(filters).await?;
        let rows = self.renderer.rows(&flights);

        let _guard = self
            .render_lock
            .lock()
            .map_err(|e| CoreError::Document(e.to_string()))?;
        let current = self.latest.load(Ordering::SeqCst);
        if current != ticket {
            debug!("Dropping response for request #{} (latest is #{})", ticket, current);
            return Ok(FetchOutcome::Superseded);
        }

        debug!("Rendering {} flights", flights.len());
        self.document.set_inner_html(ids::FLIGHTS_LIST, rows)?;
        Ok(FetchOutcome::Rendered { rows: flights.len() })
    }

    /// Replaces the results table with one row per flight.
    pub fn render_flights(&self, flights: &[Flight]) -> CoreResult<()> {
        let _guard = self
            .render_lock
            .lock()
            .map_err(|e| CoreError::Document(e.to_string()))?;
        debug!("Rendering {} flights", flights.len());
        self.document
            .set_inner_html(ids::FLIGHTS_LIST, self.renderer.rows(flights))
    }

    pub fn renderer(&self) -> &TableRenderer {
        &self.renderer
    }
}

use async_trait::async_trait;

use crate::flight::{Flight, FlightId};
use crate::search::FilterCriteria;
use crate::CoreResult;

/// Access to the flight search API.
#[async_trait]
pub trait FlightsApi: Send + Sync {
    /// `GET /api/flights` with the non-empty filters.
    async fn list_flights(&self, filters: &FilterCriteria) -> CoreResult<Vec<Flight>>;

    /// `GET /api/flights/{id}`; `None` when the upstream has no such flight.
    async fn get_flight(&self, id: &FlightId) -> CoreResult<Option<Flight>>;
}

pub mod document;
pub mod flight;
pub mod locale;
pub mod panel;
pub mod render;
pub mod repository;
pub mod search;

pub use document::{Document, MemoryDocument};
pub use flight::{Flight, FlightId, Route, Timestamp};
pub use locale::{DisplayOptions, Locale};
pub use panel::{FetchOutcome, FlightSearchPanel};
pub use repository::FlightsApi;
pub use search::FilterCriteria;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Element not found in document: #{0}")]
    MissingElement(String),
    #[error("Upstream request failed: {0}")]
    Upstream(String),
    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },
    #[error("Failed to decode flights payload: {0}")]
    Decode(String),
    #[error("Document error: {0}")]
    Document(String),
    #[error("Invalid display settings: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Decode(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

use std::collections::HashMap;
use std::sync::RwLock;

use crate::search::FilterCriteria;
use crate::{CoreError, CoreResult};

/// Element ids the search panel reads from and writes to.
pub mod ids {
    pub const FLIGHTS_LIST: &str = "flightsList";
    pub const SEARCH_FORM: &str = "searchFlightForm";
    pub const ORIGIN: &str = "origin";
    pub const DESTINATION: &str = "destination";
    pub const DEPARTURE_DATE: &str = "departureDate";
}

/// The page the panel is mounted in.
///
/// Inputs are read by id; containers have their inner HTML replaced by id.
/// Unknown ids are an error.
pub trait Document: Send + Sync {
    fn input_value(&self, id: &str) -> CoreResult<String>;

    fn set_inner_html(&self, id: &str, html: String) -> CoreResult<()>;

    /// Current values of the three search inputs.
    fn read_filters(&self) -> CoreResult<FilterCriteria> {
        Ok(FilterCriteria::new(
            self.input_value(ids::ORIGIN)?,
            self.input_value(ids::DESTINATION)?,
            self.input_value(ids::DEPARTURE_DATE)?,
        ))
    }
}

/// In-memory document: a set of named inputs and containers.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    inputs: RwLock<HashMap<String, String>>,
    containers: RwLock<HashMap<String, String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with the search form inputs (empty) and the results container.
    pub fn search_page() -> Self {
        Self::new()
            .with_input(ids::ORIGIN, "")
            .with_input(ids::DESTINATION, "")
            .with_input(ids::DEPARTURE_DATE, "")
            .with_container(ids::FLIGHTS_LIST)
    }

    pub fn with_input(mut self, id: &str, value: impl Into<String>) -> Self {
        self.inputs
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id.to_string(), value.into());
        self
    }

    pub fn with_container(mut self, id: &str) -> Self {
        self.containers
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id.to_string(), String::new());
        self
    }

    /// Types `value` into an existing input.
    pub fn set_input(&self, id: &str, value: impl Into<String>) -> CoreResult<()> {
        let mut inputs = self.inputs.write().map_err(|e| CoreError::Document(e.to_string()))?;
        let slot = inputs
            .get_mut(id)
            .ok_or_else(|| CoreError::MissingElement(id.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    pub fn inner_html(&self, id: &str) -> CoreResult<String> {
        let containers = self.containers.read().map_err(|e| CoreError::Document(e.to_string()))?;
        containers
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::MissingElement(id.to_string()))
    }
}

impl Document for MemoryDocument {
    fn input_value(&self, id: &str) -> CoreResult<String> {
        let inputs = self.inputs.read().map_err(|e| CoreError::Document(e.to_string()))?;
        inputs
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::MissingElement(id.to_string()))
    }

    fn set_inner_html(&self, id: &str, html: String) -> CoreResult<()> {
        let mut containers = self.containers.write().map_err(|e| CoreError::Document(e.to_string()))?;
        let slot = containers
            .get_mut(id)
            .ok_or_else(|| CoreError::MissingElement(id.to_string()))?;
        *slot = html;
        Ok(())
    }
}

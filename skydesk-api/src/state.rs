use std::sync::Arc;

use skydesk_core::{DisplayOptions, FlightsApi};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn FlightsApi>,
    pub display: DisplayOptions,
}

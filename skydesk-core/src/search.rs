use serde::{Deserialize, Serialize};
use url::Url;

use crate::{CoreError, CoreResult};

/// Path segments of the flight search endpoint, relative to the upstream base url.
pub const FLIGHTS_SEGMENTS: [&str; 2] = ["api", "flights"];

/// `{base}/api/flights`, keeping any path prefix of `base` (`http://gw/svc/`
/// gives `http://gw/svc/api/flights`). Query and fragment of `base` are dropped.
pub fn flights_endpoint(base: &Url) -> CoreResult<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| CoreError::Config(format!("base url cannot carry a path: {}", base)))?
        .pop_if_empty()
        .extend(FLIGHTS_SEGMENTS);
    Ok(url)
}

/// Optional filters narrowing a flight search.
///
/// Empty strings count as absent: they never reach the outgoing query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
}

impl FilterCriteria {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            origin: Some(origin.into()),
            destination: Some(destination.into()),
            departure_date: Some(departure_date.into()),
        }
    }

    /// Query parameter pairs, in fixed key order, skipping empty values.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("origin", self.origin.as_deref()),
            ("destination", self.destination.as_deref()),
            ("departureDate", self.departure_date.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Appends the non-empty filters to `url` as percent-encoded query parameters.
    pub fn apply_to(&self, url: &mut Url) {
        let pairs = self.pairs();
        if pairs.is_empty() {
            url.set_query(None);
            return;
        }
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    /// `{base}/api/flights` with the filters attached.
    pub fn flights_url(&self, base: &Url) -> CoreResult<Url> {
        let mut url = flights_endpoint(base)?;
        self.apply_to(&mut url);
        Ok(url)
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use skydesk_core::search::flights_endpoint;
use skydesk_core::{CoreError, CoreResult, FilterCriteria, Flight, FlightId, FlightsApi};
use tracing::{debug, info};
use url::Url;

use crate::app_config::UpstreamConfig;

/// `FlightsApi` over HTTP against the upstream flight search service.
#[derive(Clone)]
pub struct HttpFlightsApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpFlightsApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> CoreResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CoreError::Config(format!("invalid upstream base url {:?}: {}", base_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| CoreError::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(cfg: &UpstreamConfig) -> CoreResult<Self> {
        Self::new(&cfg.base_url, cfg.request_timeout_secs.map(Duration::from_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn flight_url(&self, id: &FlightId) -> CoreResult<Url> {
        let mut url = flights_endpoint(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| CoreError::Config(format!("base url cannot carry a path: {}", self.base_url)))?
            .push(&id.to_string());
        Ok(url)
    }

    /// GET `url`, returning the body bytes, or `None` on 404.
    async fn get_bytes(&self, url: Url) -> CoreResult<Option<Vec<u8>>> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CoreError::Upstream(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CoreError::Upstream(e.to_string()))?;
        Ok(Some(body.to_vec()))
    }
}

#[async_trait]
impl FlightsApi for HttpFlightsApi {
    async fn list_flights(&self, filters: &FilterCriteria) -> CoreResult<Vec<Flight>> {
        let url = filters.flights_url(&self.base_url)?;

        let body = self.get_bytes(url.clone()).await?.ok_or_else(|| CoreError::UpstreamStatus {
            status: StatusCode::NOT_FOUND.as_u16(),
            url: url.to_string(),
        })?;
        let flights: Vec<Flight> = serde_json::from_slice(&body)?;

        info!("Fetched {} flights", flights.len());
        Ok(flights)
    }

    async fn get_flight(&self, id: &FlightId) -> CoreResult<Option<Flight>> {
        let url = self.flight_url(id)?;
        match self.get_bytes(url).await? {
            Some(body) => Ok(Some(serde_json::from_slice(&body)?)),
            None => Ok(None),
        }
    }
}

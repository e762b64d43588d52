use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A flight record as returned by `/api/flights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: FlightId,
    pub flight_number: String,
    #[serde(default)]
    pub route: Option<Route>,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub available_seats: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            id: None,
            origin: origin.into(),
            destination: destination.into(),
            distance_km: None,
        }
    }

    /// `origin → destination`
    pub fn label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

/// Opaque flight identifier. The upstream sends numeric ids; strings are
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightId::Numeric(n) => write!(f, "{}", n),
            FlightId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FlightId {
    fn from(n: i64) -> Self {
        FlightId::Numeric(n)
    }
}

impl FromStr for FlightId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only canonical integers become numeric, so "007" or "+5" keep their text.
        Ok(match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => FlightId::Numeric(n),
            _ => FlightId::Text(s.to_string()),
        })
    }
}

/// Departure or arrival time.
///
/// Values carrying an offset are shifted to the display offset when
/// rendered. Offset-less values are wall-clock times and render unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

impl Timestamp {
    /// Wall-clock time at the given offset.
    pub fn to_local(&self, offset: FixedOffset) -> NaiveDateTime {
        match self {
            Timestamp::Zoned(dt) => dt.with_timezone(&offset).naive_local(),
            Timestamp::Local(naive) => *naive,
        }
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let zoned_err = match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => return Ok(Timestamp::Zoned(dt)),
            Err(e) => e,
        };
        LOCAL_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Timestamp::Local)
            .ok_or(zoned_err)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<Timestamp>()
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Zoned(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Timestamp::Local(naive) => {
                serializer.serialize_str(&naive.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
        }
    }
}

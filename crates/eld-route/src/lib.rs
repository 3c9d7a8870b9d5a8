//! OpenRouteService integration for trip planning.
//!
//! Provides geocoding of free-text locations and driving directions between
//! them, summarized into the shape the trip planner consumes: total miles,
//! whole driving hours, and the route geometry for map rendering.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default request timeout for API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Public OpenRouteService endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

const METERS_PER_MILE: f64 = 1609.34;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Route client errors.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The provided API key was invalid.
    #[error("invalid API key: {reason}")]
    InvalidApiKey { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The route service returned an error response.
    #[error("route service error: {message}")]
    Api { message: String },
    /// Geocoding produced no match for a location.
    #[error("no match for location: {query}")]
    NoMatch { query: String },
    /// Failed to parse a response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A longitude/latitude pair, in OpenRouteService's `lon,lat` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            lon: pair[0],
            lat: pair[1],
        }
    }
}

/// One leg of the computed route, passed through for map rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A turn-by-turn instruction within a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub distance: f64,
    pub duration: f64,
    pub instruction: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub way_points: [u64; 2],
}

/// Summary of a planned route between two named locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    /// Whole driving hours, rounded from the service's duration.
    pub duration_hours: f64,
    pub segments: Vec<Segment>,
    /// Route geometry as `[lon, lat]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// OpenRouteService client.
///
/// Safe to clone and share; clones reuse the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client for the given service base URL and API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or whitespace-only, or if
    /// the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, RouteError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(RouteError::InvalidApiKey {
                reason: "API key cannot be empty",
            });
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(RouteError::ClientBuild)?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Resolves a free-text location to coordinates via `/geocode/search`.
    ///
    /// Uses the first (best-ranked) feature, as the trip form expects.
    pub async fn geocode(&self, text: &str) -> Result<Coordinate, RouteError> {
        let url = format!("{}/geocode/search", self.base_url);
        let body = self
            .get(&url, &[("api_key", self.api_key.as_str()), ("text", text)])
            .await?;

        let payload: GeocodeResponse = serde_json::from_str(&body)
            .map_err(|err| RouteError::InvalidResponse(err.to_string()))?;
        let feature = payload.features.into_iter().next().ok_or_else(|| {
            RouteError::NoMatch {
                query: text.to_string(),
            }
        })?;

        Ok(Coordinate::from(feature.geometry.coordinates))
    }

    /// Fetches driving directions between two coordinates.
    pub async fn directions(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<DirectionsResponse, RouteError> {
        let url = format!("{}/v2/directions/driving-car", self.base_url);
        let body = self
            .get(
                &url,
                &[
                    ("api_key", self.api_key.as_str()),
                    ("start", &start.to_string()),
                    ("end", &end.to_string()),
                ],
            )
            .await?;

        serde_json::from_str(&body).map_err(|err| RouteError::InvalidResponse(err.to_string()))
    }

    /// Geocodes both trip ends and summarizes the route between them.
    pub async fn trip_information(
        &self,
        pickup: &str,
        dropoff: &str,
    ) -> Result<RouteSummary, RouteError> {
        let pickup_at = self.geocode(pickup).await?;
        let dropoff_at = self.geocode(dropoff).await?;
        tracing::debug!(%pickup_at, %dropoff_at, "geocoded trip endpoints");

        let directions = self.directions(pickup_at, dropoff_at).await?;
        summarize(pickup, dropoff, directions)
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, RouteError> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(parse_api_error(&body).unwrap_or_else(|| RouteError::Api {
                message: format!("status {status}: {body}"),
            }));
        }
        Ok(body)
    }
}

/// Condenses a directions response into the planner-facing summary.
///
/// Distance converts meters to miles; duration converts seconds to whole
/// hours, rounded.
pub fn summarize(
    pickup: &str,
    dropoff: &str,
    response: DirectionsResponse,
) -> Result<RouteSummary, RouteError> {
    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::InvalidResponse("directions returned no features".to_string()))?;

    Ok(RouteSummary {
        pickup: pickup.to_string(),
        dropoff: dropoff.to_string(),
        distance_miles: feature.properties.summary.distance / METERS_PER_MILE,
        duration_hours: (feature.properties.summary.duration / SECONDS_PER_HOUR).round(),
        segments: feature.properties.segments,
        coordinates: feature.geometry.coordinates,
    })
}

fn parse_api_error(body: &str) -> Option<RouteError> {
    let payload: ApiErrorBody = serde_json::from_str(body).ok()?;
    let message = match payload.error {
        ApiErrorDetail::Message(message) => message,
        ApiErrorDetail::Object { message } => message?,
    };
    Some(RouteError::Api { message })
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorDetail {
    Message(String),
    Object { message: Option<String> },
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    coordinates: [f64; 2],
}

/// Raw `/v2/directions` response, kept public so summaries can be built
/// from recorded payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<DirectionsFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsFeature {
    pub properties: RouteProperties,
    pub geometry: LineGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteProperties {
    pub summary: RouteTotals,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RouteTotals {
    /// Total distance in meters.
    pub distance: f64,
    /// Total duration in seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

//! Google Maps upstream client
//!
//! Builds request URLs for reverse geocoding and find-place-from-text, issues
//! a single GET per lookup and decodes the body. The upstream `status` field
//! is never inspected: `ZERO_RESULTS` or `REQUEST_DENIED` decode like `OK`.

pub mod types;

use crate::config::GmapsConfig;
use crate::constants::api::{
    FIND_PLACE_FIELDS, FIND_PLACE_PATH, GEOCODE_PATH, STREET_ADDRESS_RESULT_TYPE,
};
use crate::error::Result;
use serde::de::DeserializeOwned;
use tracing::debug;
pub use types::*;

/// Google Maps Geocoding and Places client
#[derive(Debug, Clone)]
pub struct GmapsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GmapsClient {
    /// Create a client from the Google Maps configuration
    pub fn new(config: &GmapsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Reverse geocode a coordinate pair
    pub async fn reverse_geocode(&self, req: &ReverseGeocodeRequest) -> Result<GeocodeResult> {
        let url = reverse_geocode_url(&self.base_url, req, None, &self.api_key);
        self.fetch("reverse_geocode", &url).await
    }

    /// Reverse geocode a coordinate pair, keeping street addresses only
    pub async fn reverse_geocode_filtered(
        &self,
        req: &ReverseGeocodeRequest,
    ) -> Result<GeocodeResult> {
        let url = reverse_geocode_url(
            &self.base_url,
            req,
            Some(STREET_ADDRESS_RESULT_TYPE),
            &self.api_key,
        );
        self.fetch("reverse_geocode_filtered", &url).await
    }

    /// Find places matching a free-text query
    pub async fn find_place(&self, req: &FindPlaceRequest) -> Result<FindPlaceResult> {
        let url = find_place_url(&self.base_url, req, &self.api_key);
        self.fetch("find_place", &url).await
    }

    async fn fetch<T: DeserializeOwned>(&self, operation: &str, url: &str) -> Result<T> {
        debug!(operation, "Sending Google Maps request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(operation, %status, bytes = body.len(), "Received Google Maps response");

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Build the reverse geocode URL
///
/// Latitude and longitude are inserted verbatim, empty strings included.
pub fn reverse_geocode_url(
    base_url: &str,
    req: &ReverseGeocodeRequest,
    result_type: Option<&str>,
    api_key: &str,
) -> String {
    let mut url = format!(
        "{}{}?latlng={},{}",
        base_url, GEOCODE_PATH, req.latitude, req.longitude
    );

    if let Some(result_type) = result_type {
        url.push_str(&format!("&result_type={}", result_type));
    }

    url.push_str(&format!("&key={}", api_key));
    url
}

/// Build the find place from text URL
pub fn find_place_url(base_url: &str, req: &FindPlaceRequest, api_key: &str) -> String {
    format!(
        "{}{}?input={}&inputtype=textquery&fields={}&key={}",
        base_url,
        FIND_PLACE_PATH,
        encode_place_query(&req.location),
        FIND_PLACE_FIELDS.join(","),
        api_key
    )
}

/// Encode a place query for the `input` parameter
///
/// Only spaces are escaped; every other character passes through as given.
pub fn encode_place_query(query: &str) -> String {
    query.replace(' ', "%20")
}

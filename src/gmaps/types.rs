//! Request and upstream response types
//!
//! Upstream types mirror the Google Maps JSON schema. Every field falls back
//! to its empty value when the upstream omits it, so only malformed JSON or a
//! wrongly typed field fails to decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode a request string field without ever failing
///
/// `null`, numbers and other non-string values become the empty string, so one
/// bad field leaves the rest of the request intact.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

/// Reverse geocode request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseGeocodeRequest {
    /// Latitude, passed through to the upstream verbatim
    #[serde(rename = "lat", deserialize_with = "lenient_string")]
    pub latitude: String,
    /// Longitude, passed through to the upstream verbatim
    #[serde(rename = "long", deserialize_with = "lenient_string")]
    pub longitude: String,
}

impl ReverseGeocodeRequest {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// Find place request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindPlaceRequest {
    /// Free-text place query
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
}

impl FindPlaceRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Open Location Code pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlusCode {
    pub compound_code: String,
    pub global_code: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Rectangle given by its north-east and south-west corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLngBounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// Reverse geocoding response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
    pub results: Vec<GeocodeEntry>,
    /// Upstream status such as `OK` or `ZERO_RESULTS`, passed through untouched
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeEntry {
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: String,
    pub geometry: GeocodeGeometry,
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeGeometry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<LatLngBounds>,
    pub location: LatLng,
    pub location_type: String,
    pub viewport: LatLngBounds,
}

/// Find place from text response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindPlaceResult {
    pub candidates: Vec<PlaceCandidate>,
    /// Upstream status such as `OK` or `ZERO_RESULTS`, passed through untouched
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceCandidate {
    pub business_status: String,
    pub formatted_address: String,
    pub geometry: PlaceGeometry,
    pub icon: String,
    pub icon_background_color: String,
    pub icon_mask_base_uri: String,
    pub name: String,
    pub opening_hours: OpeningHours,
    pub photos: Vec<Photo>,
    pub place_id: String,
    pub plus_code: PlusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    pub rating: f64,
    pub reference: String,
    pub types: Vec<String>,
    pub user_ratings_total: u64,
}

/// Place geometry; unlike geocode results it carries no bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceGeometry {
    pub location: LatLng,
    pub viewport: LatLngBounds,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub open_now: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub height: u32,
    pub html_attributions: Vec<String>,
    pub photo_reference: String,
    pub width: u32,
}

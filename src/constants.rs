//! Centralized constants for the gmaps-location crate

/// Google Maps API endpoints
pub mod api {
    /// Base URL shared by the Geocoding and Places APIs
    pub const GMAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

    /// Reverse geocoding path, relative to the base URL
    pub const GEOCODE_PATH: &str = "/geocode/json";

    /// Find place from text path, relative to the base URL
    pub const FIND_PLACE_PATH: &str = "/place/findplacefromtext/json";

    /// Result type used by the filtered reverse geocode
    pub const STREET_ADDRESS_RESULT_TYPE: &str = "street_address";

    /// Fields requested from the find place API, in request order
    pub const FIND_PLACE_FIELDS: &[&str] = &[
        "business_status",
        "place_id",
        "icon",
        "icon_background_color",
        "icon_mask_base_uri",
        "opening_hours",
        "reference",
        "formatted_address",
        "user_ratings_total",
        "types",
        "plus_code",
        "price_level",
        "rating",
        "name",
        "geometry",
        "photos",
    ];
}

/// Process environment
pub mod env {
    /// Google Maps API key
    pub const GMAPS_API_KEY_VAR: &str = "GMAPS_API";

    /// Machine hostname
    pub const HOSTNAME_VAR: &str = "HOSTNAME";

    /// Fallback hostname source when `HOSTNAME` is unset
    pub const HOSTNAME_FILE: &str = "/etc/hostname";
}

/// Envelope values returned to callers
pub mod response {
    /// Message for every failed upstream lookup
    pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error.";
}

//! HTTP API routes
//!
//! Each route decodes its body, performs one Google Maps lookup and answers
//! with an [`Envelope`].

use crate::gmaps::{
    FindPlaceRequest, FindPlaceResult, GeocodeResult, ReverseGeocodeRequest,
};
use crate::response::Envelope;
use crate::server::state::AppState;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::post,
    Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/location", post(location_handler))
        .route("/location/filter", post(location_filter_handler))
        .route("/find_place", post(find_place_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Decode a request body, falling back to the empty request
///
/// Malformed bodies are not rejected; existing clients rely on the lookup
/// still being attempted with empty fields. Bad individual fields are
/// handled by the request types themselves. There is no body size limit.
fn decode_body<T: DeserializeOwned + Default>(handler: &str, body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!(handler, error = %e, "Ignoring undecodable request body");
        T::default()
    })
}

/// Reverse geocode a coordinate pair
///
/// POST /location
async fn location_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Envelope<GeocodeResult> {
    let req: ReverseGeocodeRequest = decode_body("location", &body);
    Envelope::from_lookup("location", state.gmaps.reverse_geocode(&req).await)
}

/// Reverse geocode restricted to street addresses
///
/// POST /location/filter
async fn location_filter_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Envelope<GeocodeResult> {
    let req: ReverseGeocodeRequest = decode_body("location_filter", &body);
    Envelope::from_lookup(
        "location_filter",
        state.gmaps.reverse_geocode_filtered(&req).await,
    )
}

/// Find places from a text query
///
/// POST /find_place
async fn find_place_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Envelope<FindPlaceResult> {
    let req: FindPlaceRequest = decode_body("find_place", &body);
    Envelope::from_lookup("find_place", state.gmaps.find_place(&req).await)
}

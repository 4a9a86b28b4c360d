//! gmaps-location: Google Maps geocoding and place lookup proxy
//!
//! A small HTTP service that forwards reverse geocoding and find-place
//! requests to the Google Maps APIs and wraps the upstream JSON in a uniform
//! `{status, code, data|message}` envelope.
//!
//! ## Endpoints
//!
//! - `POST /location` with `{"lat", "long"}`: reverse geocode
//! - `POST /location/filter` with `{"lat", "long"}`: street addresses only
//! - `POST /find_place` with `{"location"}`: find place from text
//!
//! ## Quick Start
//!
//! ```no_run
//! use gmaps_location::config::GmapsConfig;
//! use gmaps_location::gmaps::{GmapsClient, ReverseGeocodeRequest};
//!
//! # async fn example() -> gmaps_location::Result<()> {
//! let config = GmapsConfig {
//!     api_key: "your-api-key".to_string(),
//!     ..GmapsConfig::default()
//! };
//! let client = GmapsClient::new(&config);
//!
//! let result = client
//!     .reverse_geocode(&ReverseGeocodeRequest::new("-6.175392", "106.827153"))
//!     .await?;
//! println!("{}: {} results", result.status, result.results.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod gmaps;
pub mod response;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use gmaps::GmapsClient;
pub use response::Envelope;

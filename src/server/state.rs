//! Server shared state
//!
//! Holds the upstream client. Built once at startup and never mutated, so
//! handlers read it without locking.

use crate::config::Config;
use crate::gmaps::GmapsClient;

/// Shared state for the HTTP server
#[derive(Debug)]
pub struct AppState {
    /// Google Maps client
    pub gmaps: GmapsClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: &Config) -> Self {
        Self {
            gmaps: GmapsClient::new(&config.gmaps),
        }
    }
}

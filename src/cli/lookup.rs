//! One-shot lookup commands
//!
//! Run a single Google Maps lookup and print the same envelope the HTTP
//! service would return.

use crate::config::Config;
use crate::error::Result;
use crate::gmaps::{FindPlaceRequest, GmapsClient, ReverseGeocodeRequest};
use crate::response::Envelope;
use clap::Args;
use serde::Serialize;

/// Location command arguments
#[derive(Args)]
pub struct LocationArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub long: String,

    /// Only return street addresses
    #[arg(long)]
    pub filter: bool,
}

/// Find place command arguments
#[derive(Args)]
pub struct FindPlaceArgs {
    /// Place query, e.g. "Rumah Sakit Dirgahayu"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl FindPlaceArgs {
    /// Query words joined back into a single string
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}

/// Run the location command
pub async fn run_location(args: LocationArgs) -> Result<()> {
    super::init_logging("warn");

    let config = Config::load()?;
    let client = GmapsClient::new(&config.gmaps);
    let req = ReverseGeocodeRequest::new(args.lat, args.long);

    let envelope = if args.filter {
        Envelope::from_lookup("location_filter", client.reverse_geocode_filtered(&req).await)
    } else {
        Envelope::from_lookup("location", client.reverse_geocode(&req).await)
    };

    print_envelope(&envelope)
}

/// Run the find-place command
pub async fn run_find_place(args: FindPlaceArgs) -> Result<()> {
    super::init_logging("warn");

    let config = Config::load()?;
    let client = GmapsClient::new(&config.gmaps);
    let req = FindPlaceRequest::new(args.query());

    let envelope = Envelope::from_lookup("find_place", client.find_place(&req).await);
    print_envelope(&envelope)
}

fn print_envelope<T: Serialize>(envelope: &Envelope<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}

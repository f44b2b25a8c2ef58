use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ridefare - fare quoting and booking hand-off for a car-hire service
#[derive(Parser, Debug)]
#[command(name = "ridefare")]
#[command(about = "Fare quoting and booking hand-off for a car-hire service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the JSON data file holding profile and bookings
    #[arg(long, global = true, default_value = "ridefare.json")]
    pub data_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a free-text location query into ranked candidates
    Resolve(ResolveArgs),

    /// Compute the road distance between two endpoints
    Route(RouteArgs),

    /// Quote fares for a route across the vehicle catalog
    Quote(QuoteArgs),

    /// List the vehicle catalog with rates
    Vehicles,

    /// List the quick-route preset locations
    Presets,

    /// Run the full booking flow and print the dispatcher hand-off link
    Book(BookArgs),

    /// List bookings made with a phone number
    Trips(TripsArgs),

    /// Manage the stored user profile
    Profile(ProfileArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Free-text location query (minimum 3 characters)
    pub query: String,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Pickup endpoint: a preset key (e.g. "Mumbai") or free text
    pub pickup: String,

    /// Drop endpoint: a preset key or free text
    pub drop: String,
}

#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Pickup endpoint: a preset key or free text
    pub pickup: String,

    /// Drop endpoint: a preset key or free text
    pub drop: String,

    /// Restrict the quote to one vehicle id (e.g. "v2")
    #[arg(long)]
    pub vehicle: Option<String>,
}

#[derive(Parser, Debug)]
pub struct BookArgs {
    /// Pickup endpoint: a preset key or free text
    pub pickup: String,

    /// Drop endpoint: a preset key or free text
    pub drop: String,

    /// Vehicle id from the catalog (e.g. "v2")
    #[arg(long)]
    pub vehicle: String,

    /// Customer name (defaults to the stored profile)
    #[arg(long)]
    pub name: Option<String>,

    /// Customer phone (defaults to the stored profile)
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the stored profile
    Show,

    /// Store a profile used as booking defaults
    Set {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer phone number
        #[arg(long)]
        phone: String,
    },

    /// Remove the stored profile (bookings are kept)
    Clear,
}

#[derive(Parser, Debug)]
pub struct TripsArgs {
    /// Phone number to list bookings for (defaults to the stored profile)
    #[arg(long)]
    pub phone: Option<String>,
}

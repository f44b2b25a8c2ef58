//! Command implementations

mod book;
mod config;
mod presets;
mod profile;
mod quote;
mod resolve;
mod route;
mod trips;
mod vehicles;

use crate::cli::{Cli, Commands};
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let ctx = AppContext::build(&cli)?;

    match cli.command {
        Commands::Resolve(args) => resolve::execute(args, &ctx, &output).await,
        Commands::Route(args) => route::execute(args, &ctx, &output).await,
        Commands::Quote(args) => quote::execute(args, &ctx, &output).await,
        Commands::Vehicles => vehicles::execute(&output),
        Commands::Presets => presets::execute(&ctx, &output),
        Commands::Book(args) => book::execute(args, &ctx, &output).await,
        Commands::Trips(args) => trips::execute(args, &ctx, &output).await,
        Commands::Profile(args) => profile::execute(args, &ctx, &output).await,
        Commands::Config => config::execute(&ctx, &output),
    }
}

use crate::cli::QuoteArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::{anyhow, Result};
use ridefare_core::fare;
use ridefare_core::models::vehicle::standard_catalog;
use ridefare_core::models::DistanceStatus;
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
struct QuoteRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Vehicle")]
    name: String,
    #[tabled(rename = "Seats")]
    seats: u8,
    #[tabled(rename = "Rate/km")]
    price_per_km: u32,
    #[tabled(rename = "Fare")]
    fare: u32,
}

pub async fn execute(args: QuoteArgs, ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    let pickup = ctx.resolve_endpoint(&args.pickup).await?;
    let drop = ctx.resolve_endpoint(&args.drop).await?;

    let estimate = ctx.engine.estimate(&pickup, &drop).await;
    if estimate.status == DistanceStatus::FallbackUsed {
        output.warning("routing provider unavailable, fares quoted on the fallback distance");
    }

    let mut catalog = standard_catalog();
    if let Some(id) = &args.vehicle {
        catalog.retain(|v| &v.id == id);
        if catalog.is_empty() {
            return Err(anyhow!("unknown vehicle id '{}'", id));
        }
    }

    let rows: Vec<QuoteRow> = catalog
        .iter()
        .map(|v| QuoteRow {
            id: v.id.clone(),
            name: v.name.clone(),
            seats: v.seats,
            price_per_km: v.price_per_km,
            fare: fare::fare(v, Some(estimate.km)),
        })
        .collect();

    if !output.is_json() {
        let kind = if fare::is_outstation(estimate.km) { "outstation" } else { "local" };
        output.info(format!("{} km ({} trip)", estimate.km, kind));
    }
    output.table(&rows);
    Ok(())
}

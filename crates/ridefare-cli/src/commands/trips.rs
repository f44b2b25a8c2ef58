use crate::cli::TripsArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::{anyhow, Result};
use ridefare_core::handoff;
use ridefare_core::ports::{BookingLedger, ProfileStore};
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
struct TripRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Vehicle")]
    vehicle: String,
    #[tabled(rename = "Pickup")]
    pickup: String,
    #[tabled(rename = "Drop")]
    drop: String,
    #[tabled(rename = "Km")]
    distance_km: u32,
    #[tabled(rename = "Fare")]
    fare: u32,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Follow-up")]
    follow_up: String,
}

pub async fn execute(args: TripsArgs, ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    let phone = match args.phone {
        Some(phone) => phone,
        None => ctx
            .store
            .load()
            .await?
            .map(|p| p.phone)
            .ok_or_else(|| anyhow!("no stored profile; pass --phone"))?,
    };

    let bookings = ctx.store.list_for_phone(&phone).await?;
    if bookings.is_empty() {
        output.info(format!("no trips found for {}", phone));
        return Ok(());
    }

    let dispatch = &ctx.config.dispatch_number.value;
    let rows: Vec<TripRow> = bookings
        .iter()
        .map(|b| TripRow {
            date: b.created_at.format("%d %b %Y %H:%M").to_string(),
            vehicle: b.vehicle_name.clone(),
            pickup: b.pickup.clone(),
            drop: b.drop.clone(),
            distance_km: b.distance_km,
            fare: b.fare,
            status: format!("{:?}", b.status),
            follow_up: handoff::booking_status_link(dispatch, &b.id),
        })
        .collect();

    output.table(&rows);
    Ok(())
}

use crate::output::OutputWriter;
use anyhow::Result;
use ridefare_core::models::vehicle::standard_catalog;
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
struct VehicleRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Vehicle")]
    name: String,
    #[tabled(rename = "Seats")]
    seats: u8,
    #[tabled(rename = "Rate/km")]
    price_per_km: u32,
    #[tabled(rename = "Base Fare")]
    base_fare: u32,
    #[tabled(rename = "Outstation Min km")]
    min_km: String,
    #[tabled(rename = "Features")]
    features: String,
}

pub fn execute(output: &OutputWriter) -> Result<()> {
    let rows: Vec<VehicleRow> = standard_catalog()
        .into_iter()
        .map(|v| VehicleRow {
            id: v.id,
            name: v.name,
            seats: v.seats,
            price_per_km: v.price_per_km,
            base_fare: v.base_fare,
            min_km: v.min_km_outstation.map_or("-".to_string(), |km| km.to_string()),
            features: v.features.join(", "),
        })
        .collect();

    output.table(&rows);
    Ok(())
}

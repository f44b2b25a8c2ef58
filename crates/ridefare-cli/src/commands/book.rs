use crate::cli::BookArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::{anyhow, Result};
use ridefare_core::flow::BookingFlow;
use ridefare_core::models::vehicle::standard_catalog;
use ridefare_core::ports::ProfileStore;
use ridefare_core::resolver::ResolvedCandidate;

pub async fn execute(args: BookArgs, ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    let mut flow = BookingFlow::new(
        ctx.engine.clone(),
        ctx.presets.clone(),
        ctx.store.clone(),
        standard_catalog(),
        ctx.config.dispatch_number.value.clone(),
    );

    // Contact details: explicit flags win, otherwise the stored profile.
    let profile = ctx.store.load().await?;
    let name = args.name.or_else(|| profile.as_ref().map(|p| p.name.clone()));
    let phone = args.phone.or_else(|| profile.map(|p| p.phone));
    let (Some(name), Some(phone)) = (name, phone) else {
        return Err(anyhow!("no stored profile; pass --name and --phone"));
    };

    // Preset pairs take the quick-route path; anything else resolves
    // through the geocoder.
    if ctx.presets.lookup(&args.pickup).is_some() && ctx.presets.lookup(&args.drop).is_some() {
        flow.seed_quick_route(&args.pickup, &args.drop).await?;
    } else {
        let pickup = ctx.resolve_endpoint(&args.pickup).await?;
        let drop = ctx.resolve_endpoint(&args.drop).await?;
        let pickup_label = pickup.short_label(None);
        let drop_label = drop.short_label(None);
        flow.select_pickup(ResolvedCandidate { location: pickup, short_label: pickup_label })
            .await;
        flow.select_drop(ResolvedCandidate { location: drop, short_label: drop_label }).await;
    }

    flow.advance()?;
    flow.select_vehicle(&args.vehicle)?;
    flow.advance()?;
    flow.set_customer(name, phone);

    let submitted = flow.submit().await?;

    if output.is_json() {
        output.payload(&serde_json::json!({
            "booking": submitted.booking,
            "handoff_link": submitted.handoff_link,
        }));
    } else {
        output.success(format!(
            "booked {} for {} km, estimated fare {}",
            submitted.booking.vehicle_name,
            submitted.booking.distance_km,
            submitted.booking.fare
        ));
        output.info(format!("confirm with the dispatcher: {}", submitted.handoff_link));
    }
    Ok(())
}

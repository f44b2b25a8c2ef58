use crate::cli::RouteArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::Result;
use ridefare_core::models::DistanceStatus;

pub async fn execute(args: RouteArgs, ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    let pickup = ctx.resolve_endpoint(&args.pickup).await?;
    let drop = ctx.resolve_endpoint(&args.drop).await?;

    let estimate = ctx.engine.estimate(&pickup, &drop).await;

    if estimate.status == DistanceStatus::FallbackUsed {
        output.warning("routing provider unavailable, distance is the fixed fallback");
    }

    if output.is_json() {
        output.payload(&serde_json::json!({
            "pickup": pickup,
            "drop": drop,
            "distance_km": estimate.km,
            "status": estimate.status,
        }));
    } else {
        output.info(format!("{}  ->  {}", pickup.name, drop.name));
        output.success(format!("road distance: {} km", estimate.km));
    }
    Ok(())
}

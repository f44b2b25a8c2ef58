use crate::cli::ResolveArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
struct CandidateRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Latitude")]
    lat: String,
    #[tabled(rename = "Longitude")]
    lon: String,
    #[tabled(rename = "Full Name")]
    name: String,
}

pub async fn execute(args: ResolveArgs, ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    let candidates = ctx.resolver.resolve(&args.query).await;

    if candidates.is_empty() {
        output.warning(format!("no candidates for '{}'", args.query));
        return Ok(());
    }

    let rows: Vec<CandidateRow> = candidates
        .into_iter()
        .map(|c| CandidateRow {
            label: c.short_label,
            lat: c.location.lat.clone(),
            lon: c.location.lon.clone(),
            name: c.location.name,
        })
        .collect();

    output.table(&rows);
    Ok(())
}

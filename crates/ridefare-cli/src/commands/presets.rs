use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
struct PresetRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Location")]
    name: String,
    #[tabled(rename = "Latitude")]
    lat: String,
    #[tabled(rename = "Longitude")]
    lon: String,
}

pub fn execute(ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    let rows: Vec<PresetRow> = ctx
        .presets
        .keys()
        .into_iter()
        .filter_map(|key| {
            ctx.presets.lookup(key).map(|loc| PresetRow {
                key: key.to_string(),
                name: loc.name.clone(),
                lat: loc.lat.clone(),
                lon: loc.lon.clone(),
            })
        })
        .collect();

    output.table(&rows);
    Ok(())
}

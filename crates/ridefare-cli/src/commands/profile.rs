use crate::cli::{ProfileArgs, ProfileCommands};
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::Result;
use ridefare_core::models::UserProfile;
use ridefare_core::ports::ProfileStore;

pub async fn execute(args: ProfileArgs, ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    match args.command {
        ProfileCommands::Show => match ctx.store.load().await? {
            Some(profile) => {
                if output.is_json() {
                    output.payload(&profile);
                } else {
                    output.info(format!("{} ({})", profile.name, profile.phone));
                }
            }
            None => output.info("no stored profile"),
        },
        ProfileCommands::Set { name, phone } => {
            let profile = UserProfile { name, phone };
            ctx.store.save(&profile).await?;
            output.success(format!("profile stored for {}", profile.phone));
        }
        ProfileCommands::Clear => {
            ctx.store.clear().await?;
            output.success("profile cleared");
        }
    }
    Ok(())
}

// Entrypoint for the seeder.
// - Keeps `main` small: build the API client, hand it to the scenario.
// - Returns `anyhow::Result` so any failure exits non-zero with context.

use anyhow::Context;
use demoapi_seeder::{api::ApiClient, logging, scenario};
use indicatif::{ProgressBar, ProgressStyle};

fn main() -> anyhow::Result<()> {
    logging::init();

    // Target API from `DEMOAPI_URL` / `DEMOAPI_TOKEN`, or the local demo
    // server. See `config::SeedConfig::from_env`.
    let api = ApiClient::from_env().context("Failed to build API client")?;
    tracing::info!(base_url = api.config().base_url(), "seeding");

    let progress = ProgressBar::new(scenario::TOTAL_REQUESTS);
    progress.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .context("Invalid progress template")?,
    );

    let report = scenario::run(&api, &progress);
    progress.finish_and_clear();
    let report = report.with_context(|| format!("Seeding {} failed", api.config().base_url()))?;

    println!("users:");
    for id in &report.user_ids {
        println!("  {id}");
    }
    println!("groups:");
    for (name, members) in &report.memberships {
        println!("  {name}: {}", members.join(", "));
    }
    Ok(())
}

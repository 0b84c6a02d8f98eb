use std::path::Path;

use anyhow::Context;
use url::Url;

use crate::{
    configuration::Settings,
    dal::destinations_csv,
    domain::destination::flatten_destination_entries,
    services::{extract_destination_entries, DestinationPayload, Droid},
};

/// Runs the pipeline once and returns the number of fare rows written.
/// Renderer failures are fatal and abort before any output write; a page
/// without usable data degrades to a header-only file.
pub async fn run(configuration: &Settings) -> anyhow::Result<usize> {
    /*
    1. Validate the target url before any browser session exists
    2. Render the page and capture its source
    3. Locate and parse the embedded destinations payload
    4. Flatten destination entries into fare rows
    5. Overwrite the output file, header row always present
    */

    let target_url = Url::parse(&configuration.scraper.target_url)
        .with_context(|| format!("Invalid target url: {}", configuration.scraper.target_url))?;

    log::info!("Fetching popular destinations from {}", target_url);

    let droid = Droid::new()
        .await
        .context("Failed to establish a webdriver session")?;
    let page_source = droid
        .fetch_page_source(target_url.as_str())
        .await
        .context("Failed to fetch the rendered page")?;

    let entries = match extract_destination_entries(&page_source) {
        DestinationPayload::Entries(entries) => entries,
        DestinationPayload::MarkerMissing | DestinationPayload::Malformed => vec![],
    };

    let records = flatten_destination_entries(&entries);
    if records.is_empty() {
        log::warn!("No fare rows produced; writing the header only");
    }

    destinations_csv::save_to_csv(&records, Path::new(&configuration.scraper.output_path))?;
    log::info!(
        "Saved {} fare rows to {}",
        records.len(),
        configuration.scraper.output_path
    );

    Ok(records.len())
}

use std::{fs, path::Path};

use anyhow::Context;

use crate::domain::destination::FlatRecord;

const CSV_HEADER: [&str; 4] = [
    "destination_city",
    "destination_country",
    "origin_name",
    "price",
];

/// Overwrites `output_file` with the full batch: the header row always,
/// then one row per record in input order. An empty batch leaves a
/// header-only file.
pub fn save_to_csv(records: &[FlatRecord], output_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {:?}", parent))?;
        }
    }

    let mut writer = csv::Writer::from_path(output_file)
        .with_context(|| format!("Failed to open output file {:?}", output_file))?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        let price = record.price.to_string();
        writer.write_record([
            record.destination_city.as_str(),
            record.destination_country.as_str(),
            record.origin_name.as_str(),
            price.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

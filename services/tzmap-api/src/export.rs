//! Static export of the overlay documents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use layers::layer_definitions;
use serde::Serialize;
use tz_geojson::{augment, build_band_labels, build_bands, TimezoneDataset};

use crate::config::MapConfig;

pub const BANDS_FILE: &str = "bands.geojson";
pub const BAND_LABELS_FILE: &str = "band-labels.geojson";
pub const TIMEZONES_FILE: &str = "timezones.geojson";
pub const LAYERS_FILE: &str = "layers.json";

fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let path = dir.join(name);
    let json = serde_json::to_vec_pretty(value)
        .with_context(|| format!("Failed to serialize {}", name))?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write: {:?}", path))?;
    tracing::info!(path = %path.display(), "Wrote {}", name);
    Ok(path)
}

/// Write the band, label and layer documents into `out_dir`, plus the
/// augmented dataset evaluated at `at` when one is given. Returns the paths
/// written.
pub fn export_all(
    config: &MapConfig,
    dataset: Option<&TimezoneDataset>,
    at: DateTime<Utc>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let mut written = vec![
        write_json(out_dir, BANDS_FILE, &build_bands(&config.bounds))?,
        write_json(
            out_dir,
            BAND_LABELS_FILE,
            &build_band_labels(&config.bounds, config.label_margins),
        )?,
        write_json(out_dir, LAYERS_FILE, &layer_definitions(&config.style))?,
    ];

    match dataset {
        Some(ds) => {
            let augmented = augment(ds, at, config.color_mode);
            written.push(write_json(out_dir, TIMEZONES_FILE, &augmented)?);
        }
        None => tracing::warn!("No dataset given, skipping {}", TIMEZONES_FILE),
    }

    Ok(written)
}

//! Service configuration loaded from YAML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use layers::LayerStyle;
use palette::ColorMode;
use serde::{Deserialize, Serialize};
use tz_common::MapBounds;
use tz_geojson::LabelMargins;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/tzmap.yaml";

/// Map configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Timezone boundary GeoJSON. Without one, `/api/timezones` answers 503.
    pub dataset_path: Option<PathBuf>,

    /// Extent the bands are generated for when a request has no `bbox`.
    pub bounds: MapBounds,

    pub label_margins: LabelMargins,

    /// Palette used for timezone fills.
    pub color_mode: ColorMode,

    /// Paint overrides for the layer definitions.
    pub style: LayerStyle,
}

impl MapConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Config file {} does not exist, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;
        let config =
            Self::from_yaml(&content).with_context(|| format!("Failed to parse: {:?}", path))?;

        tracing::info!(
            path = %path.display(),
            color_mode = ?config.color_mode,
            "Loaded map configuration"
        );
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: MapConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate().context("Invalid bounds")?;

        let m = self.label_margins;
        if !(m.top.is_finite() && m.bottom.is_finite()) {
            anyhow::bail!("label_margins must be finite numbers");
        }
        Ok(())
    }

    /// Apply the dataset path given on the command line or environment.
    pub fn with_dataset_override(mut self, dataset: Option<PathBuf>) -> Self {
        if dataset.is_some() {
            self.dataset_path = dataset;
        }
        self
    }
}

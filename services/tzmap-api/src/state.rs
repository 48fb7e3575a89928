//! Application state for the tzmap API.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use tz_common::{TzMapError, TzMapResult};
use tz_geojson::{load_dataset, TimezoneDataset};

use crate::config::MapConfig;

/// Shared application state. Immutable after startup.
pub struct AppState {
    pub config: MapConfig,

    /// Timezone boundaries, when a dataset is configured and loaded.
    pub dataset: Option<Arc<TimezoneDataset>>,

    /// Why the configured dataset could not be loaded.
    pub dataset_error: Option<String>,

    /// Renders `/metrics`. Absent when no recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state from configuration, loading the dataset if one is set.
    ///
    /// A dataset that fails to load is recorded rather than returned, so the
    /// service still starts and reports not-ready.
    pub fn new(config: MapConfig) -> Self {
        let (dataset, dataset_error) = match &config.dataset_path {
            None => {
                tracing::warn!("No dataset configured, timezone endpoints are disabled");
                (None, None)
            }
            Some(path) => match load_dataset(path) {
                Ok(ds) => (Some(Arc::new(ds)), None),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "Failed to load dataset");
                    (None, Some(e.to_string()))
                }
            },
        };

        Self {
            config,
            dataset,
            dataset_error,
            metrics: None,
        }
    }

    /// State with an already-loaded dataset.
    pub fn with_dataset(config: MapConfig, dataset: TimezoneDataset) -> Self {
        Self {
            config,
            dataset: Some(Arc::new(dataset)),
            dataset_error: None,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn dataset(&self) -> TzMapResult<&TimezoneDataset> {
        self.dataset
            .as_deref()
            .ok_or(TzMapError::DatasetUnavailable)
    }

    /// Ready unless a configured dataset failed to load.
    pub fn is_ready(&self) -> bool {
        self.dataset_error.is_none()
    }
}

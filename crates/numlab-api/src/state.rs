//! Application state.

use std::sync::Arc;

use crate::config::{ServerConfig, SolverDefaults};
use crate::dataset::Dataset;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Historical series for regression.
    pub dataset: Arc<Dataset>,

    /// Fallback numerical parameters.
    pub defaults: Arc<SolverDefaults>,
}

impl AppState {
    /// Create state from a dataset and defaults.
    pub fn new(dataset: Dataset, defaults: SolverDefaults) -> Self {
        Self {
            dataset: Arc::new(dataset),
            defaults: Arc::new(defaults),
        }
    }

    /// Create state from a loaded configuration, reading the dataset file
    /// when one is configured.
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let dataset = match &config.dataset_path {
            Some(path) => {
                let dataset = Dataset::from_file(path)?;
                tracing::info!("Loaded {} categories from {}", dataset.len(), path);
                dataset
            }
            None => {
                tracing::info!("No dataset configured, using built-in enrollment sample");
                Dataset::sample()
            }
        };
        Ok(Self::new(dataset, config.defaults.clone()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Dataset::sample(), SolverDefaults::default())
    }
}

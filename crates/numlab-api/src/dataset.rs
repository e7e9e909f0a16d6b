//! Historical enrollment series used by the regression endpoint.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// One category's samples: `x` are years, `y` the observed counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Named collection of series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Display order of the categories.
    pub categories: Vec<String>,
    /// Samples per category.
    pub series: BTreeMap<String, Series>,
}

impl Dataset {
    /// Loads and validates a dataset from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid dataset {}", path.display()))
    }

    /// Parses and validates a dataset from JSON text.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for name in &self.categories {
            let Some(series) = self.series.get(name) else {
                bail!("category '{name}' has no series");
            };
            if series.x.len() != series.y.len() {
                bail!(
                    "category '{name}' has {} years but {} values",
                    series.x.len(),
                    series.y.len()
                );
            }
            if !series.x.iter().chain(&series.y).all(|v| v.is_finite()) {
                bail!("category '{name}' contains non-finite values");
            }
        }
        Ok(())
    }

    /// Series for `category`, if it is listed.
    pub fn get(&self, category: &str) -> Option<&Series> {
        if self.categories.iter().any(|c| c == category) {
            self.series.get(category)
        } else {
            None
        }
    }

    /// Listed categories with their series, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> + '_ {
        self.categories
            .iter()
            .filter_map(|name| self.series.get(name).map(|s| (name.as_str(), s)))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Built-in enrollment sample, 2018 to 2024.
    pub fn sample() -> Self {
        const YEARS: [f64; 7] = [2018.0, 2019.0, 2020.0, 2021.0, 2022.0, 2023.0, 2024.0];
        let rows: [(&str, [f64; 7]); 5] = [
            ("Systems Engineering", [420.0, 455.0, 470.0, 512.0, 548.0, 590.0, 634.0]),
            ("Civil Engineering", [310.0, 318.0, 305.0, 322.0, 330.0, 341.0, 338.0]),
            ("Medicine", [280.0, 284.0, 291.0, 296.0, 305.0, 309.0, 318.0]),
            ("Business Administration", [510.0, 498.0, 470.0, 462.0, 475.0, 489.0, 501.0]),
            ("Architecture", [150.0, 162.0, 158.0, 171.0, 180.0, 176.0, 189.0]),
        ];

        Self {
            categories: rows.iter().map(|(name, _)| (*name).to_string()).collect(),
            series: rows
                .iter()
                .map(|(name, counts)| {
                    (
                        (*name).to_string(),
                        Series {
                            x: YEARS.to_vec(),
                            y: counts.to_vec(),
                        },
                    )
                })
                .collect(),
        }
    }
}

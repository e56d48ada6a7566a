// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Activity label configuration

use crate::constants::{labels, DEFAULT_CONFIG_FILE};
use crate::models::ActivityKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Main fitness configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessConfig {
    /// Record label (matched case-sensitively) to activity kind
    pub activity_labels: HashMap<String, ActivityKind>,
}

impl FitnessConfig {
    /// Load fitness configuration from file or use defaults
    pub fn load(path: Option<String>) -> Result<Self> {
        // Try explicit path first
        if let Some(config_path) = path {
            return Self::load_from_file(&config_path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::load_from_file(DEFAULT_CONFIG_FILE);
        }

        debug!("No fitness config file found, using built-in labels");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fitness config file: {}", path))?;

        let config: FitnessConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse fitness config file: {}", path))?;

        debug!(path, labels = config.activity_labels.len(), "Loaded fitness config");
        Ok(config)
    }

    /// Map a record label to its activity kind
    pub fn activity_kind(&self, label: &str) -> ActivityKind {
        self.activity_labels
            .get(label)
            .copied()
            .unwrap_or(ActivityKind::Unknown)
    }
}

impl Default for FitnessConfig {
    fn default() -> Self {
        let activity_labels = HashMap::from([
            (labels::WALKING_RU.to_string(), ActivityKind::Walking),
            (labels::RUNNING_RU.to_string(), ActivityKind::Running),
            (labels::WALKING.to_string(), ActivityKind::Walking),
            (labels::RUNNING.to_string(), ActivityKind::Running),
        ]);

        Self { activity_labels }
    }
}

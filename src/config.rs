//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Pipeline Configuration
//!
//! Declarative description of a transformation pipeline.
//!
//! ```json
//! {
//!   "mask_grammar": "substitution",
//!   "directives": ["rename cc card_number", "mask card_number right * 4"]
//! }
//! ```
//!
//! The same structure can be written in YAML. Files with any other extension
//! are read as a directive script with the default `mask` revision.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::pipeline::{parse_script, ZiTransformationPipeline};
use crate::registry::{ZiMaskGrammar, ZiTransformationRegistry};

/// Configuration of one transformation pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZiPipelineConfig {
    /// Revision the `mask` keyword compiles to.
    pub mask_grammar: ZiMaskGrammar,
    /// Directives in application order.
    pub directives: Vec<String>,
}

impl ZiPipelineConfig {
    pub fn new(mask_grammar: ZiMaskGrammar, directives: Vec<String>) -> Self {
        ZiPipelineConfig {
            mask_grammar,
            directives,
        }
    }

    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source)
            .map_err(|e| ZiError::config(format!("Invalid JSON config: {}", e)))
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source)
            .map_err(|e| ZiError::config(format!("Invalid YAML config: {}", e)))
    }

    /// Reads a configuration file, choosing the format by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => Self::from_json(&content),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml(&content),
            #[cfg(not(feature = "yaml"))]
            "yaml" | "yml" => Err(ZiError::config(
                "YAML configuration requires the 'yaml' feature",
            )),
            _ => Ok(ZiPipelineConfig {
                mask_grammar: ZiMaskGrammar::default(),
                directives: parse_script(&content),
            }),
        }
    }

    pub fn registry(&self) -> ZiTransformationRegistry {
        ZiTransformationRegistry::with_mask_grammar(self.mask_grammar)
    }

    pub fn build_pipeline(&self) -> Result<ZiTransformationPipeline> {
        ZiTransformationPipeline::compile(&self.directives, &self.registry())
    }
}

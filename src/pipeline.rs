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

//! # Zi Pipeline Module
//!
//! Compiles a list of directives once and applies the resulting
//! transformations, in declared order, to schemas and rows.
//!
//! ## Directive Scripts
//!
//! A script holds one directive per line:
//!
//! ```text
//! # normalise the customer feed
//! rename cust_id customer_id
//! to-string customer_id
//! mask card_number right * 4
//! ```
//!
//! Lines are trimmed; blank lines and `#` comments are skipped.

use crate::directive::ZiTransformationContext;
use crate::errors::Result;
use crate::record::{ZiRow, ZiRowValue};
use crate::registry::{ZiTransformationOp, ZiTransformationRegistry};
use crate::schema::{ZiRowSchema, ZiSchema};
use crate::transformation::ZiTransformation;

/// Ordered, compiled transformations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZiTransformationPipeline {
    stages: Vec<ZiTransformationOp>,
}

impl ZiTransformationPipeline {
    /// Constructs a pipeline from already compiled transformations.
    pub fn new(stages: Vec<ZiTransformationOp>) -> Self {
        ZiTransformationPipeline { stages }
    }

    /// Compiles every directive. The first failure aborts compilation.
    pub fn compile<I, S>(directives: I, registry: &ZiTransformationRegistry) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: ZiTransformationContext,
    {
        let mut stages = Vec::new();
        for (idx, directive) in directives.into_iter().enumerate() {
            match registry.compile(&directive) {
                Ok(op) => stages.push(op),
                Err(err) => {
                    log::error!(
                        "directive {} ('{}') failed to compile: {}",
                        idx + 1,
                        directive.command_line().unwrap_or("<null>"),
                        err
                    );
                    return Err(err);
                }
            }
        }
        log::info!("compiled transformation pipeline with {} stages", stages.len());
        Ok(ZiTransformationPipeline { stages })
    }

    /// Compiles a multi-line directive script.
    pub fn compile_script(script: &str, registry: &ZiTransformationRegistry) -> Result<Self> {
        Self::compile(parse_script(script), registry)
    }

    pub fn stages(&self) -> &[ZiTransformationOp] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Canonical directive text of every stage.
    pub fn directives(&self) -> Vec<String> {
        self.stages.iter().map(ToString::to_string).collect()
    }

    /// Applies the schema step, then every row, stopping at the first error.
    pub fn run(&self, schema: &mut ZiSchema, batch: &mut [ZiRow]) -> Result<()> {
        self.transform_schema(schema)?;
        for row in batch.iter_mut() {
            self.transform_value(row)?;
        }
        Ok(())
    }
}

impl ZiTransformation for ZiTransformationPipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn transform_schema(&self, schema: &mut dyn ZiRowSchema) -> Result<()> {
        for stage in &self.stages {
            stage.transform_schema(schema).map_err(|err| {
                log::warn!("schema step '{}' failed: {}", stage, err);
                err
            })?;
        }
        Ok(())
    }

    fn transform_value(&self, value: &mut dyn ZiRowValue) -> Result<()> {
        for stage in &self.stages {
            stage.transform_value(value).map_err(|err| {
                log::warn!("value step '{}' failed: {}", stage, err);
                err
            })?;
        }
        Ok(())
    }
}

/// Splits a directive script into directives.
pub fn parse_script(script: &str) -> Vec<String> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

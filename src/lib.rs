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

//! # Zi Delta Core Library
//!
//! Row-level transformations for change-data-capture records. Short textual
//! directives such as `rename a b` or `mask card right * 4` are compiled once
//! into transformations, then applied in declared order to every record's
//! schema and value as it streams through.
//!
//! ## Module Overview
//!
//! - **errors**: `ZiError` and the crate-wide `Result`
//! - **schema**: Field declarations and the `ZiRowSchema` capability contract
//! - **record**: Column values and the `ZiRowValue` capability contract
//! - **directive**: Tokenizing and grammar validation of directive text
//! - **transformation**: The `ZiTransformation` trait
//! - **transformations**: Rename, ToString and the two Mask revisions
//! - **registry**: Keyword-to-transformation dispatch
//! - **pipeline**: Ordered application of compiled transformations
//! - **config**: JSON/YAML pipeline configuration
//!
//! ## Feature Flags
//!
//! - `yaml`: YAML configuration files (enabled by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use zix_delta::{ZiRow, ZiSchema, ZiFieldType, ZiTransformationPipeline, ZiTransformationRegistry};
//! use serde_json::json;
//!
//! let registry = ZiTransformationRegistry::with_defaults();
//! let pipeline = ZiTransformationPipeline::compile(
//!     ["rename cc card_number", "mask card_number right * 4"],
//!     &registry,
//! ).unwrap();
//!
//! let mut schema = ZiSchema::default().with_field("cc", ZiFieldType::String);
//! let mut rows = vec![ZiRow::from_json(json!({"cc": "4111111111111111"})).unwrap()];
//! pipeline.run(&mut schema, &mut rows).unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Directive problems surface as `ZiError::InvalidDirective` while compiling;
//! wrong-typed fields or values surface as `ZiError::TypeMismatch` while
//! transforming. Null values are skipped, never reported.

pub mod config;
pub mod directive;
pub mod errors;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod schema;
pub mod transformation;
pub mod transformations;

pub use config::ZiPipelineConfig;
pub use directive::{ZiDirective, ZiGrammar, ZiSplitPolicy, ZiTransformationContext};
pub use errors::{Result, ZiError};
pub use pipeline::ZiTransformationPipeline;
pub use record::{ZiRow, ZiRowBatch, ZiRowValue};
pub use registry::{ZiMaskGrammar, ZiTransformationKind, ZiTransformationOp, ZiTransformationRegistry};
pub use schema::{ZiField, ZiFieldType, ZiRowSchema, ZiSchema};
pub use transformation::ZiTransformation;
pub use transformations::{ZiMaskDirection, ZiMaskRange, ZiMaskSubstitution, ZiRename, ZiToString};

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

//! # Zi Transformation Module
//!
//! The contract every directive-built transformation fulfils.
//!
//! ## Lifecycle
//!
//! 1. **Initialize**: a transformation is built once from its directive text
//!    when the pipeline is compiled. Parameters are immutable from then on
//! 2. **Transform schema**: called once per schema change
//! 3. **Transform value**: called once per record
//!
//! Both transform calls take `&self`, so an initialized transformation holds
//! no mutable state and may be shared across worker threads as long as each
//! call gets its own schema or row.
//!
//! ```rust
//! use zix_delta::errors::Result;
//! use zix_delta::record::ZiRowValue;
//! use zix_delta::schema::ZiRowSchema;
//! use zix_delta::transformation::ZiTransformation;
//!
//! #[derive(Debug)]
//! struct Passthrough;
//!
//! impl ZiTransformation for Passthrough {
//!     fn name(&self) -> &'static str {
//!         "passthrough"
//!     }
//!
//!     fn transform_schema(&self, _schema: &mut dyn ZiRowSchema) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn transform_value(&self, _value: &mut dyn ZiRowValue) -> Result<()> {
//!         Ok(())
//!     }
//! }
//! ```

use crate::errors::Result;
use crate::record::ZiRowValue;
use crate::schema::ZiRowSchema;

/// Contracts that every Zi Delta transformation must fulfill.
pub trait ZiTransformation: std::fmt::Debug + Send + Sync {
    /// Directive keyword of the transformation, used in logs.
    fn name(&self) -> &'static str;

    /// Validates and, for widening transformations, rewrites the schema.
    fn transform_schema(&self, schema: &mut dyn ZiRowSchema) -> Result<()>;

    /// Rewrites one row in place.
    fn transform_value(&self, value: &mut dyn ZiRowValue) -> Result<()>;
}

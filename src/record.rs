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

//! # Zi Record Module
//!
//! Column values of a change record and the capability contract a row object
//! must satisfy for transformations to read and rewrite it.
//!
//! ## Design Principles
//!
//! - **JSON values**: Columns hold `serde_json::Value`, so any host
//!   representation can be adapted without a bespoke value type
//! - **Null is absent**: `Value::Null` stands for a missing value; operators
//!   skip it rather than failing
//! - **Borrowed, not owned**: Transformations receive `&mut dyn ZiRowValue`
//!   for one call and never keep it
//!
//! ## Usage Example
//!
//! ```rust
//! use zix_delta::record::{ZiRow, ZiRowValue};
//! use serde_json::json;
//!
//! let mut row = ZiRow::from_json(json!({"card": "4111111111111111", "active": true})).unwrap();
//! row.rename_column("card", "card_number").unwrap();
//! assert_eq!(row.get_column_value("card_number").unwrap(), &json!("4111111111111111"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};

/// Capability contract for a mutable row value.
pub trait ZiRowValue {
    /// Reads a column, failing with [`ZiError::NotFound`].
    fn get_column_value(&self, name: &str) -> Result<&Value>;

    /// Writes a column, adding it if it does not exist.
    fn set_column_value(&mut self, name: &str, value: Value);

    /// Renames a column, failing with [`ZiError::NotFound`] if `from` is absent.
    fn rename_column(&mut self, from: &str, to: &str) -> Result<()>;
}

/// In-memory row backed by a JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZiRow {
    columns: Map<String, Value>,
}

impl ZiRow {
    pub fn new() -> Self {
        ZiRow::default()
    }

    /// Builds a row from a JSON object. Any other JSON value is rejected.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(columns) => Ok(ZiRow { columns }),
            other => Err(ZiError::type_mismatch(format!(
                "row must be a JSON object, got {other}"
            ))),
        }
    }

    /// Adds a column, builder style.
    pub fn with_column(mut self, name: impl Into<String>, value: Value) -> Self {
        self.columns.insert(name.into(), value);
        self
    }

    pub fn columns(&self) -> &Map<String, Value> {
        &self.columns
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.columns)
    }
}

impl ZiRowValue for ZiRow {
    fn get_column_value(&self, name: &str) -> Result<&Value> {
        self.columns
            .get(name)
            .ok_or_else(|| ZiError::not_found(name))
    }

    fn set_column_value(&mut self, name: &str, value: Value) {
        self.columns.insert(name.to_string(), value);
    }

    fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        let value = self
            .columns
            .remove(from)
            .ok_or_else(|| ZiError::not_found(from))?;
        self.columns.insert(to.to_string(), value);
        Ok(())
    }
}

/// Convenience alias for working on batches of rows.
pub type ZiRowBatch = Vec<ZiRow>;

/// Textual representation of a column value.
///
/// Strings are returned verbatim; every other value uses its compact JSON
/// form (`true`, `42`, `1.5`, `[1,2]`). Null has no textual form.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

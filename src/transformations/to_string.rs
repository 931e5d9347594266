//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.
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

use std::fmt;

use serde_json::Value;

use crate::directive::{ZiGrammar, ZiSplitPolicy, ZiTransformationContext};
use crate::errors::Result;
use crate::record::{value_to_text, ZiRowValue};
use crate::schema::{ZiField, ZiFieldType, ZiRowSchema};
use crate::transformation::ZiTransformation;

/// `to-string column_name`
///
/// The only transformation that widens the schema: the column's declared
/// type becomes `string` whatever it was before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiToString {
    column: String,
}

impl ZiToString {
    pub const NAME: &'static str = "to-string";

    pub const GRAMMAR: ZiGrammar = ZiGrammar {
        keyword: Self::NAME,
        arity: 2,
        split: ZiSplitPolicy::SingleSpace,
        usage: "to-string column_name",
    };

    pub fn initialize<C: ZiTransformationContext + ?Sized>(context: &C) -> Result<Self> {
        let directive = Self::GRAMMAR.parse(context)?;
        Ok(ZiToString {
            column: directive.arg(1)?.to_string(),
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}

impl ZiTransformation for ZiToString {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform_schema(&self, schema: &mut dyn ZiRowSchema) -> Result<()> {
        schema.set_field(ZiField::new(self.column.clone(), ZiFieldType::String));
        Ok(())
    }

    fn transform_value(&self, value: &mut dyn ZiRowValue) -> Result<()> {
        let text = match value_to_text(value.get_column_value(&self.column)?) {
            Some(text) => text,
            None => return Ok(()),
        };
        value.set_column_value(&self.column, Value::String(text));
        Ok(())
    }
}

impl fmt::Display for ZiToString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::NAME, self.column)
    }
}

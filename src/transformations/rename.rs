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

use crate::directive::{ZiGrammar, ZiSplitPolicy, ZiTransformationContext};
use crate::errors::Result;
use crate::record::ZiRowValue;
use crate::schema::ZiRowSchema;
use crate::transformation::ZiTransformation;

/// `rename old_column_name new_column_name`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiRename {
    from_column: String,
    to_column: String,
}

impl ZiRename {
    pub const NAME: &'static str = "rename";

    pub const GRAMMAR: ZiGrammar = ZiGrammar {
        keyword: Self::NAME,
        arity: 3,
        split: ZiSplitPolicy::Whitespace,
        usage: "rename old_column_name new_column_name",
    };

    pub fn initialize<C: ZiTransformationContext + ?Sized>(context: &C) -> Result<Self> {
        let directive = Self::GRAMMAR.parse(context)?;
        Ok(ZiRename {
            from_column: directive.arg(1)?.to_string(),
            to_column: directive.arg(2)?.to_string(),
        })
    }

    pub fn from_column(&self) -> &str {
        &self.from_column
    }

    pub fn to_column(&self) -> &str {
        &self.to_column
    }
}

impl ZiTransformation for ZiRename {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform_schema(&self, schema: &mut dyn ZiRowSchema) -> Result<()> {
        schema.rename_field(&self.from_column, &self.to_column)
    }

    fn transform_value(&self, value: &mut dyn ZiRowValue) -> Result<()> {
        value.rename_column(&self.from_column, &self.to_column)
    }
}

impl fmt::Display for ZiRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", Self::NAME, self.from_column, self.to_column)
    }
}

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

//! # Mask Transformations
//!
//! Two revisions of the `mask` directive live here. A pipeline binds the
//! keyword to exactly one of them (see [`crate::registry::ZiMaskGrammar`]):
//!
//! - **Range** (`mask column from_position to_position`): replaces the
//!   characters in `[from, min(to, len))` with `*`
//! - **Substitution** (`mask column left|right mask_char n`): keeps `n`
//!   leading (`left`) or trailing (`right`) characters and replaces every
//!   other character with `mask_char`
//!
//! Positions and lengths count characters, not bytes. Masking never changes
//! the length of a value nor its declared type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::directive::{ZiGrammar, ZiSplitPolicy, ZiTransformationContext};
use crate::errors::{Result, ZiError};
use crate::record::ZiRowValue;
use crate::schema::ZiRowSchema;
use crate::transformation::ZiTransformation;

pub const NAME: &str = "mask";

/// Mask character of the range revision.
pub const MASK_CHARACTER: char = '*';

/// Reads a textual column value. `Ok(None)` means the value is absent.
fn read_text<'a>(value: &'a dyn ZiRowValue, column: &str) -> Result<Option<&'a str>> {
    match value.get_column_value(column)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.as_str())),
        _ => Err(ZiError::type_mismatch(format!(
            "Column {column} is supposed to have string value."
        ))),
    }
}

fn mask_where(text: &str, mask_char: char, masked: impl Fn(usize) -> bool) -> String {
    text.chars()
        .enumerate()
        .map(|(idx, c)| if masked(idx) { mask_char } else { c })
        .collect()
}

/// `mask column_name from_position to_position`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiMaskRange {
    column: String,
    from_pos: usize,
    to_pos: usize,
}

impl ZiMaskRange {
    pub const GRAMMAR: ZiGrammar = ZiGrammar {
        keyword: NAME,
        arity: 4,
        split: ZiSplitPolicy::SingleSpace,
        usage: "mask column_name from_position to_position",
    };

    pub fn initialize<C: ZiTransformationContext + ?Sized>(context: &C) -> Result<Self> {
        let directive = Self::GRAMMAR.parse(context)?;
        let column = directive.arg(1)?.to_string();
        let from_pos = directive.position_arg(2, "from_position")?;
        let to_pos = directive.position_arg(3, "to_position")?;
        if from_pos > to_pos {
            return Err(ZiError::invalid_directive(format!(
                "from_position {from_pos} is greater than to_position {to_pos}."
            )));
        }
        Ok(ZiMaskRange {
            column,
            from_pos,
            to_pos,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Masks `text`, or returns `None` when the range starts past its end.
    pub fn mask(&self, text: &str) -> Option<String> {
        let len = text.chars().count();
        if len <= self.from_pos {
            return None;
        }
        let end = self.to_pos.min(len);
        let range = self.from_pos..end;
        Some(mask_where(text, MASK_CHARACTER, |idx| range.contains(&idx)))
    }
}

impl ZiTransformation for ZiMaskRange {
    fn name(&self) -> &'static str {
        NAME
    }

    fn transform_schema(&self, schema: &mut dyn ZiRowSchema) -> Result<()> {
        let field = schema.get_field(&self.column)?;
        if !field.field_type.is_string() {
            return Err(ZiError::type_mismatch(format!(
                "Field {} is supposed to be string, found {}.",
                self.column, field.field_type
            )));
        }
        Ok(())
    }

    fn transform_value(&self, value: &mut dyn ZiRowValue) -> Result<()> {
        let masked = match read_text(&*value, &self.column)? {
            Some(text) => self.mask(text),
            None => None,
        };
        if let Some(masked) = masked {
            value.set_column_value(&self.column, Value::String(masked));
        }
        Ok(())
    }
}

impl fmt::Display for ZiMaskRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAME} {} {} {}", self.column, self.from_pos, self.to_pos)
    }
}

/// Which end of the value stays readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiMaskDirection {
    /// Keep the leading characters, mask the rest.
    Left,
    /// Keep the trailing characters, mask the rest.
    Right,
}

impl FromStr for ZiMaskDirection {
    type Err = ZiError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("left") {
            Ok(ZiMaskDirection::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(ZiMaskDirection::Right)
        } else {
            Err(ZiError::invalid_directive(format!(
                "Masking direction '{s}' must be either left or right."
            )))
        }
    }
}

impl fmt::Display for ZiMaskDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiMaskDirection::Left => write!(f, "left"),
            ZiMaskDirection::Right => write!(f, "right"),
        }
    }
}

/// `mask column_name left|right mask_char n`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiMaskSubstitution {
    column: String,
    direction: ZiMaskDirection,
    mask_char: char,
    count: usize,
}

impl ZiMaskSubstitution {
    pub const GRAMMAR: ZiGrammar = ZiGrammar {
        keyword: NAME,
        arity: 5,
        split: ZiSplitPolicy::SingleSpace,
        usage: "mask column_name left|right mask_char n",
    };

    pub fn initialize<C: ZiTransformationContext + ?Sized>(context: &C) -> Result<Self> {
        let directive = Self::GRAMMAR.parse(context)?;
        let column = directive.arg(1)?.to_string();
        let direction = directive.arg(2)?.parse::<ZiMaskDirection>()?;
        let mask_char = directive.char_arg(3, "mask_char")?;
        let count = directive.count_arg(4, "n")?;
        Ok(ZiMaskSubstitution {
            column,
            direction,
            mask_char,
            count,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn direction(&self) -> ZiMaskDirection {
        self.direction
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Masks `text`, or returns `None` when it is too short to mask anything
    /// while keeping `count` characters readable.
    pub fn mask(&self, text: &str) -> Option<String> {
        let len = text.chars().count();
        if len <= self.count {
            return None;
        }
        let masked = match self.direction {
            ZiMaskDirection::Right => {
                let keep_from = len - self.count;
                mask_where(text, self.mask_char, |idx| idx < keep_from)
            }
            ZiMaskDirection::Left => mask_where(text, self.mask_char, |idx| idx >= self.count),
        };
        Some(masked)
    }
}

impl ZiTransformation for ZiMaskSubstitution {
    fn name(&self) -> &'static str {
        NAME
    }

    fn transform_schema(&self, schema: &mut dyn ZiRowSchema) -> Result<()> {
        let field = schema.get_field(&self.column)?;
        let field_type = &field.field_type;
        let is_string = field_type.is_string()
            || field_type
                .non_null_branch()
                .is_some_and(|branch| branch.is_string());
        if !is_string {
            return Err(ZiError::type_mismatch(format!(
                "Field {} is supposed to be string, found {}.",
                self.column, field_type
            )));
        }
        Ok(())
    }

    fn transform_value(&self, value: &mut dyn ZiRowValue) -> Result<()> {
        let masked = match read_text(&*value, &self.column)? {
            Some(text) => self.mask(text),
            None => None,
        };
        if let Some(masked) = masked {
            value.set_column_value(&self.column, Value::String(masked));
        }
        Ok(())
    }
}

impl fmt::Display for ZiMaskSubstitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{NAME} {} {} {} {}",
            self.column, self.direction, self.mask_char, self.count
        )
    }
}

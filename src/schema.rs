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

//! # Zi Schema Module
//!
//! Field declarations of a change record and the capability contract a
//! schema object must satisfy for transformations to inspect and mutate it.
//!
//! Transformations only ever see `&mut dyn ZiRowSchema`; [`ZiSchema`] is the
//! in-memory implementation used by the pipeline runner and tests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Declared type of a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiFieldType {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    /// A value of any one of the member types.
    Union(Vec<ZiFieldType>),
}

impl ZiFieldType {
    /// Builds the nullable wrapper `Union([inner, Null])`.
    pub fn nullable(inner: ZiFieldType) -> Self {
        ZiFieldType::Union(vec![inner, ZiFieldType::Null])
    }

    /// True only for the plain string type. A nullable string is not.
    pub fn is_string(&self) -> bool {
        matches!(self, ZiFieldType::String)
    }

    /// Returns the non-null member of a nullable wrapper.
    ///
    /// Only two-member unions with exactly one `Null` member qualify; any
    /// other type yields `None`.
    pub fn non_null_branch(&self) -> Option<&ZiFieldType> {
        match self {
            ZiFieldType::Union(members) if members.len() == 2 => {
                match (&members[0], &members[1]) {
                    (ZiFieldType::Null, ZiFieldType::Null) => None,
                    (ZiFieldType::Null, other) | (other, ZiFieldType::Null) => Some(other),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for ZiFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiFieldType::Null => write!(f, "null"),
            ZiFieldType::Boolean => write!(f, "boolean"),
            ZiFieldType::Int => write!(f, "int"),
            ZiFieldType::Long => write!(f, "long"),
            ZiFieldType::Float => write!(f, "float"),
            ZiFieldType::Double => write!(f, "double"),
            ZiFieldType::Bytes => write!(f, "bytes"),
            ZiFieldType::String => write!(f, "string"),
            ZiFieldType::Union(members) => {
                write!(f, "union[")?;
                for (idx, member) in members.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{member}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A named, typed field declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: ZiFieldType,
}

impl ZiField {
    pub fn new(name: impl Into<String>, field_type: ZiFieldType) -> Self {
        ZiField {
            name: name.into(),
            field_type,
        }
    }
}

/// Capability contract for a mutable record schema.
///
/// Implementations are owned by the host pipeline; transformations borrow
/// them for the duration of one `transform_schema` call.
pub trait ZiRowSchema {
    /// Looks up a field by name, failing with [`ZiError::NotFound`].
    fn get_field(&self, name: &str) -> Result<&ZiField>;

    /// Replaces the field with the same name, or adds it.
    fn set_field(&mut self, field: ZiField);

    /// Renames a field, failing with [`ZiError::NotFound`] if `from` is absent.
    fn rename_field(&mut self, from: &str, to: &str) -> Result<()>;
}

/// Ordered in-memory schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiSchema {
    fields: Vec<ZiField>,
}

impl ZiSchema {
    pub fn new(fields: Vec<ZiField>) -> Self {
        ZiSchema { fields }
    }

    /// Adds a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, field_type: ZiFieldType) -> Self {
        self.set_field(ZiField::new(name, field_type));
        self
    }

    pub fn fields(&self) -> &[ZiField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

impl ZiRowSchema for ZiSchema {
    fn get_field(&self, name: &str) -> Result<&ZiField> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| ZiError::not_found(name))
    }

    fn set_field(&mut self, field: ZiField) {
        match self.position(&field.name) {
            Some(idx) => self.fields[idx] = field,
            None => self.fields.push(field),
        }
    }

    fn rename_field(&mut self, from: &str, to: &str) -> Result<()> {
        if self.position(from).is_none() {
            return Err(ZiError::not_found(from));
        }
        // a field already named `to` is replaced by the renamed one
        if from != to {
            self.fields.retain(|field| field.name != to);
        }
        let idx = self.position(from).ok_or_else(|| ZiError::not_found(from))?;
        self.fields[idx].name = to.to_string();
        Ok(())
    }
}

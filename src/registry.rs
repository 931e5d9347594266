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

//! # Transformation Registry Module
//!
//! Maps directive keywords to the closed set of transformation kinds and
//! compiles directive text into ready-to-apply transformations.
//!
//! ## Registry Operations
//!
//! - Build the default keyword table for a chosen `mask` revision
//! - Look up the kind bound to a keyword
//! - Compile a directive into a [`ZiTransformationOp`]
//!
//! The `mask` keyword is bound to exactly one revision per registry. The
//! directive's token count is never used to guess which one was meant.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::directive::{keyword_of, ZiGrammar, ZiTransformationContext};
use crate::errors::{Result, ZiError};
use crate::record::ZiRowValue;
use crate::schema::ZiRowSchema;
use crate::transformation::ZiTransformation;
use crate::transformations::{ZiMaskRange, ZiMaskSubstitution, ZiRename, ZiToString};

/// Revision of the `mask` directive a registry compiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiMaskGrammar {
    /// `mask column left|right mask_char n`
    #[default]
    Substitution,
    /// `mask column from_position to_position`
    Range,
}

impl ZiMaskGrammar {
    pub fn kind(self) -> ZiTransformationKind {
        match self {
            ZiMaskGrammar::Substitution => ZiTransformationKind::MaskSubstitution,
            ZiMaskGrammar::Range => ZiTransformationKind::MaskRange,
        }
    }
}

/// The closed set of transformation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiTransformationKind {
    Rename,
    ToString,
    MaskRange,
    MaskSubstitution,
}

impl ZiTransformationKind {
    pub fn grammar(self) -> ZiGrammar {
        match self {
            ZiTransformationKind::Rename => ZiRename::GRAMMAR,
            ZiTransformationKind::ToString => ZiToString::GRAMMAR,
            ZiTransformationKind::MaskRange => ZiMaskRange::GRAMMAR,
            ZiTransformationKind::MaskSubstitution => ZiMaskSubstitution::GRAMMAR,
        }
    }

    /// Builds a transformation of this kind from directive text.
    pub fn initialize<C: ZiTransformationContext + ?Sized>(
        self,
        context: &C,
    ) -> Result<ZiTransformationOp> {
        Ok(match self {
            ZiTransformationKind::Rename => ZiTransformationOp::Rename(ZiRename::initialize(context)?),
            ZiTransformationKind::ToString => {
                ZiTransformationOp::ToString(ZiToString::initialize(context)?)
            }
            ZiTransformationKind::MaskRange => {
                ZiTransformationOp::MaskRange(ZiMaskRange::initialize(context)?)
            }
            ZiTransformationKind::MaskSubstitution => {
                ZiTransformationOp::MaskSubstitution(ZiMaskSubstitution::initialize(context)?)
            }
        })
    }
}

/// A compiled transformation of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ZiTransformationOp {
    Rename(ZiRename),
    ToString(ZiToString),
    MaskRange(ZiMaskRange),
    MaskSubstitution(ZiMaskSubstitution),
}

impl ZiTransformationOp {
    pub fn kind(&self) -> ZiTransformationKind {
        match self {
            ZiTransformationOp::Rename(_) => ZiTransformationKind::Rename,
            ZiTransformationOp::ToString(_) => ZiTransformationKind::ToString,
            ZiTransformationOp::MaskRange(_) => ZiTransformationKind::MaskRange,
            ZiTransformationOp::MaskSubstitution(_) => ZiTransformationKind::MaskSubstitution,
        }
    }

    fn as_transformation(&self) -> &dyn ZiTransformation {
        match self {
            ZiTransformationOp::Rename(op) => op,
            ZiTransformationOp::ToString(op) => op,
            ZiTransformationOp::MaskRange(op) => op,
            ZiTransformationOp::MaskSubstitution(op) => op,
        }
    }
}

impl ZiTransformation for ZiTransformationOp {
    fn name(&self) -> &'static str {
        self.as_transformation().name()
    }

    fn transform_schema(&self, schema: &mut dyn ZiRowSchema) -> Result<()> {
        self.as_transformation().transform_schema(schema)
    }

    fn transform_value(&self, value: &mut dyn ZiRowValue) -> Result<()> {
        self.as_transformation().transform_value(value)
    }
}

impl fmt::Display for ZiTransformationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiTransformationOp::Rename(op) => fmt::Display::fmt(op, f),
            ZiTransformationOp::ToString(op) => fmt::Display::fmt(op, f),
            ZiTransformationOp::MaskRange(op) => fmt::Display::fmt(op, f),
            ZiTransformationOp::MaskSubstitution(op) => fmt::Display::fmt(op, f),
        }
    }
}

/// Registry mapping directive keywords to transformation kinds.
#[derive(Clone, Debug, Default)]
pub struct ZiTransformationRegistry {
    inner: HashMap<String, ZiTransformationKind>,
}

impl ZiTransformationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ZiTransformationRegistry {
            inner: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in keyword, `mask` bound to the
    /// substitution revision.
    pub fn with_defaults() -> Self {
        Self::with_mask_grammar(ZiMaskGrammar::default())
    }

    /// Creates a registry with every built-in keyword, `mask` bound to the
    /// given revision.
    pub fn with_mask_grammar(grammar: ZiMaskGrammar) -> Self {
        let mut registry = Self::new();
        for kind in [
            ZiTransformationKind::Rename,
            ZiTransformationKind::ToString,
            grammar.kind(),
        ] {
            registry.inner.insert(kind.grammar().keyword.to_string(), kind);
        }
        registry
    }

    /// Binds a keyword to a kind, replacing any previous binding.
    ///
    /// The keyword must be the one the kind's grammar expects, otherwise no
    /// directive could ever compile through it.
    pub fn register(&mut self, keyword: &str, kind: ZiTransformationKind) -> Result<()> {
        let expected = kind.grammar().keyword;
        if keyword != expected {
            return Err(ZiError::config(format!(
                "keyword '{keyword}' cannot be bound to {kind:?}, which expects '{expected}'"
            )));
        }
        self.inner.insert(keyword.to_string(), kind);
        Ok(())
    }

    pub fn kind_for(&self, keyword: &str) -> Result<ZiTransformationKind> {
        self.inner.get(keyword).copied().ok_or_else(|| {
            ZiError::invalid_directive(format!("unknown transformation keyword: {keyword}"))
        })
    }

    /// Registered keywords, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.inner.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Compiles one directive.
    pub fn compile<C: ZiTransformationContext + ?Sized>(
        &self,
        context: &C,
    ) -> Result<ZiTransformationOp> {
        let command_line = context
            .command_line()
            .ok_or_else(|| ZiError::invalid_directive("Directive command line is null."))?;
        let keyword = keyword_of(command_line)
            .ok_or_else(|| ZiError::invalid_directive("Directive command line is empty."))?;
        let kind = self.kind_for(keyword)?;
        let op = kind.initialize(command_line)?;
        log::debug!("compiled directive '{}' as {:?}", command_line, kind);
        Ok(op)
    }
}

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

//! # Zi Delta Error Module
//!
//! This module defines the error types shared by the directive parser, the
//! transformation operators and the pipeline runner.
//!
//! ## Error Categories
//!
//! - **InvalidDirective**: Malformed directive text. Always raised while a
//!   transformation is initialized, never while it is applied
//! - **TypeMismatch**: A targeted field or value does not have the expected
//!   type. Raised while a record is transformed
//! - **NotFound**: A schema field or row column does not exist
//! - **Config**: Malformed pipeline configuration
//! - **Io** / **Serde**: Wrapped filesystem and (de)serialization failures
//!
//! Absent (null) values are never an error: they are skipped, which keeps
//! "missing data" distinct from "wrong-typed data".
//!
//! ## Usage
//!
//! ```rust
//! use zix_delta::errors::{Result, ZiError};
//!
//! fn parse_position(token: &str) -> Result<usize> {
//!     token
//!         .parse::<usize>()
//!         .map_err(|_| ZiError::invalid_directive(format!("'{token}' is not a position")))
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi Delta.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Delta.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ZiError {
    /// Directive text that does not match the grammar of its transformation.
    #[error("invalid directive: {message}")]
    InvalidDirective { message: String },

    /// A field declaration or column value of an unexpected type.
    #[error("type mismatch: {message}")]
    TypeMismatch { message: String },

    /// Lookup of a field or column that does not exist.
    #[error("'{name}' not found")]
    NotFound { name: String },

    /// Malformed pipeline configuration.
    #[error("config error: {message}")]
    Config { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct invalid directive errors.
    pub fn invalid_directive<T: Into<String>>(message: T) -> Self {
        ZiError::InvalidDirective {
            message: message.into(),
        }
    }

    /// Helper to construct type mismatch errors.
    pub fn type_mismatch<T: Into<String>>(message: T) -> Self {
        ZiError::TypeMismatch {
            message: message.into(),
        }
    }

    /// Helper to construct lookup errors.
    pub fn not_found<T: Into<String>>(name: T) -> Self {
        ZiError::NotFound { name: name.into() }
    }

    /// Helper to construct configuration errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        ZiError::Config {
            message: message.into(),
        }
    }

    pub fn is_invalid_directive(&self) -> bool {
        matches!(self, ZiError::InvalidDirective { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ZiError::TypeMismatch { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ZiError::NotFound { .. })
    }
}

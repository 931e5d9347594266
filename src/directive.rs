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

//! # Directive Module
//!
//! Tokenizes directive command lines such as `rename a b` or
//! `mask card right * 4` and validates them against the fixed grammar of a
//! transformation.
//!
//! ## Grammar Rules
//!
//! - The command line must be present
//! - Tokens are split with one of two policies: a single space, or
//!   one-or-more whitespace characters. Leading empty tokens are kept and
//!   trailing empty tokens are dropped
//! - The token count must equal the grammar's arity (keyword included)
//! - Token 0 must equal the keyword exactly (case-sensitive)
//! - Remaining tokens are positional and parsed through typed accessors
//!
//! There is no quoting and no escaping: a column name can never contain the
//! delimiter.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Result, ZiError};

/// Source of a raw directive command line.
pub trait ZiTransformationContext {
    /// The whole command line, or `None` when the source has none.
    fn command_line(&self) -> Option<&str>;
}

impl ZiTransformationContext for str {
    fn command_line(&self) -> Option<&str> {
        Some(self)
    }
}

impl ZiTransformationContext for String {
    fn command_line(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ZiTransformationContext + ?Sized> ZiTransformationContext for &T {
    fn command_line(&self) -> Option<&str> {
        (**self).command_line()
    }
}

impl<T: ZiTransformationContext> ZiTransformationContext for Option<T> {
    fn command_line(&self) -> Option<&str> {
        self.as_ref().and_then(|context| context.command_line())
    }
}

/// How a command line is cut into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiSplitPolicy {
    /// Every single space is a delimiter, so two spaces yield an empty token.
    SingleSpace,
    /// Any run of whitespace is one delimiter.
    Whitespace,
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

impl ZiSplitPolicy {
    pub fn split(self, command_line: &str) -> Vec<String> {
        let mut tokens: Vec<String> = match self {
            ZiSplitPolicy::SingleSpace => command_line.split(' ').map(str::to_string).collect(),
            ZiSplitPolicy::Whitespace => whitespace_pattern()
                .split(command_line)
                .map(str::to_string)
                .collect(),
        };
        while tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }
        tokens
    }
}

/// Returns the keyword of a command line, used for dispatch before the
/// transformation's own grammar validates the rest.
pub fn keyword_of(command_line: &str) -> Option<&str> {
    command_line.split_whitespace().next()
}

/// Fixed grammar of one transformation keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZiGrammar {
    pub keyword: &'static str,
    /// Token count, keyword included.
    pub arity: usize,
    pub split: ZiSplitPolicy,
    pub usage: &'static str,
}

impl ZiGrammar {
    /// Tokenizes the context's command line and checks arity and keyword.
    pub fn parse<C: ZiTransformationContext + ?Sized>(&self, context: &C) -> Result<ZiDirective> {
        let command_line = context
            .command_line()
            .ok_or_else(|| ZiError::invalid_directive("Directive command line is null."))?;
        let directive = ZiDirective::tokenize(command_line, self.split);
        if directive.len() != self.arity {
            return Err(ZiError::invalid_directive(format!(
                "Directive should have {} tokens. Usage: {}.",
                self.arity, self.usage
            )));
        }
        if directive.keyword() != Some(self.keyword) {
            return Err(ZiError::invalid_directive(format!(
                "Directive is not a {} transformation. Usage: {}.",
                self.keyword, self.usage
            )));
        }
        Ok(directive)
    }
}

/// Immutable token sequence of one directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiDirective {
    tokens: Vec<String>,
}

impl ZiDirective {
    pub fn tokenize(command_line: &str, split: ZiSplitPolicy) -> Self {
        ZiDirective {
            tokens: split.split(command_line),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn keyword(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Raw token at `idx`.
    pub fn arg(&self, idx: usize) -> Result<&str> {
        self.tokens
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| ZiError::invalid_directive(format!("missing argument at position {idx}")))
    }

    /// A character position: a non-negative integer.
    pub fn position_arg(&self, idx: usize, name: &str) -> Result<usize> {
        let token = self.arg(idx)?;
        token.parse::<usize>().map_err(|_| {
            ZiError::invalid_directive(format!("{name} '{token}' is not a non-negative integer."))
        })
    }

    /// A count: parsed as a signed integer, then rejected when negative.
    pub fn count_arg(&self, idx: usize, name: &str) -> Result<usize> {
        let token = self.arg(idx)?;
        let count = token.parse::<i64>().map_err(|_| {
            ZiError::invalid_directive(format!("{name} '{token}' is not an integer."))
        })?;
        usize::try_from(count).map_err(|_| {
            ZiError::invalid_directive(format!("{name} '{token}' must not be negative."))
        })
    }

    /// A token of exactly one character.
    pub fn char_arg(&self, idx: usize, name: &str) -> Result<char> {
        let token = self.arg(idx)?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ZiError::invalid_directive(format!(
                "{name} '{token}' must be a single character."
            ))),
        }
    }
}

impl fmt::Display for ZiDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

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

//! Recording doubles of the schema and row contracts. Every call is counted
//! and its arguments captured so tests can assert exactly which capabilities
//! a transformation used.

#![allow(dead_code)]

use std::cell::RefCell;

use serde_json::Value;
use zix_delta::{Result, ZiError, ZiField, ZiRowSchema, ZiRowValue};

/// Schema double answering `get_field` from a queue of responses. The last
/// response repeats once the queue is exhausted.
#[derive(Debug, Default)]
pub struct RecordingSchema {
    responses: Vec<ZiField>,
    pub get_calls: RefCell<Vec<String>>,
    pub set_calls: Vec<ZiField>,
    pub rename_calls: Vec<(String, String)>,
}

impl RecordingSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(responses: Vec<ZiField>) -> Self {
        RecordingSchema {
            responses,
            ..Self::default()
        }
    }

    pub fn get_count(&self) -> usize {
        self.get_calls.borrow().len()
    }
}

impl ZiRowSchema for RecordingSchema {
    fn get_field(&self, name: &str) -> Result<&ZiField> {
        let call = self.get_count();
        self.get_calls.borrow_mut().push(name.to_string());
        let idx = call.min(self.responses.len().saturating_sub(1));
        self.responses
            .get(idx)
            .filter(|field| field.name == name)
            .ok_or_else(|| ZiError::not_found(name))
    }

    fn set_field(&mut self, field: ZiField) {
        self.set_calls.push(field);
    }

    fn rename_field(&mut self, from: &str, to: &str) -> Result<()> {
        self.rename_calls.push((from.to_string(), to.to_string()));
        Ok(())
    }
}

/// Row double answering `get_column_value` for one column.
#[derive(Debug, Default)]
pub struct RecordingRow {
    column: String,
    value: Value,
    pub get_calls: RefCell<Vec<String>>,
    pub set_calls: Vec<(String, Value)>,
    pub rename_calls: Vec<(String, String)>,
}

impl RecordingRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(column: &str, value: Value) -> Self {
        RecordingRow {
            column: column.to_string(),
            value,
            ..Self::default()
        }
    }

    pub fn get_count(&self) -> usize {
        self.get_calls.borrow().len()
    }

    pub fn last_set(&self) -> Option<&(String, Value)> {
        self.set_calls.last()
    }
}

impl ZiRowValue for RecordingRow {
    fn get_column_value(&self, name: &str) -> Result<&Value> {
        self.get_calls.borrow_mut().push(name.to_string());
        if name == self.column {
            Ok(&self.value)
        } else {
            Err(ZiError::not_found(name))
        }
    }

    fn set_column_value(&mut self, name: &str, value: Value) {
        self.set_calls.push((name.to_string(), value));
    }

    fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        self.rename_calls.push((from.to_string(), to.to_string()));
        Ok(())
    }
}

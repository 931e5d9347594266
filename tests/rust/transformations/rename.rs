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

//! Rename transformation tests.

#[path = "../common/mod.rs"]
mod common;

use common::{RecordingRow, RecordingSchema};
use serde_json::json;
use zix_delta::{ZiFieldType, ZiRename, ZiRow, ZiRowValue, ZiSchema, ZiTransformation};

#[test]
fn test_initialize_with_null_command_line() {
    let missing: Option<&str> = None;
    let err = ZiRename::initialize(&missing).unwrap_err();
    assert!(err.is_invalid_directive());
    assert!(err.to_string().contains("null"));
}

#[test]
fn test_initialize_with_incorrect_argument_length() {
    assert!(ZiRename::initialize("rename column").unwrap_err().is_invalid_directive());
    assert!(ZiRename::initialize("rename a b c").unwrap_err().is_invalid_directive());
}

#[test]
fn test_initialize_with_incorrect_directive_name() {
    let err = ZiRename::initialize("renames column 0").unwrap_err();
    assert!(err.to_string().contains("is not a rename transformation"));
    // arity is checked before the keyword
    let err = ZiRename::initialize("renames column 0 5").unwrap_err();
    assert!(err.to_string().contains("should have 3 tokens"));
}

#[test]
fn test_initialize_with_whitespace_runs() {
    let op = ZiRename::initialize("rename\tfrom \t  to").unwrap();
    assert_eq!(op.from_column(), "from");
    assert_eq!(op.to_column(), "to");
}

#[test]
fn test_transform_schema() {
    let op = ZiRename::initialize("rename from to").unwrap();
    let mut schema = RecordingSchema::new();
    op.transform_schema(&mut schema).unwrap();
    assert!(schema.set_calls.is_empty());
    assert_eq!(schema.get_count(), 0);
    assert_eq!(schema.rename_calls, vec![("from".to_string(), "to".to_string())]);
}

#[test]
fn test_transform_value() {
    let op = ZiRename::initialize("rename from to").unwrap();
    let mut value = RecordingRow::new();
    op.transform_value(&mut value).unwrap();
    assert_eq!(value.get_count(), 0);
    assert!(value.set_calls.is_empty());
    assert_eq!(value.rename_calls, vec![("from".to_string(), "to".to_string())]);
}

#[test]
fn test_rename_on_concrete_row_keeps_value() {
    let op = ZiRename::initialize("rename from to").unwrap();
    let mut schema = ZiSchema::default()
        .with_field("from", ZiFieldType::Long)
        .with_field("other", ZiFieldType::String);
    let mut row = ZiRow::new().with_column("from", json!(5)).with_column("other", json!("x"));
    op.transform_schema(&mut schema).unwrap();
    op.transform_value(&mut row).unwrap();
    assert_eq!(schema.fields()[0].name, "to");
    assert_eq!(schema.fields()[0].field_type, ZiFieldType::Long);
    assert_eq!(row.get_column_value("to").unwrap(), &json!(5));
    assert!(row.get_column_value("from").unwrap_err().is_not_found());
}

#[test]
fn test_rename_missing_field_fails() {
    let op = ZiRename::initialize("rename from to").unwrap();
    let mut schema = ZiSchema::default().with_field("other", ZiFieldType::Int);
    assert!(op.transform_schema(&mut schema).unwrap_err().is_not_found());
}

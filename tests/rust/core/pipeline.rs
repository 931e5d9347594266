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

//! Registry dispatch, pipeline execution and configuration loading tests.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use zix_delta::{
    ZiError, ZiFieldType, ZiMaskGrammar, ZiPipelineConfig, ZiRow, ZiSchema,
    ZiTransformation, ZiTransformationKind, ZiTransformationPipeline, ZiTransformationRegistry,
};

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn customer_schema() -> ZiSchema {
    ZiSchema::default()
        .with_field("cust_id", ZiFieldType::Long)
        .with_field("card", ZiFieldType::nullable(ZiFieldType::String))
}

#[test]
fn test_registry_dispatches_each_keyword() {
    let registry = ZiTransformationRegistry::with_defaults();
    let cases = [
        ("rename a b", ZiTransformationKind::Rename),
        ("to-string a", ZiTransformationKind::ToString),
        ("mask a left * 2", ZiTransformationKind::MaskSubstitution),
    ];
    for (directive, kind) in cases {
        let op = registry.compile(directive).unwrap();
        assert_eq!(op.kind(), kind);
        assert_eq!(op.to_string(), directive);
    }
}

#[test]
fn test_registry_keeps_wrong_grammar_errors() {
    let registry = ZiTransformationRegistry::with_defaults();
    let err = registry.compile("mask a 0 5").unwrap_err();
    assert!(err.to_string().contains("should have 5 tokens"));
}

#[test]
fn test_pipeline_masks_after_rename_and_stringify() {
    let registry = ZiTransformationRegistry::with_defaults();
    let pipeline = ZiTransformationPipeline::compile(
        [
            "rename cust_id customer_id",
            "to-string customer_id",
            "mask card right * 4",
        ],
        &registry,
    )
    .unwrap();
    assert_eq!(pipeline.len(), 3);
    assert_eq!(pipeline.name(), "pipeline");

    let mut schema = customer_schema();
    let mut rows = vec![
        ZiRow::from_json(json!({"cust_id": 1001, "card": "4111111111111111"})).unwrap(),
        ZiRow::from_json(json!({"cust_id": 1002, "card": null})).unwrap(),
        ZiRow::from_json(json!({"cust_id": 1003, "card": "123"})).unwrap(),
    ];
    pipeline.run(&mut schema, &mut rows).unwrap();

    assert_eq!(schema.fields()[0].name, "customer_id");
    assert_eq!(schema.fields()[0].field_type, ZiFieldType::String);
    let rows: Vec<_> = rows.into_iter().map(ZiRow::into_json).collect();
    assert_eq!(
        rows,
        vec![
            json!({"customer_id": "1001", "card": "************1111"}),
            json!({"customer_id": "1002", "card": null}),
            json!({"customer_id": "1003", "card": "123"}),
        ]
    );
}

#[test]
fn test_pipeline_stops_at_type_mismatch() {
    let registry = ZiTransformationRegistry::with_defaults();
    let pipeline =
        ZiTransformationPipeline::compile(["mask cust_id right * 2"], &registry).unwrap();
    let mut schema = customer_schema();
    let err = pipeline.run(&mut schema, &mut []).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_pipeline_directives_round_trip() {
    let registry = ZiTransformationRegistry::with_mask_grammar(ZiMaskGrammar::Range);
    let script = "# pii\nrename  a b\nmask b 2 6\n";
    let pipeline = ZiTransformationPipeline::compile_script(script, &registry).unwrap();
    assert_eq!(pipeline.directives(), vec!["rename a b", "mask b 2 6"]);
    let again = ZiTransformationPipeline::compile(pipeline.directives(), &registry).unwrap();
    assert_eq!(pipeline, again);
}

#[test]
fn test_config_from_json_file() {
    let file = temp_file(
        ".json",
        r#"{"mask_grammar": "range", "directives": ["mask ssn 0 5"]}"#,
    );
    let config = ZiPipelineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.mask_grammar, ZiMaskGrammar::Range);

    let pipeline = config.build_pipeline().unwrap();
    let mut schema = ZiSchema::default().with_field("ssn", ZiFieldType::String);
    let mut rows = vec![ZiRow::new().with_column("ssn", json!("123-45-6789"))];
    pipeline.run(&mut schema, &mut rows).unwrap();
    assert_eq!(rows[0].clone().into_json(), json!({"ssn": "*****5-6789"}));
}

#[cfg(feature = "yaml")]
#[test]
fn test_config_from_yaml_file() {
    let file = temp_file(
        ".yaml",
        "directives:\n  - rename a b\n  - mask b left x 1\n",
    );
    let config = ZiPipelineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.mask_grammar, ZiMaskGrammar::Substitution);
    assert_eq!(config.build_pipeline().unwrap().len(), 2);
}

#[test]
fn test_config_from_script_file() {
    let file = temp_file(".zid", "# comment\n\nto-string total\n");
    let config = ZiPipelineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.directives, vec!["to-string total"]);
}

#[test]
fn test_config_errors() {
    let file = temp_file(".json", "{not json");
    let err = ZiPipelineConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ZiError::Config { .. }));

    let err = ZiPipelineConfig::from_file(std::path::Path::new("/nonexistent/zi.json"))
        .unwrap_err();
    assert!(matches!(err, ZiError::Io(_)));

    let config = ZiPipelineConfig::new(ZiMaskGrammar::Substitution, vec!["mask a 0 5".into()]);
    assert!(config.build_pipeline().unwrap_err().is_invalid_directive());
}

// Common test utilities for coffer-store integration tests
#![allow(dead_code)]

use coffer_store::{RecordData, RecordKey, ResourceStore};
use serde_json::Value;

/// Fresh store with test logging installed
pub fn store() -> ResourceStore {
    coffer_testing::logging();
    ResourceStore::new()
}

/// Convert a `json!` object literal into record data
pub fn object(value: Value) -> RecordData {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Render keys the way `GET /` returns them
pub fn key_strings(keys: Vec<RecordKey>) -> Vec<String> {
    keys.into_iter()
        .map(String::from)
        .collect()
}

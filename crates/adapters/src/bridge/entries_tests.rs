// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use courier_core::{ItemStack, Request};
use serde_json::json;

#[test]
fn absent_list_is_empty() {
    let requests: Vec<Request> = decode_entries("test", None);
    assert!(requests.is_empty());
}

#[test]
fn malformed_entries_are_dropped() {
    let raw = vec![
        json!({ "display_name": "Cobblestone", "needed": 16 }),
        json!({ "display_name": "Glass", "needed": 2.0 }),
        json!({ "display_name": "Torch" }),
        json!(null),
        json!({ "display_name": "Oak Planks", "needed": 4 }),
    ];

    let requests: Vec<Request> = decode_entries("test", Some(raw));
    let names: Vec<_> = requests.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Cobblestone", "Oak Planks"]);
}

#[test]
fn null_list_field_reads_as_empty() {
    #[derive(Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "lenient_list")]
        items: Vec<ItemStack>,
    }

    let doc: Doc = serde_json::from_value(json!({ "items": null })).unwrap();
    assert!(doc.items.is_empty());
    let doc: Doc = serde_json::from_value(json!({})).unwrap();
    assert!(doc.items.is_empty());
}

#[test]
fn non_list_field_is_still_an_error() {
    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "lenient_list")]
        #[allow(dead_code)]
        items: Vec<ItemStack>,
    }

    assert!(serde_json::from_value::<Doc>(json!({ "items": 5 })).is_err());
}

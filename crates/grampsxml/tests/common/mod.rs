#![allow(dead_code)]

use std::path::PathBuf;

use grampsxml::model::Document;

pub const NAMESPACE: &str = "http://gramps-project.org/xml/1.7.1/";

/// Wraps section markup in a declaration and a namespaced `<database>` root.
pub fn database(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<database xmlns=\"{NAMESPACE}\">\n{body}\n</database>"
    )
}

/// An empty document bound to the modeled namespace.
pub fn document() -> Document {
    Document {
        namespace: Some(NAMESPACE.to_string()),
        ..Default::default()
    }
}

pub fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Parses, writes and parses again, asserting both documents are equal.
pub fn assert_round_trip(document: &Document) {
    let written = grampsxml::serialize(document).expect("serialize");
    let reparsed = grampsxml::parse(&written).unwrap_or_else(|e| {
        panic!(
            "reparse failed: {e}\n{}",
            String::from_utf8_lossy(&written)
        )
    });
    assert_eq!(&reparsed, document);
}

pub fn tests_data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

//! Utility functions and constants for XML serialization/deserialization.
//!
//! This module provides helpers for namespace handling and for the textual
//! encoding of Gramps flag attributes.

/// Namespace URI of the Gramps XML version modeled by this crate.
pub const GRAMPS_NAMESPACE: &str = "http://gramps-project.org/xml/1.7.1/";

/// Common prefix of every versioned Gramps XML namespace.
pub const GRAMPS_NAMESPACE_PREFIX: &str = "http://gramps-project.org/xml/";

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "database";

/// Extracts the schema version from a Gramps namespace URI.
///
/// `http://gramps-project.org/xml/1.7.1/` yields `Some("1.7.1")`; URIs outside
/// the Gramps namespace family yield `None`.
pub fn namespace_version(uri: &str) -> Option<&str> {
    let version = uri
        .strip_prefix(GRAMPS_NAMESPACE_PREFIX)?
        .trim_end_matches('/');
    if !version.is_empty() && version.split('.').all(|part| part.parse::<u32>().is_ok()) {
        Some(version)
    } else {
        None
    }
}

/// Builds the DOCTYPE body Gramps writes for the given schema version.
pub fn doctype_for(version: &str) -> String {
    format!(
        "database PUBLIC \"-//Gramps//DTD Gramps XML {version}//EN\"\n\"{GRAMPS_NAMESPACE_PREFIX}{version}/grampsxml.dtd\""
    )
}

/// Checks if an attribute key is a namespace declaration (`xmlns` or `xmlns:p`).
pub fn is_namespace_declaration(key: &[u8]) -> bool {
    key == b"xmlns" || key.starts_with(b"xmlns:")
}

/// Returns the namespace prefix of a qualified name, if any.
pub fn name_prefix(qname: &[u8]) -> Option<&[u8]> {
    qname
        .iter()
        .position(|b| *b == b':')
        .map(|idx| &qname[..idx])
}

/// Parses a Gramps flag attribute.
///
/// Gramps writes `"1"` and `"0"`; the spelled-out forms are accepted as well.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Converts a flag to the representation Gramps writes.
pub fn format_flag(flag: bool) -> &'static str {
    if flag { "1" } else { "0" }
}

/// Checks if raw text consists only of XML whitespace.
pub fn is_whitespace(raw: &[u8]) -> bool {
    raw.iter()
        .all(|b| matches!(b, b' ' | b'\n' | b'\r' | b'\t'))
}

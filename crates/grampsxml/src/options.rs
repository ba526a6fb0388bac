//! Options controlling how documents are read and written.
//!
//! # Example
//!
//! ```rust
//! use grampsxml::{NamespacePolicy, ParseOptions, WriteOptions};
//!
//! let strict = ParseOptions {
//!     namespace_policy: NamespacePolicy::Strict,
//! };
//!
//! let compact = WriteOptions {
//!     indent: None,
//!     ..Default::default()
//! };
//! # let _ = (strict, compact);
//! ```

use crate::xml::utils;

/// How the reader treats a root namespace other than the modeled one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamespacePolicy {
    /// Log a warning and parse the document best-effort.
    #[default]
    Lenient,
    /// Fail with [`GrampsError::UnsupportedNamespace`](crate::GrampsError::UnsupportedNamespace).
    Strict,
}

/// Outcome of checking a declared namespace against the modeled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceStatus {
    /// The namespace modeled by this crate.
    Supported,
    /// A Gramps namespace of another schema version.
    OtherVersion,
    /// A non-Gramps namespace.
    Foreign,
    /// No default namespace was declared.
    Missing,
}

impl NamespaceStatus {
    /// Classifies a declared namespace URI.
    pub fn classify(namespace: Option<&str>) -> Self {
        match namespace {
            Some(utils::GRAMPS_NAMESPACE) => NamespaceStatus::Supported,
            Some(uri) if utils::namespace_version(uri).is_some() => NamespaceStatus::OtherVersion,
            Some(_) => NamespaceStatus::Foreign,
            None => NamespaceStatus::Missing,
        }
    }
}

/// Options for reading a Gramps XML document.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Treatment of unknown, other-version or absent root namespaces.
    pub namespace_policy: NamespacePolicy,
}

/// Options for writing a Gramps XML document.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Spaces per nesting level, or `None` for compact output.
    pub indent: Option<usize>,
    /// Emit the `<?xml ...?>` declaration.
    pub declaration: bool,
    /// Emit the Gramps DOCTYPE when the document namespace is a Gramps one.
    pub doctype: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
            doctype: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_status_classify() {
        assert_eq!(
            NamespaceStatus::classify(Some("http://gramps-project.org/xml/1.7.1/")),
            NamespaceStatus::Supported
        );
        assert_eq!(
            NamespaceStatus::classify(Some("http://gramps-project.org/xml/1.6.0/")),
            NamespaceStatus::OtherVersion
        );
        assert_eq!(
            NamespaceStatus::classify(Some("urn:example")),
            NamespaceStatus::Foreign
        );
        assert_eq!(NamespaceStatus::classify(None), NamespaceStatus::Missing);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ParseOptions::default().namespace_policy, NamespacePolicy::Lenient);
        let write = WriteOptions::default();
        assert_eq!(write.indent, Some(2));
        assert!(write.declaration);
        assert!(write.doctype);
    }
}

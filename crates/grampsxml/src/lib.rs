//! # Gramps XML
//!
//! A strongly-typed model of the Gramps genealogical XML interchange format
//! (schema 1.7.1) with a streaming reader and writer built on quick-xml.
//!
//! ## Features
//!
//! - **Typed model**: one struct per DTD element, grouped by record kind under
//!   [`model`]. Optional attributes are `Option<T>` so that an absent attribute
//!   stays distinguishable from one present with a false or empty value.
//! - **Dates as a union**: the four mutually exclusive date shapes are the
//!   variants of [`model::DateValue`].
//! - **Handles, not pointers**: cross-references are kept as the `hlink`
//!   strings found in the document. Resolving them is left to the consumer.
//! - **Round-trip**: writing a parsed document and parsing it again yields an
//!   equal document.
//!
//! ## Examples
//!
//! ```rust
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <database xmlns="http://gramps-project.org/xml/1.7.1/">
//!   <people>
//!     <person handle="_076KQC7HG6P8BL5E35" change="1185438865" id="I0667">
//!       <gender>M</gender>
//!       <name type="Birth Name">
//!         <first>Edward</first>
//!         <surname>Потылицин</surname>
//!       </name>
//!     </person>
//!   </people>
//! </database>"#;
//!
//! let document = grampsxml::parse(xml.as_bytes())?;
//! let person = &document.people.as_ref().expect("people").persons[0];
//! assert_eq!(person.names[0].first.as_deref(), Some("Edward"));
//! assert_eq!(person.names[0].surnames[0].value, "Потылицин");
//!
//! let bytes = grampsxml::serialize(&document)?;
//! assert_eq!(grampsxml::parse(&bytes)?, document);
//! # Ok::<(), grampsxml::GrampsError>(())
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod model;
pub mod options;
pub mod xml;

// Re-export common types and functions
pub use error::{GrampsError, Result};
pub use model::Document;
pub use options::{NamespacePolicy, ParseOptions, WriteOptions};

pub use xml::{
    from_xml_reader, from_xml_reader_with, from_xml_slice, from_xml_slice_with, from_xml_str,
    to_xml_string, to_xml_vec, to_xml_writer, to_xml_writer_with,
};

/// Parses a Gramps XML document with the default [`ParseOptions`].
///
/// Either the whole document is returned or the first error encountered;
/// there is no partial result.
pub fn parse(bytes: &[u8]) -> Result<Document> {
    from_xml_slice(bytes)
}

/// Serializes a document to Gramps XML with the default [`WriteOptions`].
pub fn serialize(document: &Document) -> Result<Vec<u8>> {
    to_xml_vec(document)
}

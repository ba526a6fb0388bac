//! XML serialization and deserialization for Gramps documents.
//!
//! This module streams between quick-xml events and the typed model without
//! building any intermediate tree.
//!
//! ## Architecture
//!
//! - **Deserialization**: [`de::XmlReader`] pulls events from a quick-xml
//!   [`Reader`](quick_xml::Reader). Each model type implements [`XmlElement`]
//!   and consumes exactly its own element, asking the reader for the next child
//!   until the matching end tag arrives.
//!
//! - **Serialization**: [`ser::XmlWriter`] wraps a quick-xml
//!   [`Writer`](quick_xml::Writer). Each model type writes its start tag with
//!   attributes, then its children in DTD order, then the end tag. Elements
//!   without children are written as empty tags.
//!
//! ## Gramps XML ↔ Model Mapping
//!
//! | XML | Model |
//! |-----|-------|
//! | `<person handle="_a1" priv="1">` | `handle: String`, `private: Option<bool>` |
//! | attribute absent | `None` for optional attributes |
//! | `<first>Edward</first>` | `first: Option<String>` |
//! | `<surname prim="0">Smith</surname>` | attributes plus `value: String` |
//! | `<eventref/><eventref/>` | `eventrefs: Vec<EventRef>`, source order kept |
//! | one of `<daterange>`, `<datespan>`, `<dateval>`, `<datestr>` | `date: Option<DateValue>` |
//!
//! ## Namespace Handling
//!
//! The root `database` element carries the versioned Gramps namespace as its
//! default namespace. The declared URI is stored on the document and written
//! back verbatim; children inherit it and are matched by local name.
//!
//! ## Examples
//!
//! ```rust
//! use grampsxml::xml::{from_xml_str, to_xml_string};
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <database xmlns="http://gramps-project.org/xml/1.7.1/">
//!   <header><created date="2024-03-04" version="5.1.5"/></header>
//! </database>"#;
//!
//! let document = from_xml_str(xml)?;
//! assert_eq!(document.header.created.version, "5.1.5");
//!
//! let written = to_xml_string(&document)?;
//! assert_eq!(from_xml_str(&written)?, document);
//! # Ok::<(), grampsxml::GrampsError>(())
//! ```

pub mod de;
pub mod ser;
pub mod utils;

use std::borrow::Cow;
use std::io::{BufRead, Write};

use quick_xml::events::BytesStart;

use crate::error::Result;
use de::XmlReader;
use ser::XmlWriter;

// Re-export serialization functions
pub use ser::{to_xml_string, to_xml_vec, to_xml_writer, to_xml_writer_with};

// Re-export deserialization functions
pub use de::{
    from_xml_reader, from_xml_reader_with, from_xml_slice, from_xml_slice_with, from_xml_str,
};

/// A model type mapped onto one element of the Gramps schema.
pub trait XmlElement: Sized {
    /// Reads the element whose start tag `start` has just been consumed.
    ///
    /// `empty` is true for a self-closing tag, in which case no child events
    /// follow.
    fn read_xml<R: BufRead>(
        reader: &mut XmlReader<R>,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<Self>;

    /// Writes the element under the element name `tag`.
    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>, tag: &str) -> Result<()>;
}

/// A model type mapped onto a choice between several element names.
///
/// The element name selects the variant, so the type writes its own tag.
pub trait XmlChoice: Sized {
    /// Checks if an element with this local name is one of the alternatives.
    fn accepts(tag: &[u8]) -> bool;

    /// Reads the alternative whose start tag `start` has just been consumed.
    fn read_choice<R: BufRead>(
        reader: &mut XmlReader<R>,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<Self>;

    /// Writes the alternative under its own element name.
    fn write_choice<W: Write>(&self, writer: &mut XmlWriter<W>) -> Result<()>;
}

pub(crate) fn choice_accepts<T: XmlChoice>(_slot: &Option<T>, tag: &[u8]) -> bool {
    T::accepts(tag)
}

/// A scalar stored in an XML attribute.
pub trait AttrValue: Sized {
    /// Parses the unescaped attribute value.
    fn parse_attr(raw: &str) -> std::result::Result<Self, String>;

    /// Formats the value for writing; escaping is left to the writer.
    fn format_attr(&self) -> Cow<'_, str>;
}

impl AttrValue for String {
    fn parse_attr(raw: &str) -> std::result::Result<Self, String> {
        Ok(raw.to_string())
    }

    fn format_attr(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AttrValue for bool {
    fn parse_attr(raw: &str) -> std::result::Result<Self, String> {
        utils::parse_flag(raw).ok_or_else(|| "expected 0, 1, true or false".to_string())
    }

    fn format_attr(&self) -> Cow<'_, str> {
        Cow::Borrowed(utils::format_flag(*self))
    }
}

macro_rules! numeric_attr_value {
    ($($ty:ty),*) => {
        $(
            impl AttrValue for $ty {
                fn parse_attr(raw: &str) -> std::result::Result<Self, String> {
                    raw.trim().parse().map_err(|e| format!("{e}"))
                }

                fn format_attr(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

numeric_attr_value!(i32, u32);

/// Text-only elements such as `<first>` or `<text>`.
impl XmlElement for String {
    fn read_xml<R: BufRead>(
        reader: &mut XmlReader<R>,
        _start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<Self> {
        reader.read_text(empty)
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>, tag: &str) -> Result<()> {
        writer.write_text_element(BytesStart::new(tag), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_attr_value() {
        assert_eq!(bool::parse_attr("1"), Ok(true));
        assert_eq!(bool::parse_attr("0"), Ok(false));
        assert!(bool::parse_attr("maybe").is_err());
        assert_eq!(true.format_attr(), "1");
        assert_eq!(false.format_attr(), "0");
    }

    #[test]
    fn test_numeric_attr_value() {
        assert_eq!(u32::parse_attr("101"), Ok(101));
        assert_eq!(i32::parse_attr(" -5 "), Ok(-5));
        assert!(u32::parse_attr("-1").is_err());
        assert!(i32::parse_attr("ten").is_err());
        assert_eq!(42u32.format_attr(), "42");
    }

    #[test]
    fn test_string_attr_value_borrows() {
        let value = String::from("Birth Name");
        assert!(matches!(value.format_attr(), Cow::Borrowed("Birth Name")));
        assert_eq!(String::parse_attr(""), Ok(String::new()));
    }
}

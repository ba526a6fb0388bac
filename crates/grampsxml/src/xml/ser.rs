//! XML serialization onto a quick-xml [`Writer`].
//!
//! Model types write themselves through [`XmlWriter`]: start tag with
//! attributes, children in DTD order, end tag. Elements with neither children
//! nor text are written as empty tags.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::error::{GrampsError, Result};
use crate::model::Document;
use crate::options::WriteOptions;
use crate::xml::XmlElement;
use crate::xml::utils::{self, ROOT_ELEMENT};

/// Serialize a Gramps document to an XML string.
///
/// # Examples
///
/// ```rust
/// use grampsxml::model::Document;
/// use grampsxml::xml::to_xml_string;
///
/// let document = Document::default();
/// let xml = to_xml_string(&document)?;
/// assert!(xml.contains("<database"));
/// # Ok::<(), grampsxml::GrampsError>(())
/// ```
pub fn to_xml_string(document: &Document) -> Result<String> {
    let buffer = to_xml_vec(document)?;
    String::from_utf8(buffer).map_err(|e| GrampsError::Encoding(e.to_string()))
}

/// Serialize a Gramps document to an XML byte vector.
pub fn to_xml_vec(document: &Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer(document, &mut buffer)?;
    Ok(buffer)
}

/// Serialize a Gramps document to an XML writer.
pub fn to_xml_writer<W: Write>(document: &Document, writer: W) -> Result<()> {
    to_xml_writer_with(document, writer, &WriteOptions::default())
}

/// Serialize a Gramps document to an XML writer with explicit options.
pub fn to_xml_writer_with<W: Write>(
    document: &Document,
    writer: W,
    options: &WriteOptions,
) -> Result<()> {
    debug!(records = document.record_count(), "writing Gramps document");

    let mut xml = XmlWriter::new(writer, options);
    if options.declaration {
        xml.write_declaration()?;
    }
    if options.doctype
        && let Some(version) = document.namespace.as_deref().and_then(utils::namespace_version)
    {
        xml.write_doctype(version)?;
    }
    document.write_xml(&mut xml, ROOT_ELEMENT)?;
    xml.finish()?;
    Ok(())
}

/// Streaming writer used by the model types.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(inner: W, options: &WriteOptions) -> Self {
        let writer = match options.indent {
            Some(width) if width > 0 => Writer::new_with_indent(inner, b' ', width),
            _ => Writer::new(inner),
        };
        Self { writer }
    }

    fn write_declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    fn write_doctype(&mut self, version: &str) -> Result<()> {
        let doctype = utils::doctype_for(version);
        self.writer
            .write_event(Event::DocType(BytesText::from_escaped(doctype)))?;
        Ok(())
    }

    pub fn write_empty(&mut self, start: BytesStart<'_>) -> Result<()> {
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    pub fn write_start(&mut self, start: BytesStart<'_>) -> Result<()> {
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    pub fn write_end(&mut self, tag: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Writes an element whose content is `text`.
    ///
    /// Empty text is written as an empty tag, which reads back as empty text.
    pub fn write_text_element(&mut self, start: BytesStart<'_>, text: &str) -> Result<()> {
        if text.is_empty() {
            return self.write_empty(start);
        }
        let end = BytesEnd::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
        self.writer.write_event(Event::Start(start))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(end))?;
        Ok(())
    }

    fn finish(mut self) -> Result<W> {
        let inner = self.writer.get_mut();
        inner.write_all(b"\n")?;
        inner.flush()?;
        Ok(self.writer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> WriteOptions {
        WriteOptions {
            indent: None,
            declaration: false,
            doctype: false,
        }
    }

    fn written(write: impl FnOnce(&mut XmlWriter<&mut Vec<u8>>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        let mut writer = XmlWriter::new(&mut buffer, &compact());
        write(&mut writer).unwrap();
        drop(writer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_text_element_escapes_markup() {
        let xml = written(|w| w.write_text_element(BytesStart::new("text"), "a < b & c"));
        assert_eq!(xml, "<text>a &lt; b &amp; c</text>");
    }

    #[test]
    fn test_write_text_element_empty_is_empty_tag() {
        let xml = written(|w| w.write_text_element(BytesStart::new("first"), ""));
        assert_eq!(xml, "<first/>");
    }

    #[test]
    fn test_write_start_end_with_attributes() {
        let xml = written(|w| {
            let mut start = BytesStart::new("childref");
            start.push_attribute(("hlink", "_c1"));
            start.push_attribute(("priv", "1"));
            w.write_start(start)?;
            w.write_empty(BytesStart::new("noteref"))?;
            w.write_end("childref")
        });
        assert_eq!(xml, r#"<childref hlink="_c1" priv="1"><noteref/></childref>"#);
    }

    #[test]
    fn test_prolog_is_written_for_gramps_namespace() {
        let document = Document {
            namespace: Some(utils::GRAMPS_NAMESPACE.to_string()),
            ..Default::default()
        };
        let xml = to_xml_string(&document).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<!DOCTYPE database PUBLIC \"-//Gramps//DTD Gramps XML 1.7.1//EN\""));
        assert!(xml.contains(r#"<database xmlns="http://gramps-project.org/xml/1.7.1/">"#));
    }

    #[test]
    fn test_doctype_skipped_for_foreign_namespace() {
        let document = Document {
            namespace: Some("urn:example".to_string()),
            ..Default::default()
        };
        let xml = to_xml_string(&document).unwrap();
        assert!(!xml.contains("<!DOCTYPE"));
        assert!(xml.contains(r#"xmlns="urn:example""#));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_is_io_error() {
        let err = to_xml_writer(&Document::new(), FailingWriter).unwrap_err();
        match err {
            GrampsError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(GrampsError::Io(std::io::ErrorKind::Other.into()).position(), None);
    }

    #[test]
    fn test_options_disable_prolog() {
        let document = Document::default();
        let mut buffer = Vec::new();
        to_xml_writer_with(&document, &mut buffer, &compact()).unwrap();
        let xml = String::from_utf8(buffer).unwrap();
        assert!(xml.starts_with("<database"));
    }
}

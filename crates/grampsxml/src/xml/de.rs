//! XML deserialization driven by quick-xml events.
//!
//! [`XmlReader`] wraps a quick-xml [`Reader`] and hands model types one child
//! element at a time. Whitespace between elements is skipped, while the text of
//! text-bearing elements is kept exactly as written.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace, warn};

use crate::error::{GrampsError, Result};
use crate::model::Document;
use crate::options::{NamespacePolicy, NamespaceStatus, ParseOptions};
use crate::xml::XmlElement;
use crate::xml::utils::{self, GRAMPS_NAMESPACE, ROOT_ELEMENT};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Deserialize a Gramps document from an XML string.
///
/// # Examples
///
/// ```rust
/// use grampsxml::xml::from_xml_str;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <database xmlns="http://gramps-project.org/xml/1.7.1/">
///   <people>
///     <person handle="_076KQC7HG6P8BL5E35" change="1185438865" id="I0667">
///       <gender>M</gender>
///     </person>
///   </people>
/// </database>"#;
///
/// let document = from_xml_str(xml)?;
/// let people = document.people.expect("people section");
/// assert_eq!(people.persons[0].id.as_deref(), Some("I0667"));
/// # Ok::<(), grampsxml::GrampsError>(())
/// ```
pub fn from_xml_str(xml: &str) -> Result<Document> {
    from_xml_slice(xml.as_bytes())
}

/// Deserialize a Gramps document from XML bytes.
pub fn from_xml_slice(xml: &[u8]) -> Result<Document> {
    from_xml_slice_with(xml, &ParseOptions::default())
}

/// Deserialize a Gramps document from XML bytes with explicit options.
pub fn from_xml_slice_with(xml: &[u8], options: &ParseOptions) -> Result<Document> {
    from_xml_reader_with(xml, options)
}

/// Deserialize a Gramps document from a buffered reader.
pub fn from_xml_reader<R: BufRead>(reader: R) -> Result<Document> {
    from_xml_reader_with(reader, &ParseOptions::default())
}

/// Deserialize a Gramps document from a buffered reader with explicit options.
pub fn from_xml_reader_with<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Document> {
    let mut reader = XmlReader::new(Reader::from_reader(reader));
    reader.read_document(options)
}

/// Pull-style reader handing out one element at a time.
pub struct XmlReader<R: BufRead> {
    reader: Reader<R>,
    /// Buffer for reading events
    buf: Vec<u8>,
}

impl<R: BufRead> XmlReader<R> {
    fn new(reader: Reader<R>) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Byte offset just past the last consumed event.
    pub fn position(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    fn malformed(&self, message: impl Into<String>) -> GrampsError {
        GrampsError::malformed(self.position(), message)
    }

    fn next_event(&mut self) -> Result<Event<'static>> {
        self.buf.clear();
        match self.reader.read_event_into(&mut self.buf) {
            Ok(event) => Ok(event.into_owned()),
            Err(quick_xml::Error::Io(err)) => Err(GrampsError::Io(std::io::Error::new(
                err.kind(),
                err.to_string(),
            ))),
            Err(err) => Err(GrampsError::malformed(
                self.reader.error_position() as u64,
                err.to_string(),
            )),
        }
    }

    fn read_document(&mut self, options: &ParseOptions) -> Result<Document> {
        let (root, empty) = self.find_root()?;

        let local = root.local_name();
        if local.as_ref() != ROOT_ELEMENT.as_bytes() {
            return Err(self.malformed(format!(
                "expected root element <{ROOT_ELEMENT}>, found <{}>",
                String::from_utf8_lossy(local.as_ref())
            )));
        }

        let namespace = self.root_namespace(&root)?;
        check_namespace(namespace.as_deref(), options.namespace_policy)?;
        debug!(namespace = namespace.as_deref().unwrap_or("<none>"), "reading Gramps document");

        let document = Document::read_xml(self, &root, empty)?;
        self.expect_end_of_input()?;

        debug!(records = document.record_count(), "Gramps document read");
        Ok(document)
    }

    fn find_root(&mut self) -> Result<(BytesStart<'static>, bool)> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return Ok((start, false)),
                Event::Empty(start) => return Ok((start, true)),
                Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
                Event::Text(text) => {
                    let raw: &[u8] = &text;
                    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
                    if !utils::is_whitespace(raw) {
                        return Err(self.malformed("text before the root element"));
                    }
                }
                Event::Eof => return Err(self.malformed("document has no root element")),
                _ => return Err(self.malformed("unexpected content before the root element")),
            }
        }
    }

    fn expect_end_of_input(&mut self) -> Result<()> {
        loop {
            match self.next_event()? {
                Event::Eof => return Ok(()),
                Event::Comment(_) | Event::PI(_) => {}
                Event::Text(text) if utils::is_whitespace(&text) => {}
                _ => return Err(self.malformed("content after the root element")),
            }
        }
    }

    /// Reads up to the next child element of the element being read.
    ///
    /// Returns `None` once the parent's end tag is consumed. The flag is true
    /// for a self-closing child.
    pub fn next_child(&mut self) -> Result<Option<(BytesStart<'static>, bool)>> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return Ok(Some((start, false))),
                Event::Empty(start) => return Ok(Some((start, true))),
                Event::End(_) => return Ok(None),
                Event::Comment(_) | Event::PI(_) => {}
                Event::Text(text) if utils::is_whitespace(&text) => {}
                Event::Text(_) | Event::CData(_) | Event::GeneralRef(_) => {
                    return Err(self.malformed("unexpected text content"));
                }
                Event::Eof => return Err(self.malformed("unexpected end of document")),
                Event::Decl(_) | Event::DocType(_) => {
                    return Err(self.malformed("unexpected declaration inside an element"));
                }
            }
        }
    }

    /// Reads the character data of a text-bearing element up to its end tag.
    ///
    /// Entity references, character references and CDATA sections are
    /// resolved; whitespace is preserved.
    pub fn read_text(&mut self, empty: bool) -> Result<String> {
        let mut value = String::new();
        if empty {
            return Ok(value);
        }

        loop {
            match self.next_event()? {
                Event::Text(text) => {
                    let raw = std::str::from_utf8(&text)
                        .map_err(|e| self.malformed(format!("invalid UTF-8 in text: {e}")))?;
                    let unescaped = unescape(raw)
                        .map_err(|e| self.malformed(format!("invalid escape in text: {e}")))?;
                    value.push_str(&unescaped);
                }
                Event::CData(data) => {
                    let raw = std::str::from_utf8(&data)
                        .map_err(|e| self.malformed(format!("invalid UTF-8 in CDATA: {e}")))?;
                    value.push_str(raw);
                }
                Event::GeneralRef(reference) => {
                    let name = std::str::from_utf8(&reference)
                        .map_err(|e| self.malformed(format!("invalid UTF-8 in reference: {e}")))?;
                    let entity = format!("&{name};");
                    let resolved = unescape(&entity)
                        .map_err(|e| self.malformed(format!("unresolvable reference {entity}: {e}")))?;
                    value.push_str(&resolved);
                }
                Event::End(_) => return Ok(value),
                Event::Comment(_) | Event::PI(_) => {}
                Event::Start(start) | Event::Empty(start) => {
                    return Err(self.malformed(format!(
                        "unexpected element <{}> in text content",
                        String::from_utf8_lossy(start.local_name().as_ref())
                    )));
                }
                Event::Eof => return Err(self.malformed("unexpected end of document")),
                Event::Decl(_) | Event::DocType(_) => {
                    return Err(self.malformed("unexpected declaration inside an element"));
                }
            }
        }
    }

    /// Collects the data attributes of an element by local name.
    ///
    /// Namespace declarations are skipped. Values are unescaped.
    pub fn attributes(&self, start: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.malformed(format!("invalid attribute: {e}")))?;
            if utils::is_namespace_declaration(attr.key.as_ref()) {
                continue;
            }

            let key = std::str::from_utf8(attr.key.local_name().into_inner())
                .map_err(|e| self.malformed(format!("invalid UTF-8 in attribute name: {e}")))?
                .to_string();
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|e| self.malformed(format!("invalid UTF-8 in attribute {key}: {e}")))?;
            let value = unescape(raw)
                .map_err(|e| self.malformed(format!("invalid escape in attribute {key}: {e}")))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(attributes)
    }

    pub fn ignore_attribute(&self, start: &BytesStart<'_>, key: &str) {
        trace!(
            element = %String::from_utf8_lossy(start.local_name().as_ref()),
            attribute = key,
            "ignoring unknown attribute"
        );
    }

    pub fn invalid_attribute(&self, key: &str, value: &str, reason: String) -> GrampsError {
        self.malformed(format!("invalid value {value:?} for attribute {key}: {reason}"))
    }

    pub fn unexpected_element(&self, tag: &[u8], parent: &BytesStart<'_>) -> GrampsError {
        self.malformed(format!(
            "unexpected element <{}> in <{}>",
            String::from_utf8_lossy(tag),
            String::from_utf8_lossy(parent.local_name().as_ref())
        ))
    }

    pub fn duplicate_element(&self, tag: &[u8], reason: &str) -> GrampsError {
        self.malformed(format!(
            "duplicate element <{}>: {reason}",
            String::from_utf8_lossy(tag)
        ))
    }

    /// Returns the namespace the root element is bound to.
    ///
    /// For an unprefixed root this is the default namespace (`xmlns`); for a
    /// prefixed root, the URI declared for that prefix.
    pub(crate) fn root_namespace(&self, root: &BytesStart<'_>) -> Result<Option<String>> {
        let qname = root.name();
        let prefix = utils::name_prefix(qname.as_ref());

        for attr in root.attributes() {
            let attr = attr.map_err(|e| self.malformed(format!("invalid attribute: {e}")))?;
            let key = attr.key.as_ref();
            let binds_root = match prefix {
                None => key == b"xmlns",
                Some(prefix) => key.strip_prefix(b"xmlns:") == Some(prefix),
            };
            if binds_root {
                let raw = std::str::from_utf8(&attr.value)
                    .map_err(|e| self.malformed(format!("invalid UTF-8 in namespace: {e}")))?;
                let uri = unescape(raw)
                    .map_err(|e| self.malformed(format!("invalid escape in namespace: {e}")))?;
                return Ok(Some(uri.into_owned()));
            }
        }
        Ok(None)
    }
}

fn check_namespace(namespace: Option<&str>, policy: NamespacePolicy) -> Result<()> {
    let status = NamespaceStatus::classify(namespace);
    if status == NamespaceStatus::Supported {
        return Ok(());
    }

    match policy {
        NamespacePolicy::Strict => Err(GrampsError::UnsupportedNamespace {
            found: namespace.map(str::to_string),
            expected: GRAMPS_NAMESPACE,
        }),
        NamespacePolicy::Lenient => {
            warn!(
                found = namespace.unwrap_or("<none>"),
                expected = GRAMPS_NAMESPACE,
                ?status,
                "document namespace differs from the modeled one, parsing best-effort"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(xml: &str) -> XmlReader<&[u8]> {
        XmlReader::new(Reader::from_reader(xml.as_bytes()))
    }

    #[test]
    fn test_read_text_preserves_whitespace_and_references() {
        let mut reader = reader("<text>  a &amp; b&#x41;<![CDATA[<c>]]>\n</text>");
        let (start, empty) = reader.find_root().unwrap();
        assert_eq!(start.local_name().as_ref(), b"text");
        let text = reader.read_text(empty).unwrap();
        assert_eq!(text, "  a & bA<c>\n");
    }

    #[test]
    fn test_read_text_of_only_references() {
        let mut reader = reader("<text>&amp;&lt;&#233;</text>");
        reader.find_root().unwrap();
        assert_eq!(reader.read_text(false).unwrap(), "&<é");
    }

    #[test]
    fn test_read_text_unknown_entity_is_malformed() {
        let mut reader = reader("<text>a &nbsp; b</text>");
        reader.find_root().unwrap();
        let err = reader.read_text(false).unwrap_err();
        assert!(err.to_string().contains("&nbsp;"));
        assert!(err.position().is_some_and(|position| position > 0));
    }

    #[test]
    fn test_read_text_rejects_nested_element() {
        let mut reader = reader("<first>Ed<b/>ward</first>");
        reader.find_root().unwrap();
        let err = reader.read_text(false).unwrap_err();
        assert!(err.to_string().contains("unexpected element <b>"));
    }

    #[test]
    fn test_next_child_skips_whitespace_and_comments() {
        let mut reader = reader("<people>\n  <!-- c -->\n  <person/>\n</people>");
        reader.find_root().unwrap();
        let (child, empty) = reader.next_child().unwrap().unwrap();
        assert_eq!(child.local_name().as_ref(), b"person");
        assert!(empty);
        assert!(reader.next_child().unwrap().is_none());
    }

    #[test]
    fn test_next_child_rejects_stray_text() {
        let mut reader = reader("<people>oops<person/></people>");
        reader.find_root().unwrap();
        let err = reader.next_child().unwrap_err();
        assert!(matches!(err, GrampsError::MalformedDocument { .. }));
    }

    #[test]
    fn test_attributes_skip_namespace_declarations() {
        let mut reader =
            reader(r#"<database xmlns="urn:x" xmlns:g="urn:g" g:id="I1" title="a &lt; b"/>"#);
        let (start, _) = reader.find_root().unwrap();
        let attributes = reader.attributes(&start).unwrap();
        assert_eq!(
            attributes,
            vec![
                ("id".to_string(), "I1".to_string()),
                ("title".to_string(), "a < b".to_string()),
            ]
        );
    }

    #[test]
    fn test_root_namespace_default_and_prefixed() {
        let mut plain = reader(r#"<database xmlns="http://gramps-project.org/xml/1.7.1/"/>"#);
        let (start, _) = plain.find_root().unwrap();
        assert_eq!(
            plain.root_namespace(&start).unwrap().as_deref(),
            Some(GRAMPS_NAMESPACE)
        );

        let mut prefixed = reader(r#"<g:database xmlns:g="urn:other" xmlns="urn:default"/>"#);
        let (start, _) = prefixed.find_root().unwrap();
        assert_eq!(prefixed.root_namespace(&start).unwrap().as_deref(), Some("urn:other"));

        let mut bare = reader("<database/>");
        let (start, _) = bare.find_root().unwrap();
        assert_eq!(bare.root_namespace(&start).unwrap(), None);
    }

    #[test]
    fn test_root_namespace_error_reports_root_position() {
        let mut reader = reader(
            "<?xml version=\"1.0\"?>\n<database bad xmlns=\"http://gramps-project.org/xml/1.7.1/\">",
        );
        let (start, _) = reader.find_root().unwrap();
        let err = reader.root_namespace(&start).unwrap_err();
        assert!(matches!(err, GrampsError::MalformedDocument { .. }));
        assert!(err.position().is_some_and(|position| position > 22));
    }

    #[test]
    fn test_check_namespace_policies() {
        assert!(check_namespace(Some(GRAMPS_NAMESPACE), NamespacePolicy::Strict).is_ok());
        assert!(check_namespace(None, NamespacePolicy::Lenient).is_ok());
        assert!(check_namespace(Some("urn:other"), NamespacePolicy::Lenient).is_ok());

        let err = check_namespace(
            Some("http://gramps-project.org/xml/1.6.0/"),
            NamespacePolicy::Strict,
        )
        .unwrap_err();
        match err {
            GrampsError::UnsupportedNamespace { found, expected } => {
                assert_eq!(found.as_deref(), Some("http://gramps-project.org/xml/1.6.0/"));
                assert_eq!(expected, GRAMPS_NAMESPACE);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_find_root_skips_prolog_and_bom() {
        let xml = "\u{FEFF}<?xml version=\"1.0\"?>\n<!DOCTYPE database>\n<!-- x -->\n<database/>";
        let mut reader = reader(xml);
        let (start, empty) = reader.find_root().unwrap();
        assert_eq!(start.local_name().as_ref(), b"database");
        assert!(empty);
    }

    #[test]
    fn test_trailing_content_is_rejected() {
        let mut reader = reader("<database/>\n<database/>");
        reader.find_root().unwrap();
        assert!(reader.expect_end_of_input().is_err());

        let mut reader = self::reader("<database/>\n<!-- done -->\n");
        reader.find_root().unwrap();
        assert!(reader.expect_end_of_input().is_ok());
    }
}

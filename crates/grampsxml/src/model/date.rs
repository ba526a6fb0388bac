//! Date shapes shared by every date-bearing record.

use std::io::{BufRead, Write};

use quick_xml::events::BytesStart;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::de::XmlReader;
use crate::xml::ser::XmlWriter;
use crate::xml::{XmlChoice, XmlElement};

gramps_element! {
    /// Bounds of a `<daterange>` or `<datespan>`.
    pub struct DateRange {
        attributes {
            req start: String = "start",
            req stop: String = "stop",
            opt quality: Option<String> = "quality",
            opt cformat: Option<String> = "cformat",
            opt dualdated: Option<bool> = "dualdated",
            opt newyear: Option<String> = "newyear",
        }
        children {}
    }
}

gramps_element! {
    /// A single `<dateval>`, optionally qualified as before, after or about.
    pub struct DateVal {
        attributes {
            req val: String = "val",
            opt r#type: Option<String> = "type",
            opt quality: Option<String> = "quality",
            opt cformat: Option<String> = "cformat",
            opt dualdated: Option<bool> = "dualdated",
            opt newyear: Option<String> = "newyear",
        }
        children {}
    }
}

gramps_element! {
    /// Free text kept as written, `<datestr val="..."/>`.
    pub struct DateStr {
        attributes {
            req val: String = "val",
        }
        children {}
    }
}

/// The date of a record: exactly one of the four Gramps date shapes.
///
/// Fields hold `Option<DateValue>`; `None` means no date element was present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateValue {
    /// `<daterange>`: the event happened somewhere between start and stop.
    Range(DateRange),
    /// `<datespan>`: the event lasted from start to stop.
    Span(DateRange),
    /// `<dateval>`
    Single(DateVal),
    /// `<datestr>`
    Text(DateStr),
}

impl DateValue {
    /// Element name of the variant.
    pub fn tag(&self) -> &'static str {
        match self {
            DateValue::Range(_) => "daterange",
            DateValue::Span(_) => "datespan",
            DateValue::Single(_) => "dateval",
            DateValue::Text(_) => "datestr",
        }
    }
}

impl XmlChoice for DateValue {
    fn accepts(tag: &[u8]) -> bool {
        matches!(tag, b"daterange" | b"datespan" | b"dateval" | b"datestr")
    }

    fn read_choice<R: BufRead>(
        reader: &mut XmlReader<R>,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<Self> {
        let value = match start.local_name().as_ref() {
            b"daterange" => DateValue::Range(DateRange::read_xml(reader, start, empty)?),
            b"datespan" => DateValue::Span(DateRange::read_xml(reader, start, empty)?),
            b"dateval" => DateValue::Single(DateVal::read_xml(reader, start, empty)?),
            _ => DateValue::Text(DateStr::read_xml(reader, start, empty)?),
        };
        Ok(value)
    }

    fn write_choice<W: Write>(&self, writer: &mut XmlWriter<W>) -> Result<()> {
        let tag = self.tag();
        match self {
            DateValue::Range(range) | DateValue::Span(range) => range.write_xml(writer, tag),
            DateValue::Single(val) => val.write_xml(writer, tag),
            DateValue::Text(text) => text.write_xml(writer, tag),
        }
    }
}

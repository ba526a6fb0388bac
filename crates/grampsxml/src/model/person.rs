use std::io::{BufRead, Write};

use quick_xml::events::BytesStart;
use serde::{Deserialize, Serialize};

use super::{Address, Attribute, DateValue, EventRef, HandleRef, LdsOrd, ObjRef, Url};
use crate::error::Result;
use crate::xml::de::XmlReader;
use crate::xml::ser::XmlWriter;
use crate::xml::{AttrValue, XmlElement};

gramps_element! {
    /// A person record.
    pub struct Person {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
        }
        children {
            one gender: String = "gender",
            many names: Vec<Name> = "name",
            many eventrefs: Vec<EventRef> = "eventref",
            many lds_ords: Vec<LdsOrd> = "lds_ord",
            many objrefs: Vec<ObjRef> = "objref",
            many addresses: Vec<Address> = "address",
            many attributes: Vec<Attribute> = "attribute",
            many urls: Vec<Url> = "url",
            many childof: Vec<HandleRef> = "childof",
            many parentin: Vec<HandleRef> = "parentin",
            many personrefs: Vec<PersonRef> = "personref",
            many noterefs: Vec<HandleRef> = "noteref",
            many citationrefs: Vec<HandleRef> = "citationref",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}

impl Person {
    /// The name not flagged as alternate, falling back to the first one.
    pub fn primary_name(&self) -> Option<&Name> {
        self.names
            .iter()
            .find(|name| name.alt != Some(true))
            .or_else(|| self.names.first())
    }
}

gramps_element! {
    /// One name of a person; the first non-alternate name is the primary one.
    pub struct Name {
        attributes {
            opt alt: Option<bool> = "alt",
            opt r#type: Option<String> = "type",
            opt private: Option<bool> = "priv",
            opt sort: Option<String> = "sort",
            opt display: Option<String> = "display",
        }
        children {
            opt first: Option<String> = "first",
            opt call: Option<String> = "call",
            many surnames: Vec<Surname> = "surname",
            opt suffix: Option<String> = "suffix",
            opt title: Option<String> = "title",
            opt nick: Option<String> = "nick",
            opt familynick: Option<String> = "familynick",
            opt group: Option<String> = "group",
            choice date: Option<DateValue>,
            many noterefs: Vec<HandleRef> = "noteref",
            many citationrefs: Vec<HandleRef> = "citationref",
        }
    }
}

impl Name {
    /// The surname flagged primary, falling back to the first one.
    pub fn primary_surname(&self) -> Option<&Surname> {
        self.surnames
            .iter()
            .find(|surname| surname.prim == Some(true))
            .or_else(|| self.surnames.first())
    }
}

/// A `<surname>`: qualifying attributes around the literal surname text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surname {
    pub prefix: Option<String>,
    pub prim: Option<bool>,
    pub derivation: Option<String>,
    pub connector: Option<String>,
    pub value: String,
}

impl XmlElement for Surname {
    fn read_xml<R: BufRead>(
        reader: &mut XmlReader<R>,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<Self> {
        let mut surname = Surname::default();
        for (key, value) in reader.attributes(start)? {
            let slot = match key.as_str() {
                "prefix" => &mut surname.prefix,
                "derivation" => &mut surname.derivation,
                "connector" => &mut surname.connector,
                "prim" => {
                    let prim = bool::parse_attr(&value)
                        .map_err(|e| reader.invalid_attribute("prim", &value, e))?;
                    surname.prim = Some(prim);
                    continue;
                }
                _ => {
                    reader.ignore_attribute(start, &key);
                    continue;
                }
            };
            *slot = Some(value);
        }
        surname.value = reader.read_text(empty)?;
        Ok(surname)
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>, tag: &str) -> Result<()> {
        let mut start = BytesStart::new(tag);
        if let Some(prefix) = &self.prefix {
            start.push_attribute(("prefix", prefix.as_str()));
        }
        if let Some(prim) = self.prim {
            start.push_attribute(("prim", &*prim.format_attr()));
        }
        if let Some(derivation) = &self.derivation {
            start.push_attribute(("derivation", derivation.as_str()));
        }
        if let Some(connector) = &self.connector {
            start.push_attribute(("connector", connector.as_str()));
        }
        writer.write_text_element(start, &self.value)
    }
}

gramps_element! {
    /// An association with another person, e.g. godfather.
    pub struct PersonRef {
        attributes {
            req hlink: String = "hlink",
            opt private: Option<bool> = "priv",
            req rel: String = "rel",
        }
        children {
            many citationrefs: Vec<HandleRef> = "citationref",
            many noterefs: Vec<HandleRef> = "noteref",
        }
    }
}

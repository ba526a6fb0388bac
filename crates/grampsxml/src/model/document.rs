//! The document root, its header and the collection sections.

use std::io::{BufRead, Write};

use quick_xml::events::BytesStart;
use serde::{Deserialize, Serialize};

use super::{
    Citation, Event, Family, MediaObject, Note, Person, PlaceObj, Repository, Source, Tag,
};
use crate::error::Result;
use crate::xml::XmlElement;
use crate::xml::de::XmlReader;
use crate::xml::ser::XmlWriter;

/// A complete Gramps XML document, the `<database>` root.
///
/// Every section except the header is optional. An absent section is `None`;
/// an empty one such as `<notes/>` is `Some` with no records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Namespace URI declared on the root element, written back unchanged.
    pub namespace: Option<String>,
    pub header: Header,
    /// Entries of the `<name-formats>` section.
    pub name_formats: Vec<NameFormat>,
    pub tags: Option<Tags>,
    pub events: Option<Events>,
    pub people: Option<People>,
    pub families: Option<Families>,
    pub citations: Option<Citations>,
    pub sources: Option<Sources>,
    pub places: Option<Places>,
    pub objects: Option<Objects>,
    pub repositories: Option<Repositories>,
    pub notes: Option<Notes>,
    pub bookmarks: Option<Bookmarks>,
    pub namemaps: Option<Namemaps>,
}

impl Document {
    /// Creates an empty document bound to the namespace this crate models.
    pub fn new() -> Self {
        Self {
            namespace: Some(crate::xml::utils::GRAMPS_NAMESPACE.to_string()),
            ..Default::default()
        }
    }

    /// Number of primary records across the ten collections.
    pub fn record_count(&self) -> usize {
        self.tags.as_ref().map_or(0, |c| c.tags.len())
            + self.events.as_ref().map_or(0, |c| c.events.len())
            + self.people.as_ref().map_or(0, |c| c.persons.len())
            + self.families.as_ref().map_or(0, |c| c.families.len())
            + self.citations.as_ref().map_or(0, |c| c.citations.len())
            + self.sources.as_ref().map_or(0, |c| c.sources.len())
            + self.places.as_ref().map_or(0, |c| c.places.len())
            + self.objects.as_ref().map_or(0, |c| c.objects.len())
            + self.repositories.as_ref().map_or(0, |c| c.repositories.len())
            + self.notes.as_ref().map_or(0, |c| c.notes.len())
    }
}

fn read_section<R: BufRead, T: XmlElement>(
    slot: &mut Option<T>,
    reader: &mut XmlReader<R>,
    child: &BytesStart<'_>,
    empty: bool,
) -> Result<()> {
    if slot.is_some() {
        return Err(reader.duplicate_element(
            child.local_name().as_ref(),
            "section may appear at most once",
        ));
    }
    *slot = Some(T::read_xml(reader, child, empty)?);
    Ok(())
}

fn write_section<W: Write, T: XmlElement>(
    section: &Option<T>,
    writer: &mut XmlWriter<W>,
    tag: &str,
) -> Result<()> {
    match section {
        Some(section) => section.write_xml(writer, tag),
        None => Ok(()),
    }
}

impl XmlElement for Document {
    fn read_xml<R: BufRead>(
        reader: &mut XmlReader<R>,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<Self> {
        let mut document = Document {
            namespace: reader.root_namespace(start)?,
            ..Default::default()
        };
        for (key, _) in reader.attributes(start)? {
            reader.ignore_attribute(start, &key);
        }
        if empty {
            return Ok(document);
        }

        let mut header: Option<Header> = None;
        let mut name_formats_seen = false;
        while let Some((child, child_empty)) = reader.next_child()? {
            match child.local_name().as_ref() {
                b"header" => read_section(&mut header, reader, &child, child_empty)?,
                b"name-formats" => {
                    if name_formats_seen {
                        return Err(reader
                            .duplicate_element(b"name-formats", "section may appear at most once"));
                    }
                    name_formats_seen = true;
                    document.name_formats = read_name_formats(reader, &child, child_empty)?;
                }
                b"tags" => read_section(&mut document.tags, reader, &child, child_empty)?,
                b"events" => read_section(&mut document.events, reader, &child, child_empty)?,
                b"people" => read_section(&mut document.people, reader, &child, child_empty)?,
                b"families" => read_section(&mut document.families, reader, &child, child_empty)?,
                b"citations" => read_section(&mut document.citations, reader, &child, child_empty)?,
                b"sources" => read_section(&mut document.sources, reader, &child, child_empty)?,
                b"places" => read_section(&mut document.places, reader, &child, child_empty)?,
                b"objects" => read_section(&mut document.objects, reader, &child, child_empty)?,
                b"repositories" => {
                    read_section(&mut document.repositories, reader, &child, child_empty)?
                }
                b"notes" => read_section(&mut document.notes, reader, &child, child_empty)?,
                b"bookmarks" => read_section(&mut document.bookmarks, reader, &child, child_empty)?,
                b"namemaps" => read_section(&mut document.namemaps, reader, &child, child_empty)?,
                other => return Err(reader.unexpected_element(other, start)),
            }
        }
        document.header = header.unwrap_or_default();
        Ok(document)
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>, tag: &str) -> Result<()> {
        let mut start = BytesStart::new(tag);
        if let Some(namespace) = &self.namespace {
            start.push_attribute(("xmlns", namespace.as_str()));
        }
        writer.write_start(start)?;

        self.header.write_xml(writer, "header")?;
        if !self.name_formats.is_empty() {
            writer.write_start(BytesStart::new("name-formats"))?;
            for format in &self.name_formats {
                format.write_xml(writer, "format")?;
            }
            writer.write_end("name-formats")?;
        }
        write_section(&self.tags, writer, "tags")?;
        write_section(&self.events, writer, "events")?;
        write_section(&self.people, writer, "people")?;
        write_section(&self.families, writer, "families")?;
        write_section(&self.citations, writer, "citations")?;
        write_section(&self.sources, writer, "sources")?;
        write_section(&self.places, writer, "places")?;
        write_section(&self.objects, writer, "objects")?;
        write_section(&self.repositories, writer, "repositories")?;
        write_section(&self.notes, writer, "notes")?;
        write_section(&self.bookmarks, writer, "bookmarks")?;
        write_section(&self.namemaps, writer, "namemaps")?;

        writer.write_end(tag)
    }
}

fn read_name_formats<R: BufRead>(
    reader: &mut XmlReader<R>,
    start: &BytesStart<'_>,
    empty: bool,
) -> Result<Vec<NameFormat>> {
    let mut formats = Vec::new();
    if empty {
        return Ok(formats);
    }
    while let Some((child, child_empty)) = reader.next_child()? {
        let tag = child.local_name();
        if tag.as_ref() != b"format" {
            return Err(reader.unexpected_element(tag.as_ref(), start));
        }
        formats.push(NameFormat::read_xml(reader, &child, child_empty)?);
    }
    Ok(formats)
}

gramps_element! {
    pub struct Header {
        attributes {}
        children {
            one created: Created = "created",
            opt researcher: Option<Researcher> = "researcher",
            opt mediapath: Option<String> = "mediapath",
        }
    }
}

gramps_element! {
    /// Export date and the version of Gramps that wrote the file.
    pub struct Created {
        attributes {
            req date: String = "date",
            req version: String = "version",
        }
        children {}
    }
}

gramps_element! {
    /// Contact details of the person who owns the tree.
    pub struct Researcher {
        attributes {}
        children {
            opt resname: Option<String> = "resname",
            opt resaddr: Option<String> = "resaddr",
            opt reslocality: Option<String> = "reslocality",
            opt rescity: Option<String> = "rescity",
            opt resstate: Option<String> = "resstate",
            opt rescountry: Option<String> = "rescountry",
            opt respostal: Option<String> = "respostal",
            opt resphone: Option<String> = "resphone",
            opt resemail: Option<String> = "resemail",
        }
    }
}

gramps_element! {
    /// A custom name display format, `<format>` inside `<name-formats>`.
    pub struct NameFormat {
        attributes {
            req number: String = "number",
            req name: String = "name",
            req fmt_str: String = "fmt_str",
            opt active: Option<bool> = "active",
        }
        children {}
    }
}

gramps_element! {
    pub struct People {
        attributes {
            /// Handle of the default person.
            opt default: Option<String> = "default",
            /// Handle of the home person.
            opt home: Option<String> = "home",
        }
        children {
            many persons: Vec<Person> = "person",
        }
    }
}

gramps_element! {
    pub struct Families {
        attributes {}
        children {
            many families: Vec<Family> = "family",
        }
    }
}

gramps_element! {
    pub struct Events {
        attributes {}
        children {
            many events: Vec<Event> = "event",
        }
    }
}

gramps_element! {
    pub struct Sources {
        attributes {}
        children {
            many sources: Vec<Source> = "source",
        }
    }
}

gramps_element! {
    pub struct Citations {
        attributes {}
        children {
            many citations: Vec<Citation> = "citation",
        }
    }
}

gramps_element! {
    pub struct Places {
        attributes {}
        children {
            many places: Vec<PlaceObj> = "placeobj",
        }
    }
}

gramps_element! {
    pub struct Objects {
        attributes {}
        children {
            many objects: Vec<MediaObject> = "object",
        }
    }
}

gramps_element! {
    pub struct Repositories {
        attributes {}
        children {
            many repositories: Vec<Repository> = "repository",
        }
    }
}

gramps_element! {
    pub struct Notes {
        attributes {}
        children {
            many notes: Vec<Note> = "note",
        }
    }
}

gramps_element! {
    pub struct Tags {
        attributes {}
        children {
            many tags: Vec<Tag> = "tag",
        }
    }
}

gramps_element! {
    pub struct Bookmarks {
        attributes {}
        children {
            many bookmarks: Vec<Bookmark> = "bookmark",
        }
    }
}

gramps_element! {
    /// A bookmarked record; `target` names the record kind, e.g. `person`.
    pub struct Bookmark {
        attributes {
            req target: String = "target",
            req hlink: String = "hlink",
        }
        children {}
    }
}

gramps_element! {
    pub struct Namemaps {
        attributes {}
        children {
            many maps: Vec<Map> = "map",
        }
    }
}

gramps_element! {
    /// A surname grouping rule, e.g. `type="group_as" key="Fernández" value="Fernandez"`.
    pub struct Map {
        attributes {
            req r#type: String = "type",
            req key: String = "key",
            req value: String = "value",
        }
        children {}
    }
}

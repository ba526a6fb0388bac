//! Handle index over the records of a parsed document.
//!
//! The document model keeps cross-references as handle strings. The index maps
//! each handle to the collection and position of its record so that `hlink`s
//! can be followed without turning the model into an object graph.

use std::collections::HashMap;
use std::fmt;

use grampsxml::model::{Document, Family, Person};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Person,
    Family,
    Event,
    Source,
    Citation,
    Place,
    Object,
    Repository,
    Note,
    Tag,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Person => "person",
            RecordKind::Family => "family",
            RecordKind::Event => "event",
            RecordKind::Source => "source",
            RecordKind::Citation => "citation",
            RecordKind::Place => "place",
            RecordKind::Object => "object",
            RecordKind::Repository => "repository",
            RecordKind::Note => "note",
            RecordKind::Tag => "tag",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a record: its collection and index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef {
    pub kind: RecordKind,
    pub position: usize,
}

#[derive(Debug, Default)]
pub struct HandleIndex {
    records: HashMap<String, RecordRef>,
    duplicates: Vec<String>,
}

impl HandleIndex {
    /// Indexes every primary record of the document.
    ///
    /// When a handle occurs twice the first record wins and the handle is
    /// reported by [`HandleIndex::duplicates`].
    pub fn build(document: &Document) -> Self {
        let mut index = HandleIndex::default();

        if let Some(people) = &document.people {
            index.add_all(RecordKind::Person, people.persons.iter().map(|r| &r.handle));
        }
        if let Some(families) = &document.families {
            index.add_all(RecordKind::Family, families.families.iter().map(|r| &r.handle));
        }
        if let Some(events) = &document.events {
            index.add_all(RecordKind::Event, events.events.iter().map(|r| &r.handle));
        }
        if let Some(sources) = &document.sources {
            index.add_all(RecordKind::Source, sources.sources.iter().map(|r| &r.handle));
        }
        if let Some(citations) = &document.citations {
            index.add_all(RecordKind::Citation, citations.citations.iter().map(|r| &r.handle));
        }
        if let Some(places) = &document.places {
            index.add_all(RecordKind::Place, places.places.iter().map(|r| &r.handle));
        }
        if let Some(objects) = &document.objects {
            index.add_all(RecordKind::Object, objects.objects.iter().map(|r| &r.handle));
        }
        if let Some(repositories) = &document.repositories {
            index.add_all(
                RecordKind::Repository,
                repositories.repositories.iter().map(|r| &r.handle),
            );
        }
        if let Some(notes) = &document.notes {
            index.add_all(RecordKind::Note, notes.notes.iter().map(|r| &r.handle));
        }
        if let Some(tags) = &document.tags {
            index.add_all(RecordKind::Tag, tags.tags.iter().map(|r| &r.handle));
        }

        index
    }

    fn add_all<'a>(&mut self, kind: RecordKind, handles: impl Iterator<Item = &'a String>) {
        for (position, handle) in handles.enumerate() {
            if self.records.contains_key(handle) {
                warn!(handle = %handle, kind = %kind, "duplicate handle, keeping first record");
                self.duplicates.push(handle.clone());
                continue;
            }
            self.records
                .insert(handle.clone(), RecordRef { kind, position });
        }
    }

    pub fn get(&self, handle: &str) -> Option<RecordRef> {
        self.records.get(handle).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Follows a handle to a person of the document the index was built from.
    pub fn person<'d>(&self, document: &'d Document, handle: &str) -> Option<&'d Person> {
        match self.get(handle)? {
            RecordRef {
                kind: RecordKind::Person,
                position,
            } => document.people.as_ref()?.persons.get(position),
            _ => None,
        }
    }

    /// Follows a handle to a family of the document the index was built from.
    pub fn family<'d>(&self, document: &'d Document, handle: &str) -> Option<&'d Family> {
        match self.get(handle)? {
            RecordRef {
                kind: RecordKind::Family,
                position,
            } => document.families.as_ref()?.families.get(position),
            _ => None,
        }
    }

    /// Handles referenced from people and families that match no record.
    pub fn dangling_links(&self, document: &Document) -> Vec<String> {
        let mut links: Vec<&str> = Vec::new();
        if let Some(people) = &document.people {
            for person in &people.persons {
                links.extend(person.eventrefs.iter().map(|r| r.hlink.as_str()));
                links.extend(person.childof.iter().map(|r| r.hlink.as_str()));
                links.extend(person.parentin.iter().map(|r| r.hlink.as_str()));
                links.extend(person.personrefs.iter().map(|r| r.hlink.as_str()));
                links.extend(person.citationrefs.iter().map(|r| r.hlink.as_str()));
                links.extend(person.noterefs.iter().map(|r| r.hlink.as_str()));
            }
        }
        if let Some(families) = &document.families {
            for family in &families.families {
                links.extend(family.father.iter().map(|r| r.hlink.as_str()));
                links.extend(family.mother.iter().map(|r| r.hlink.as_str()));
                links.extend(family.childrefs.iter().map(|r| r.hlink.as_str()));
                links.extend(family.eventrefs.iter().map(|r| r.hlink.as_str()));
            }
        }

        let mut dangling: Vec<String> = links
            .into_iter()
            .filter(|handle| !self.records.contains_key(*handle))
            .map(str::to_string)
            .collect();
        dangling.sort();
        dangling.dedup();
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<database xmlns="http://gramps-project.org/xml/1.7.1/">
  <people>
    <person handle="_p1" change="1"><gender>M</gender><parentin hlink="_f1"/></person>
    <person handle="_p2" change="1"><gender>F</gender><childof hlink="_f9"/></person>
  </people>
  <families>
    <family handle="_f1" change="1"><father hlink="_p1"/><childref hlink="_p2"/></family>
  </families>
  <notes>
    <note handle="_p1" change="1" type="General"><text>clash</text></note>
  </notes>
</database>"#;

    #[test]
    fn test_build_and_lookup() {
        let document = grampsxml::parse(SAMPLE.as_bytes()).unwrap();
        let index = HandleIndex::build(&document);

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.get("_p2"),
            Some(RecordRef {
                kind: RecordKind::Person,
                position: 1
            })
        );
        assert_eq!(index.get("_f1").map(|r| r.kind), Some(RecordKind::Family));
        assert_eq!(index.get("_missing"), None);
        assert_eq!(index.duplicates(), ["_p1"]);
    }

    #[test]
    fn test_follow_links() {
        let document = grampsxml::parse(SAMPLE.as_bytes()).unwrap();
        let index = HandleIndex::build(&document);

        let family = index.family(&document, "_f1").unwrap();
        let father = family.father.as_ref().unwrap();
        assert_eq!(index.person(&document, &father.hlink).unwrap().gender, "M");
        assert!(index.person(&document, "_f1").is_none());
        assert_eq!(index.dangling_links(&document), ["_f9"]);
    }
}

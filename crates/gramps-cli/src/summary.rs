//! Plain-text overview of a parsed document.

use std::io::{self, Write};

use grampsxml::model::{Document, Person};

use crate::index::{HandleIndex, RecordKind};

pub fn write_summary<W: Write>(document: &Document, index: &HandleIndex, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "namespace: {}",
        document.namespace.as_deref().unwrap_or("(none)")
    )?;
    let created = &document.header.created;
    writeln!(out, "created: {} by Gramps {}", created.date, created.version)?;
    if let Some(researcher) = document.header.researcher.as_ref().and_then(|r| r.resname.as_deref()) {
        writeln!(out, "researcher: {researcher}")?;
    }

    let sections = [
        ("people", document.people.as_ref().map(|c| c.persons.len())),
        ("families", document.families.as_ref().map(|c| c.families.len())),
        ("events", document.events.as_ref().map(|c| c.events.len())),
        ("sources", document.sources.as_ref().map(|c| c.sources.len())),
        ("citations", document.citations.as_ref().map(|c| c.citations.len())),
        ("places", document.places.as_ref().map(|c| c.places.len())),
        ("objects", document.objects.as_ref().map(|c| c.objects.len())),
        ("repositories", document.repositories.as_ref().map(|c| c.repositories.len())),
        ("notes", document.notes.as_ref().map(|c| c.notes.len())),
        ("tags", document.tags.as_ref().map(|c| c.tags.len())),
    ];
    for (name, count) in sections {
        if let Some(count) = count {
            writeln!(out, "{name}: {count}")?;
        }
    }

    if let Some(people) = &document.people {
        writeln!(out)?;
        for person in &people.persons {
            writeln!(
                out,
                "{:<8} {} {}",
                person.id.as_deref().unwrap_or(&person.handle),
                person.gender,
                display_name(person)
            )?;
        }
    }

    if let Some(families) = &document.families {
        writeln!(out)?;
        for family in &families.families {
            let partner = |link: Option<&grampsxml::model::HandleRef>| {
                link.and_then(|r| index.person(document, &r.hlink))
                    .map(display_name)
                    .unwrap_or_else(|| "?".to_string())
            };
            writeln!(
                out,
                "{:<8} {} + {} ({} children)",
                family.id.as_deref().unwrap_or(&family.handle),
                partner(family.father.as_ref()),
                partner(family.mother.as_ref()),
                family.childrefs.len()
            )?;
        }
    }

    if index.is_empty() {
        writeln!(out, "no records")?;
    }
    if !index.duplicates().is_empty() {
        writeln!(out)?;
        writeln!(out, "duplicate handles: {}", index.duplicates().join(", "))?;
    }
    let dangling = index.dangling_links(document);
    if !dangling.is_empty() {
        writeln!(out)?;
        writeln!(out, "unresolved links: {}", dangling.join(", "))?;
    }
    Ok(())
}

/// One `--resolve` line: the record kind and position, plus a label for
/// people and families.
pub fn write_resolved<W: Write>(
    document: &Document,
    index: &HandleIndex,
    handle: &str,
    out: &mut W,
) -> io::Result<()> {
    let Some(record) = index.get(handle) else {
        return writeln!(out, "{handle}: not found");
    };
    let label = match record.kind {
        RecordKind::Person => index.person(document, handle).map(display_name),
        RecordKind::Family => index
            .family(document, handle)
            .map(|family| family.id.clone().unwrap_or_else(|| handle.to_string())),
        _ => None,
    };
    match label {
        Some(label) if !label.is_empty() => {
            writeln!(out, "{handle}: {} #{} {label}", record.kind, record.position)
        }
        _ => writeln!(out, "{handle}: {} #{}", record.kind, record.position),
    }
}

/// `Surname, Given` from the primary name, or an empty string.
fn display_name(person: &Person) -> String {
    let Some(name) = person.primary_name() else {
        return String::new();
    };
    let surname = name.primary_surname().map(|s| s.value.as_str()).unwrap_or("");
    match name.first.as_deref() {
        Some(first) if !surname.is_empty() => format!("{surname}, {first}"),
        Some(first) => first.to_string(),
        None => surname.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_people_and_families() {
        let xml = r#"<database xmlns="http://gramps-project.org/xml/1.7.1/">
  <header><created date="2024-03-04" version="5.1.5"/></header>
  <people>
    <person handle="_p1" change="1" id="I0001"><gender>M</gender>
      <name><first>Edward</first><surname>Потылицин</surname></name>
    </person>
  </people>
  <families>
    <family handle="_f1" change="1" id="F0001"><father hlink="_p1"/><mother hlink="_p9"/></family>
  </families>
</database>"#;
        let document = grampsxml::parse(xml.as_bytes()).unwrap();
        let index = HandleIndex::build(&document);

        let mut out = Vec::new();
        write_summary(&document, &index, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("created: 2024-03-04 by Gramps 5.1.5"));
        assert!(text.contains("people: 1"));
        assert!(!text.contains("events:"));
        assert!(text.contains("I0001    M Потылицин, Edward"));
        assert!(text.contains("F0001    Потылицин, Edward + ? (0 children)"));
        assert!(text.contains("unresolved links: _p9"));
        assert!(!text.contains("duplicate handles"));
    }

    #[test]
    fn test_summary_reports_duplicates_and_empty_documents() {
        let xml = r#"<database xmlns="http://gramps-project.org/xml/1.7.1/">
  <people><person handle="_x" change="1"><gender>U</gender></person></people>
  <notes><note handle="_x" change="1" type="General"><text>n</text></note></notes>
</database>"#;
        let document = grampsxml::parse(xml.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_summary(&document, &HandleIndex::build(&document), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("duplicate handles: _x"));

        let empty = grampsxml::Document::new();
        let mut out = Vec::new();
        write_summary(&empty, &HandleIndex::build(&empty), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("no records"));
    }

    #[test]
    fn test_resolved_lines_label_people_and_families() {
        let xml = r#"<database xmlns="http://gramps-project.org/xml/1.7.1/">
  <people>
    <person handle="_p1" change="1"><gender>F</gender><name><first>Ann</first></name></person>
  </people>
  <families><family handle="_f1" change="1" id="F0007"/></families>
  <notes><note handle="_n1" change="1" type="General"><text>n</text></note></notes>
</database>"#;
        let document = grampsxml::parse(xml.as_bytes()).unwrap();
        let index = HandleIndex::build(&document);

        let mut out = Vec::new();
        for handle in ["_p1", "_f1", "_n1", "_zz"] {
            write_resolved(&document, &index, handle, &mut out).unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "_p1: person #0 Ann\n_f1: family #0 F0007\n_n1: note #0\n_zz: not found\n"
        );
    }
}

mod common;

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use common::{assert_round_trip, tests_data_root};
use grampsxml::model::DateValue;
use grampsxml::{NamespacePolicy, ParseOptions, from_xml_reader, from_xml_reader_with};

fn gramps_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read data directory")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "gramps"))
        .collect();
    files.sort();
    files
}

#[test]
fn test_data_files_round_trip() {
    let files = gramps_files(&tests_data_root());
    assert!(!files.is_empty(), "no .gramps fixtures found");

    for path in files {
        let file = fs::File::open(&path).expect("open fixture");
        let document = from_xml_reader(BufReader::new(file))
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(document.record_count() > 0, "{}", path.display());
        assert_round_trip(&document);
    }
}

#[test]
fn test_sample_contents() {
    let path = tests_data_root().join("sample.gramps");
    let file = fs::File::open(&path).expect("open sample");
    let strict = ParseOptions {
        namespace_policy: NamespacePolicy::Strict,
    };
    let document = from_xml_reader_with(BufReader::new(file), &strict).expect("parse sample");

    assert_eq!(document.record_count(), 13);
    assert_eq!(document.name_formats.len(), 2);
    assert_eq!(document.name_formats[1].active, Some(false));

    let people = document.people.as_ref().expect("people");
    let lewis = &people.persons[0];
    assert_eq!(lewis.names.len(), 2);
    assert_eq!(lewis.names[1].alt, Some(true));
    assert_eq!(lewis.names[1].surnames[0].prim, Some(true));
    assert_eq!(lewis.addresses[0].private, Some(false));
    assert_eq!(lewis.personrefs[0].rel, "Godfather");

    let events = document.events.as_ref().expect("events");
    assert!(matches!(events.events[0].date, Some(DateValue::Range(_))));
    assert_eq!(events.events[1].private, Some(true));

    let note = &document.notes.as_ref().expect("notes").notes[0];
    assert_eq!(
        note.text,
        "Recorded as \"Louse\" in the 1880 census & parish book."
    );
    assert_eq!(note.format, Some(false));
    assert_eq!(note.styles[0].ranges.len(), 2);

    let citation = &document.citations.as_ref().expect("citations").citations[0];
    assert!(matches!(
        &citation.date,
        Some(DateValue::Text(text)) if text.val == "summer of 1855"
    ));
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Census catalog and transcripts over a tree loaded from JSON.

use std::fs;
use treeline::census::{self, generate_transcript, CensusTranscript};
use treeline::report;
use treeline::{find_census, Tree};

const HOUSEHOLD: &str = r#"{
  "individuals": [
    {"xref": "I1", "sex": "M", "names": [{"givn": "Jean", "surname": "Martin"}],
     "birth": {"date": "1820", "place": "Lyon, Rhône, France"}, "occupation": "Tisserand"},
    {"xref": "I2", "sex": "F", "names": [{"givn": "Marie", "surname": "Durand"}],
     "birth": {"date": "1825", "place": "Paris, Seine, France"}},
    {"xref": "I3", "sex": "M", "names": [{"givn": "Paul", "surname": "Martin"}],
     "birth": {"date": "1850", "place": "Lyon, Rhône, France"}}
  ],
  "families": [
    {"xref": "F1", "husband": "I1", "wife": "I2", "children": ["I3"], "marriage": {"date": "1848"}}
  ]
}"#;

fn load_household() -> Tree {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("household.json");
    fs::write(&path, HOUSEHOLD).unwrap();
    serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap()
}

#[test]
fn every_place_has_ordered_censuses() {
    let places = census::census_places();
    assert!(places.len() >= 8);
    for place in places {
        let name = place.census_place();
        let censuses = place.all_census_dates();
        assert!(!censuses.is_empty(), "{name} has no censuses");
        for pair in censuses.windows(2) {
            assert!(pair[0].year() <= pair[1].year(), "{name} out of order");
        }
        for census in censuses {
            assert!(!census.columns().is_empty());
            assert_eq!(census.census_place(), name);
        }
    }
}

#[test]
fn unknown_place_or_date() {
    assert!(find_census("Atlantis", "1851").is_none());
    assert!(find_census("England", "1795").is_none());
}

#[test]
fn tree_from_json_links_families() {
    let tree = load_household();
    assert_eq!(tree.individual_count(), 3);
    let son = tree.individual("I3").unwrap();
    assert_eq!(son.father().unwrap().xref(), "I1");
    assert_eq!(son.mother().unwrap().xref(), "I2");
}

#[test]
fn french_transcript_from_json_tree() {
    let tree = load_household();
    let definition = find_census("France", "1856").unwrap();
    let head = tree.individual("I1").unwrap();
    let members = [tree.individual("I2").unwrap(), tree.individual("I3").unwrap()];

    let transcript = generate_transcript(definition, head, &members);
    assert_eq!(transcript.rows.len(), 3);
    assert_eq!(transcript.rows[0].xref, "I1");
    assert_eq!(transcript.rows[2].xref, "I3");
    for row in &transcript.rows {
        assert_eq!(row.cells.len(), transcript.columns.len());
    }
}

#[test]
fn saved_transcript_reads_back() {
    let tree = load_household();
    let definition = find_census("England", "1861").unwrap();
    let head = tree.individual("I1").unwrap();
    let transcript = generate_transcript(definition, head, &[]);

    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("transcript.json");
    report::save_transcript(&transcript, &json_path).unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(saved["place"], "England");
    assert_eq!(saved["rows"][0]["cells"][0], "Jean Martin");

    let yaml_path = dir.path().join("transcript.yaml");
    report::save_transcript(&transcript, &yaml_path).unwrap();
    let yaml = fs::read_to_string(&yaml_path).unwrap();
    assert!(yaml.contains("place: England"));
}

#[test]
fn transcript_headers_match_columns() {
    let tree = load_household();
    let definition = find_census("Deutschland", "1867").unwrap();
    let transcript: CensusTranscript =
        generate_transcript(definition, tree.individual("I1").unwrap(), &[]);
    assert_eq!(transcript.headers().len(), definition.columns().len());
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! A filled-in census form for one household.

use super::{CensusColumn, CensusDefinition};
use crate::date::GedcomDate;
use crate::types::Individual;
use serde::Serialize;
use tracing::debug;

/// One household transcribed onto a census form.
#[derive(Debug, Clone, Serialize)]
pub struct CensusTranscript {
    pub place: String,
    pub date: GedcomDate,
    pub columns: Vec<CensusColumn>,
    pub rows: Vec<TranscriptRow>,
}

/// The cells of one household member, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptRow {
    pub xref: String,
    pub cells: Vec<String>,
}

impl CensusTranscript {
    /// Column abbreviations, for a table header.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(CensusColumn::abbreviation).collect()
    }
}

/// Transcribe the household of `head`. The head is always the first row;
/// the other members follow in the order given.
pub fn generate_transcript<'t>(
    definition: &CensusDefinition,
    head: Individual<'t>,
    members: &[Individual<'t>],
) -> CensusTranscript {
    let columns = definition.columns();
    let household = std::iter::once(head).chain(members.iter().copied().filter(|m| *m != head));

    let rows: Vec<TranscriptRow> = household
        .map(|member| TranscriptRow {
            xref: member.xref().to_string(),
            cells: columns
                .iter()
                .map(|column| column.generate(member, head))
                .collect(),
        })
        .collect();

    debug!(
        place = definition.census_place(),
        year = definition.year(),
        rows = rows.len(),
        "transcribed household"
    );

    CensusTranscript {
        place: definition.census_place().to_string(),
        date: definition.census_date(),
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::find_census;
    use crate::types::{Event, FamilyRecord, IndividualRecord, NameRecord, Sex, Tree};

    fn born(text: &str, place: &str) -> Event {
        Event::dated(GedcomDate::parse(text).unwrap()).at(place)
    }

    fn household() -> Tree {
        Tree::new(
            vec![
                IndividualRecord::new("I1", Sex::Male)
                    .with_name(NameRecord::new("Thomas", "Hardy"))
                    .born(born("1830", "Dorchester, Dorset, England"))
                    .with_occupation("Mason"),
                IndividualRecord::new("I2", Sex::Female)
                    .with_name(NameRecord::new("Jemima", "Hand"))
                    .with_name(NameRecord::new("Jemima", "Hardy").married())
                    .born(born("1833", "Melbury Osmond, Dorset, England")),
                IndividualRecord::new("I3", Sex::Male)
                    .with_name(NameRecord::new("Henry", "Hardy"))
                    .born(born("1862", "Stinsford, Dorset, England")),
            ],
            vec![FamilyRecord::new("F1", Some("I1"), Some("I2"))
                .married(Event::dated(GedcomDate::parse("1855").unwrap()))
                .with_children(&["I3"])],
        )
    }

    #[test]
    fn rows_follow_the_columns() {
        let tree = household();
        let census = find_census("England", "1871").unwrap();
        let head = tree.individual("I1").unwrap();
        let members = [tree.individual("I2").unwrap(), tree.individual("I3").unwrap()];

        let transcript = generate_transcript(census, head, &members);
        assert_eq!(transcript.place, "England");
        assert_eq!(
            transcript.headers(),
            vec!["Name", "Relation", "Condition", "AgeM", "AgeF", "Occupation", "Birthplace", "Infirm"]
        );
        assert_eq!(transcript.rows.len(), 3);
        assert_eq!(
            transcript.rows[0].cells,
            vec!["Thomas Hardy", "head", "Mar", "41", "", "Mason", "Dorchester, Dorset", ""]
        );
        assert_eq!(
            transcript.rows[1].cells,
            vec!["Jemima Hardy", "wife", "Mar", "", "38", "", "Melbury Osmond, Dorset", ""]
        );
        assert_eq!(transcript.rows[2].xref, "I3");
        assert_eq!(transcript.rows[2].cells[1], "son");
        assert_eq!(transcript.rows[2].cells[3], "9");
    }

    #[test]
    fn head_is_listed_once() {
        let tree = household();
        let census = find_census("Danmark", "1850").unwrap();
        let head = tree.individual("I1").unwrap();
        let transcript = generate_transcript(census, head, &[head]);
        assert_eq!(transcript.rows.len(), 1);
        assert_eq!(transcript.rows[0].cells.len(), census.columns().len());
    }

    #[test]
    fn serializes_headers_and_cells() {
        let tree = household();
        let census = find_census("Scotland", "1871").unwrap();
        let head = tree.individual("I1").unwrap();
        let json = serde_json::to_value(generate_transcript(census, head, &[])).unwrap();
        assert_eq!(json["date"], "02 APR 1871");
        assert_eq!(json["columns"][0]["abbreviation"], "Name");
        assert_eq!(json["rows"][0]["xref"], "I1");
    }
}

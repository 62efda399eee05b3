// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting

use crate::census::{CensusPlace, CensusTranscript};
use crate::locale::{t, t_or_key, Lang};
use crate::surname::NameFields;
use colored::*;

pub struct ReportFormatter {
    lang: Lang,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::with_language(Lang::default())
    }

    /// Labels in `lang` (the configured `language`).
    pub fn with_language(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn print_transcript(&self, transcript: &CensusTranscript) {
        println!(
            "\n{}",
            format!("=== {} ===", self.transcript_heading(transcript))
                .bold()
                .cyan()
        );
        if let Some(head) = self.head_line(transcript) {
            println!("{}", head.dimmed());
        }
        println!();
        for line in self.transcript_lines(transcript) {
            println!("{}", line);
        }
        println!();
    }

    pub fn transcript_heading(&self, transcript: &CensusTranscript) -> String {
        format!(
            "{} {} {}",
            t(self.lang, "transcript.title"),
            transcript.place,
            transcript.date
        )
    }

    /// `Head of household: I1`, or nothing for an empty transcript.
    pub fn head_line(&self, transcript: &CensusTranscript) -> Option<String> {
        let head = transcript.rows.first()?;
        Some(format!(
            "{}: {}",
            t_or_key(self.lang, "transcript.head"),
            head.xref
        ))
    }

    /// The transcript as aligned plain-text lines: header, rule, rows.
    pub fn transcript_lines(&self, transcript: &CensusTranscript) -> Vec<String> {
        let headers = transcript.headers();
        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                transcript
                    .rows
                    .iter()
                    .filter_map(|row| row.cells.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad(cell, *width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![
            line(headers.clone()).bold().to_string(),
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        ];
        for row in &transcript.rows {
            lines.push(line(row.cells.iter().map(String::as_str).collect()));
        }
        lines
    }

    pub fn print_places(&self, places: &[CensusPlace]) {
        println!("{}", "CENSUS PLACES".bold().yellow());
        for place in places {
            let years: Vec<String> = place
                .all_census_dates()
                .iter()
                .map(|census| census.year().to_string())
                .collect();
            println!(
                "  {} ({}): {}",
                place.census_place().bold(),
                place.census_language(),
                years.join(", ").dimmed()
            );
        }
    }

    pub fn print_name_fields(&self, fields: &NameFields) {
        for (tag, value) in fields.iter() {
            println!("  {} {}", tag.tag().green(), value);
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

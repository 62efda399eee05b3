// SPDX-License-Identifier: PMPL-1.0-or-later

//! Printing and exporting census transcripts and name suggestions

pub mod formatter;
pub mod output;

use crate::census::CensusTranscript;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Save a transcript, choosing the format from the file extension
pub fn save_transcript<P: AsRef<Path>>(transcript: &CensusTranscript, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ReportOutputFormat::parse)
        .unwrap_or(ReportOutputFormat::Json);
    let text = format.serialize(transcript)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

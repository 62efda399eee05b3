// SPDX-License-Identifier: PMPL-1.0-or-later

//! The census assistant: shows a household transcribed onto a census form.

use super::{escape_html, Module, ModuleBase, Response, ViewData, ViewError, ViewRegistry, HTTP_OK};
use crate::census::CensusTranscript;

pub const TRANSCRIPT_VIEW: &str = "modules/census-assistant/transcript";

pub struct CensusAssistantModule {
    base: ModuleBase,
}

impl CensusAssistantModule {
    pub fn new(base: ModuleBase) -> Self {
        Self { base }
    }

    /// Register the transcript view unless one is already loaded.
    pub fn register_views(views: &mut ViewRegistry) {
        if !views.contains(TRANSCRIPT_VIEW) {
            views.register(
                TRANSCRIPT_VIEW,
                "<h2>{{ place }} {{ date }}</h2>\n{{ content }}",
            );
        }
    }

    /// The transcript as an HTML table inside the module layout.
    pub fn transcript_response(
        &self,
        views: &ViewRegistry,
        transcript: &CensusTranscript,
    ) -> Result<Response, ViewError> {
        let mut data = ViewData::new();
        data.insert("title".to_string(), self.title());
        data.insert("place".to_string(), transcript.place.clone());
        data.insert("date".to_string(), transcript.date.to_string());
        data.insert("content".to_string(), transcript_table(transcript));
        self.view_response(views, TRANSCRIPT_VIEW, &data, HTTP_OK)
    }
}

impl Module for CensusAssistantModule {
    fn base(&self) -> &ModuleBase {
        &self.base
    }

    fn title(&self) -> String {
        "Census assistant".to_string()
    }

    fn description(&self) -> String {
        "An alternative way to enter census transcripts and link them to individuals.".to_string()
    }
}

fn transcript_table(transcript: &CensusTranscript) -> String {
    let mut html = String::from("<table class=\"census\">\n<thead><tr>");
    for column in &transcript.columns {
        html.push_str(&format!(
            "<th title=\"{}\">{}</th>",
            escape_html(column.title()),
            escape_html(column.abbreviation())
        ));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &transcript.rows {
        html.push_str("<tr>");
        for cell in &row.cells {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

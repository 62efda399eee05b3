// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported reports

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surname::{NameFields, NameTag};

    #[test]
    fn parses_format_names() {
        assert_eq!(ReportOutputFormat::parse("YML"), Some(ReportOutputFormat::Yaml));
        assert_eq!(ReportOutputFormat::parse("json"), Some(ReportOutputFormat::Json));
        assert_eq!(ReportOutputFormat::parse("ncl"), None);
    }

    #[test]
    fn name_fields_use_gedcom_tags() {
        let fields = NameFields::blank().with(NameTag::MarriedName, "/White/");
        let yaml = ReportOutputFormat::Yaml.serialize(&fields).unwrap();
        assert!(yaml.contains("NAME: //"));
        assert!(yaml.contains("_MARNM: /White/"));
        let json = ReportOutputFormat::Json.serialize(&fields).unwrap();
        assert!(json.contains("\"_MARNM\": \"/White/\""));
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! JSON-backed translation dataset.
//!
//! The source file is an array of per-country records. Each record carries
//! an `alpha3` key field, optional `alpha2` and `id` reserved fields, and
//! one field per language code holding the translated name:
//!
//! ```json
//! [{ "id": 124, "alpha2": "ca", "alpha3": "can", "en": "Canada", "de": "Kanada" }]
//! ```
//!
//! The file is read exactly once, at construction. Records are indexed by
//! their `alpha3` code; enumeration order follows the file. The reserved
//! fields are struct members, so the flattened language map can never
//! contain them.

use super::Translator;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

const BUNDLED: &str = include_str!("../../data/sample.json");

#[derive(Debug, Clone, Deserialize)]
struct CountryRecord {
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    #[allow(dead_code)]
    alpha2: Option<String>,
    alpha3: String,
    #[serde(flatten)]
    translations: BTreeMap<String, String>,
}

/// Translator over a JSON array of country records.
#[derive(Debug, Clone)]
pub struct JsonTranslator {
    // Insertion order of the source file, for enumeration.
    order: Vec<String>,
    records: HashMap<String, CountryRecord>,
}

impl JsonTranslator {
    /// Translator backed by the bundled sample dataset.
    pub fn bundled() -> Result<Self> {
        Self::from_str(BUNDLED).context("parsing bundled dataset")
    }

    /// Parses a dataset from JSON text.
    ///
    /// Anything that is not an array of records with string language fields
    /// is a fatal construction error.
    pub fn from_str(text: &str) -> Result<Self> {
        let parsed: Vec<CountryRecord> =
            serde_json::from_str(text).context("dataset is not an array of country records")?;

        let mut order = Vec::with_capacity(parsed.len());
        let mut records = HashMap::with_capacity(parsed.len());
        for record in parsed {
            order.push(record.alpha3.clone());
            records.insert(record.alpha3.clone(), record);
        }

        Ok(JsonTranslator { order, records })
    }

    /// Loads a dataset from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading dataset {}", path.display()))?;
        Self::from_str(&text)
            .with_context(|| format!("parsing dataset {}", path.display()))
    }
}

impl Translator for JsonTranslator {
    fn countries(&self) -> Vec<String> {
        self.order.clone()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        match self.records.get(country) {
            Some(record) => record.translations.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.records
            .get(country)?
            .translations
            .get(language)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"id": 124, "alpha2": "ca", "alpha3": "can", "en": "Canada", "de": "Kanada"},
        {"alpha3": "usa", "en": "United States", "es": "Estados Unidos"}
    ]"#;

    #[test]
    fn countries_in_file_order() {
        let t = JsonTranslator::from_str(DATASET).unwrap();
        assert_eq!(t.countries(), vec!["can", "usa"]);
    }

    #[test]
    fn reserved_fields_excluded_from_languages() {
        let t = JsonTranslator::from_str(DATASET).unwrap();
        let langs = t.country_languages("can");
        assert_eq!(langs, vec!["de", "en"]);
        assert!(!langs.contains(&"alpha2".to_string()));
        assert!(!langs.contains(&"alpha3".to_string()));
        assert!(!langs.contains(&"id".to_string()));
    }

    #[test]
    fn translates_present_fields() {
        let t = JsonTranslator::from_str(DATASET).unwrap();
        assert_eq!(t.translate("can", "en"), Some("Canada"));
        assert_eq!(t.translate("can", "de"), Some("Kanada"));
    }

    #[test]
    fn absent_keys_are_misses() {
        let t = JsonTranslator::from_str(DATASET).unwrap();
        assert_eq!(t.translate("can", "fr"), None);
        assert_eq!(t.translate("mex", "en"), None);
        assert!(t.country_languages("mex").is_empty());
    }

    #[test]
    fn non_array_input_is_fatal() {
        assert!(JsonTranslator::from_str(r#"{"alpha3": "can"}"#).is_err());
        assert!(JsonTranslator::from_str("not json").is_err());
    }

    #[test]
    fn bundled_dataset_parses() {
        let t = JsonTranslator::bundled().unwrap();
        assert!(t.countries().contains(&"can".to_string()));
        assert_eq!(t.translate("can", "en"), Some("Canada"));
    }
}

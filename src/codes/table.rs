// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generic bidirectional code table.
//!
//! Parses tab-separated reference data of the shape
//! `display name \t two-letter code \t three-letter code`, with any extra
//! trailing fields ignored. Four maps are derived at construction and never
//! mutated afterwards. Code keys are lower-cased before indexing so that
//! code lookups are case-insensitive; display names keep the case they were
//! loaded with.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Bidirectional lookup over (display name, two-letter code, three-letter
/// code) rows.
///
/// Rows with fewer than three tab-separated fields are skipped silently.
/// The shipped reference files start with a column-header line that happens
/// to have three fields, so it is loaded like any other row; see
/// [`CodeTable::count`] for the consequence.
#[derive(Debug, Clone)]
pub struct CodeTable {
    name_to_three: HashMap<String, String>,
    three_to_name: HashMap<String, String>,
    two_to_three: HashMap<String, String>,
    three_to_two: HashMap<String, String>,
}

impl CodeTable {
    /// Builds a table from an iterator of reference lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = CodeTable {
            name_to_three: HashMap::new(),
            three_to_name: HashMap::new(),
            two_to_three: HashMap::new(),
            three_to_two: HashMap::new(),
        };

        for line in lines {
            let parts: Vec<&str> = line.as_ref().split('\t').collect();
            if parts.len() < 3 {
                continue;
            }
            let name = parts[0].to_string();
            let two = parts[1].to_lowercase();
            let three = parts[2].to_lowercase();
            table.name_to_three.insert(name.clone(), three.clone());
            table.three_to_name.insert(three.clone(), name);
            table.two_to_three.insert(two.clone(), three.clone());
            table.three_to_two.insert(three, two);
        }

        table
    }

    /// Builds a table from the full text of a reference file.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Loads a table from a reference file on disk.
    ///
    /// An unreadable file is fatal here; partial data is never returned.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading code table {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Display name for a three-letter code, if loaded.
    pub fn name_for(&self, three: &str) -> Option<&str> {
        self.three_to_name
            .get(&three.to_lowercase())
            .map(String::as_str)
    }

    /// Three-letter code for a display name, if loaded.
    ///
    /// Name lookups are exact-case: names are indexed as they appear in the
    /// reference data.
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.name_to_three.get(name).map(String::as_str)
    }

    /// Three-letter code for a two-letter code, if loaded.
    pub fn two_to_three(&self, two: &str) -> Option<&str> {
        self.two_to_three
            .get(&two.to_lowercase())
            .map(String::as_str)
    }

    /// Two-letter code for a three-letter code, if loaded.
    pub fn three_to_two(&self, three: &str) -> Option<&str> {
        self.three_to_two
            .get(&three.to_lowercase())
            .map(String::as_str)
    }

    /// Number of entries, not counting the header row.
    ///
    /// The first line of the shipped reference files is a column header that
    /// parses as an ordinary row, so this reports one fewer than the number
    /// of rows actually loaded. Kept as-is: downstream counts have always
    /// meant "data rows".
    pub fn count(&self) -> usize {
        self.name_to_three.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "Name\tAlpha-2\tAlpha-3\nCanada\tCA\tCAN\nGermany\tDE\tDEU\nJapan\tJP\tJPN\textra\n";

    #[test]
    fn resolves_in_both_directions() {
        let table = CodeTable::parse(FIXTURE);
        assert_eq!(table.name_for("can"), Some("Canada"));
        assert_eq!(table.code_for("Canada"), Some("can"));
        assert_eq!(table.two_to_three("de"), Some("deu"));
        assert_eq!(table.three_to_two("jpn"), Some("jp"));
    }

    #[test]
    fn code_lookups_are_case_insensitive() {
        let table = CodeTable::parse(FIXTURE);
        assert_eq!(table.two_to_three("DE"), table.two_to_three("de"));
        assert_eq!(table.name_for("CAN"), Some("Canada"));
        assert_eq!(table.three_to_two("DEU"), Some("de"));
    }

    #[test]
    fn name_lookups_preserve_loaded_case() {
        let table = CodeTable::parse(FIXTURE);
        assert_eq!(table.code_for("Canada"), Some("can"));
        assert_eq!(table.code_for("canada"), None);
    }

    #[test]
    fn extra_trailing_fields_ignored() {
        let table = CodeTable::parse(FIXTURE);
        assert_eq!(table.name_for("jpn"), Some("Japan"));
    }

    #[test]
    fn short_rows_skipped_silently() {
        let table = CodeTable::parse("Name\tAlpha-2\tAlpha-3\nCanada\tCA\tCAN\nnot-enough-fields\n");
        assert_eq!(table.name_for("can"), Some("Canada"));
        assert_eq!(table.code_for("not-enough-fields"), None);
        // 2 rows loaded (header + Canada), count excludes the header.
        assert_eq!(table.count(), 1);
    }

    #[test]
    fn count_is_rows_minus_one() {
        // 4 valid rows in the fixture, header included.
        let table = CodeTable::parse(FIXTURE);
        assert_eq!(table.count(), 3);
    }

    #[test]
    fn unknown_keys_return_none() {
        let table = CodeTable::parse(FIXTURE);
        assert_eq!(table.name_for("zzz"), None);
        assert_eq!(table.code_for("Atlantis"), None);
        assert_eq!(table.two_to_three("zz"), None);
        assert_eq!(table.three_to_two("zzz"), None);
    }

    #[test]
    fn round_trips_hold_for_all_rows() {
        let table = CodeTable::parse(FIXTURE);
        for three in ["can", "deu", "jpn"] {
            let two = table.three_to_two(three).unwrap();
            assert_eq!(table.two_to_three(two), Some(three));
            let name = table.name_for(three).unwrap();
            assert_eq!(table.code_for(name), Some(three));
        }
    }
}

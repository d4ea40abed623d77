// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country code registry: name, alpha-2, alpha-3.

use super::table::CodeTable;
use anyhow::Result;
use std::path::Path;

/// Bundled ISO 3166 reference table, embedded at compile time so the binary
/// works without an install step. Overridable via `--countries`.
const BUNDLED: &str = include_str!("../../data/country-codes.txt");

/// Resolves among country display names, alpha-2 codes, and alpha-3 codes.
#[derive(Debug, Clone)]
pub struct CountryCodes {
    table: CodeTable,
}

impl CountryCodes {
    /// Registry backed by the bundled ISO 3166 table.
    pub fn bundled() -> Self {
        CountryCodes {
            table: CodeTable::parse(BUNDLED),
        }
    }

    /// Registry loaded from a reference file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(CountryCodes {
            table: CodeTable::load(path)?,
        })
    }

    /// Registry parsed from reference-file text. Useful for tests.
    pub fn parse(text: &str) -> Self {
        CountryCodes {
            table: CodeTable::parse(text),
        }
    }

    /// Country name for an alpha-3 code.
    pub fn name_for(&self, alpha3: &str) -> Option<&str> {
        self.table.name_for(alpha3)
    }

    /// Alpha-3 code for a country name (exact case, as loaded).
    pub fn alpha3_for(&self, name: &str) -> Option<&str> {
        self.table.code_for(name)
    }

    /// Alpha-3 code for an alpha-2 code.
    pub fn alpha2_to_alpha3(&self, alpha2: &str) -> Option<&str> {
        self.table.two_to_three(alpha2)
    }

    /// Alpha-2 code for an alpha-3 code.
    pub fn alpha3_to_alpha2(&self, alpha3: &str) -> Option<&str> {
        self.table.three_to_two(alpha3)
    }

    /// Number of countries in the registry (header row excluded, see
    /// [`CodeTable::count`]).
    pub fn num_countries(&self) -> usize {
        self.table.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_resolves_known_countries() {
        let codes = CountryCodes::bundled();
        assert_eq!(codes.name_for("can"), Some("Canada"));
        assert_eq!(codes.alpha3_for("United States"), Some("usa"));
        assert_eq!(codes.alpha2_to_alpha3("us"), Some("usa"));
        assert_eq!(codes.alpha3_to_alpha2("deu"), Some("de"));
    }

    #[test]
    fn bundled_alpha2_lookup_ignores_case() {
        let codes = CountryCodes::bundled();
        assert_eq!(codes.alpha2_to_alpha3("US"), codes.alpha2_to_alpha3("us"));
    }

    #[test]
    fn bundled_count_excludes_header() {
        let codes = CountryCodes::bundled();
        // 60 data rows in data/country-codes.txt, plus the header.
        assert_eq!(codes.num_countries(), 60);
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language code registry: display name and ISO 639-1 code.
//!
//! Same reference-file shape as the country table, with the code repeated in
//! the second and third columns so rows meet the three-field minimum. The
//! registry only exposes the (name, code) pair.

use super::table::CodeTable;
use anyhow::Result;
use std::path::Path;

const BUNDLED: &str = include_str!("../../data/language-codes.txt");

/// Resolves between a language's display name and its code.
#[derive(Debug, Clone)]
pub struct LanguageCodes {
    table: CodeTable,
}

impl LanguageCodes {
    /// Registry backed by the bundled ISO 639 table.
    pub fn bundled() -> Self {
        LanguageCodes {
            table: CodeTable::parse(BUNDLED),
        }
    }

    /// Registry loaded from a reference file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(LanguageCodes {
            table: CodeTable::load(path)?,
        })
    }

    /// Registry parsed from reference-file text. Useful for tests.
    pub fn parse(text: &str) -> Self {
        LanguageCodes {
            table: CodeTable::parse(text),
        }
    }

    /// Display name for a language code.
    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.table.name_for(code)
    }

    /// Language code for a display name (exact case, as loaded).
    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.table.code_for(name)
    }
}

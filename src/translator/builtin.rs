// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hard-coded fallback dataset: Canada in five languages.
//!
//! Exists so the program (and its tests) can run without any dataset file.
//! Selected with the `--builtin` flag.

use super::Translator;

const CANADA: &str = "can";

const TRANSLATIONS: &[(&str, &str)] = &[
    ("de", "Kanada"),
    ("en", "Canada"),
    ("zh", "加拿大"),
    ("es", "Canadá"),
    ("ja", "カナダ"),
];

/// Stateless single-country translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTranslator;

impl Translator for BuiltinTranslator {
    fn countries(&self) -> Vec<String> {
        vec![CANADA.to_string()]
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        if country == CANADA {
            TRANSLATIONS.iter().map(|(code, _)| code.to_string()).collect()
        } else {
            Vec::new()
        }
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        if country != CANADA {
            return None;
        }
        TRANSLATIONS
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, name)| *name)
    }
}

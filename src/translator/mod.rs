// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation data sources.
//!
//! A [`Translator`] answers three questions: which countries it knows, which
//! languages it has for a country, and what a country is called in a given
//! language. The session loop only ever talks to the trait, so the built-in
//! dataset and the JSON-backed one are interchangeable at construction time.

mod builtin;
mod json;

pub use builtin::BuiltinTranslator;
pub use json::JsonTranslator;

/// Capability interface over per-country, per-language name data.
///
/// Implementations load their dataset once at construction and are pure
/// reads afterwards. A missing country or language is a lookup miss
/// (`None`, or an empty list), never a panic.
pub trait Translator {
    /// Three-letter codes of all countries with translations, in the
    /// dataset's own order.
    fn countries(&self) -> Vec<String>;

    /// Language codes available for a country. Empty for unknown countries.
    /// Reserved record fields (codes, identifiers) are never included.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// The country's name in the given language, or `None` if either key
    /// is absent from the dataset.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;
}

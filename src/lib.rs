// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terraglot — interactive country-name translation.
//!
//! This crate provides the core engine behind the `terraglot` CLI: a user
//! picks a country, then a language, and the program prints that country's
//! name in the chosen language.
//!
//! ENGINE PILLARS:
//! 1. **Codes**: bidirectional lookup tables over ISO 3166 country codes
//!    and ISO 639 language codes, loaded once from tab-separated reference
//!    data and immutable afterwards.
//! 2. **Translator**: a capability interface over per-country, per-language
//!    name data, with a built-in single-country dataset and a JSON-backed
//!    dataset selected at construction.
//! 3. **Session**: the line-oriented prompt loop that composes the two.

pub mod codes;
pub mod session;
pub mod translator;

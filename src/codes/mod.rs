// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reference-data resolvers for ISO country and language codes.
//!
//! Both registries are thin views over [`CodeTable`], a generic bidirectional
//! mapping built once from tab-separated reference lines. Tables are
//! immutable after construction; lookup misses return `None`, never a
//! default. A file that cannot be read at all is a startup error, not a
//! per-lookup one.

mod country;
mod language;
mod table;

pub use country::CountryCodes;
pub use language::LanguageCodes;
pub use table::CodeTable;

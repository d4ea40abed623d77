// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive prompt loop.
//!
//! Reads line-oriented input from an injected reader and writes menus and
//! results to an injected writer, so the whole loop is testable without a
//! terminal. Each iteration: pick a country from a sorted menu, pick a
//! language from that country's available translations, print the result.
//! The literal token `quit` exits at any prompt; end of input does too.

use crate::codes::{CountryCodes, LanguageCodes};
use crate::translator::Translator;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Token that terminates the session at any prompt.
pub const QUIT: &str = "quit";

/// Runs the prompt loop until `quit` or end of input.
///
/// Country codes the translator knows but the registry cannot name are
/// dropped from the menu silently. Lookup misses on user selections are
/// reported and the loop continues; nothing short of an I/O error ends the
/// program from here.
pub fn run<R: BufRead, W: Write>(
    translator: &dyn Translator,
    countries: &CountryCodes,
    languages: &LanguageCodes,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let codes = translator.countries();
        let mut names: Vec<&str> = codes
            .iter()
            .filter_map(|code| countries.name_for(code))
            .collect();
        names.sort_unstable();

        for name in &names {
            writeln!(output, "{name}")?;
        }
        writeln!(output, "select a country from above (or {QUIT}):")?;

        let Some(country_name) = read_line(input)? else {
            break;
        };
        if country_name == QUIT {
            break;
        }

        let Some(alpha3) = countries.alpha3_for(&country_name) else {
            writeln!(output, "unknown country: {country_name}")?;
            continue;
        };

        let language_codes = translator.country_languages(alpha3);
        let mut language_names: Vec<&str> = language_codes
            .iter()
            .filter_map(|code| languages.name_for_code(code))
            .collect();
        language_names.sort_unstable();

        for name in &language_names {
            writeln!(output, "{name}")?;
        }
        writeln!(output, "select a language from above (or {QUIT}):")?;

        let Some(language_name) = read_line(input)? else {
            break;
        };
        if language_name == QUIT {
            break;
        }

        let Some(language_code) = languages.code_for_name(&language_name) else {
            writeln!(output, "unknown language: {language_name}")?;
            continue;
        };

        match translator.translate(alpha3, language_code) {
            Some(translated) => {
                writeln!(output, "{country_name} in {language_name} is {translated}")?;
            }
            None => {
                writeln!(
                    output,
                    "no translation of {country_name} into {language_name}"
                )?;
            }
        }

        writeln!(output, "press enter to continue or {QUIT} to exit:")?;
        match read_line(input)? {
            None => break,
            Some(text) if text == QUIT => break,
            Some(_) => {}
        }
    }

    Ok(())
}

/// Reads one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

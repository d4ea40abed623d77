// SPDX-License-Identifier: PMPL-1.0-or-later

//! terraglot: interactive country-name translator
//!
//! Presents a menu of countries, then the languages available for the chosen
//! country, and prints the country's name in the chosen language. Reference
//! tables and the sample dataset are embedded in the binary; all three can
//! be overridden from the command line.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use terraglot::codes::{CountryCodes, LanguageCodes};
use terraglot::session;
use terraglot::translator::{BuiltinTranslator, JsonTranslator, Translator};

#[derive(Parser)]
#[command(name = "terraglot")]
#[command(version)]
#[command(about = "Translate country names between languages")]
struct Cli {
    /// Use the built-in single-country dataset instead of a JSON file
    #[arg(long)]
    builtin: bool,

    /// JSON translation dataset (defaults to the bundled sample)
    #[arg(long, value_name = "PATH", conflicts_with = "builtin")]
    dataset: Option<PathBuf>,

    /// Tab-separated country code table (defaults to the bundled ISO 3166 table)
    #[arg(long, value_name = "PATH")]
    countries: Option<PathBuf>,

    /// Tab-separated language code table (defaults to the bundled ISO 639 table)
    #[arg(long, value_name = "PATH")]
    languages: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let countries = match &cli.countries {
        Some(path) => CountryCodes::load(path)?,
        None => CountryCodes::bundled(),
    };
    let languages = match &cli.languages {
        Some(path) => LanguageCodes::load(path)?,
        None => LanguageCodes::bundled(),
    };

    let translator: Box<dyn Translator> = if cli.builtin {
        Box::new(BuiltinTranslator)
    } else {
        match &cli.dataset {
            Some(path) => Box::new(JsonTranslator::from_path(path)?),
            None => Box::new(JsonTranslator::bundled()?),
        }
    };

    println!("{}", "terraglot".cyan().bold());
    println!(
        "{} countries in the code table, {} in the dataset\n",
        countries.num_countries(),
        translator.countries().len()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    session::run(
        translator.as_ref(),
        &countries,
        &languages,
        &mut input,
        &mut output,
    )
}

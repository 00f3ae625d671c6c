//! Command line access to a translation catalog.
//!
//! Usage:
//!   babel [--lang CODE] word ID              # Print a word
//!   babel [--lang CODE] text ID [ARGS..]     # Print a text, formatted with ARGS
//!   babel [--lang CODE] html-text ID         # Print a text escaped for HTML
//!   babel [--lang CODE] date STYLE [DATE]    # Print DATE (YYYY-MM-DD, default today)
//!   babel languages                          # List the catalog's languages
//!   babel validate                           # Check translations against the default language
//!
//! Environment variables (all optional):
//! - BABEL_CATALOG_FILE (defaults to data/catalog.json)
//! - BABEL_DEFAULT_LANGUAGE (defaults to en)
//! - BABEL_FALLBACK_TO_DEFAULT (defaults to false)

use anyhow::{bail, Context, Result};
use babel::config::Config;
use babel::i18n::{CatalogValidator, MemoryCatalog, TextId, WordId};
use babel::{Babel, DateStyle, FormatArg, Translator};
use chrono::NaiveDate;
use tracing::info;

fn print_usage() {
    println!(
        r#"
Babel - multilingual text lookup

USAGE:
    babel [--lang CODE] <COMMAND>

COMMANDS:
    word ID               Print a word
    text ID [ARGS..]      Print a text, formatted with ARGS
    html-text ID          Print a text escaped for HTML
    date STYLE [DATE]     Print DATE (YYYY-MM-DD, default today) in STYLE
                          (full, long, medium, short or 1-4)
    languages             List the catalog's languages
    validate              Check translations against the default language
    help                  Print this message

ENVIRONMENT:
    BABEL_CATALOG_FILE          Catalog path (default: data/catalog.json)
    BABEL_DEFAULT_LANGUAGE      Default language code (default: en)
    BABEL_FALLBACK_TO_DEFAULT   Fall back to the default language (default: false)
"#
    );
}

fn parse_id(value: Option<&String>, what: &str) -> Result<u32> {
    let value = value.with_context(|| format!("Missing {what} ID"))?;
    value
        .parse()
        .with_context(|| format!("Invalid {what} ID: {value}"))
}

fn word_command(babel: &Babel<MemoryCatalog>, args: &[String]) -> Result<()> {
    let id = WordId::new(parse_id(args.first(), "word")?);
    println!("{}", babel.word(id)?);
    Ok(())
}

fn text_command(babel: &Babel<MemoryCatalog>, args: &[String]) -> Result<()> {
    let id = TextId::new(parse_id(args.first(), "text")?);
    let format_args: Vec<FormatArg> = args.iter().skip(1).map(FormatArg::from).collect();
    let text = if format_args.is_empty() {
        babel.text(id)?
    } else {
        babel.text_formatted(id, &format_args)?
    };
    println!("{}", text);
    Ok(())
}

fn html_text_command(babel: &Babel<MemoryCatalog>, args: &[String]) -> Result<()> {
    let id = TextId::new(parse_id(args.first(), "text")?);
    println!("{}", babel.html_text(id)?);
    Ok(())
}

fn date_command(babel: &Babel<MemoryCatalog>, args: &[String]) -> Result<()> {
    let style: DateStyle = args.first().context("Missing date style")?.parse()?;
    let date = args
        .get(1)
        .map(|value| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {value}"))
        })
        .transpose()?;
    println!("{}", babel.formatted_date(style, date)?);
    Ok(())
}

fn languages_command(babel: &Babel<MemoryCatalog>) -> Result<()> {
    let current = babel.lan_id();
    for language in babel.catalog().registry().list_all() {
        let marker = if language.id == current { "*" } else { " " };
        println!(
            "{} {:>3}  {:<6} {:<4} {:<3} {:<8} {} ({})",
            marker,
            language.id,
            language.code,
            language.iso,
            language.direction,
            language.locale,
            language.name,
            language.native_name
        );
    }
    Ok(())
}

fn validate_command(babel: &Babel<MemoryCatalog>) -> Result<()> {
    let report = CatalogValidator::validate(babel.catalog(), babel.default_language());

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }

    if report.has_errors() {
        bail!("Catalog has {} error(s)", report.errors.len());
    }

    if report.is_clean() {
        info!("Catalog is clean");
    } else {
        info!("Catalog valid ({} warning(s))", report.warnings.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("babel=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut lang = None;
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if pos + 1 >= args.len() {
            bail!("--lang requires a language code");
        }
        lang = Some(args.remove(pos + 1));
        args.remove(pos);
    }

    let Some(command) = args.first().cloned() else {
        print_usage();
        return Ok(());
    };
    if matches!(command.as_str(), "--help" | "-h" | "help") {
        print_usage();
        return Ok(());
    }

    let config = Config::from_env()?;
    let mut babel = config.build_babel()?;

    if let Some(code) = lang {
        let id = babel.language_by_code(&code)?.id;
        babel.push_language(id)?;
    }

    let rest = &args[1..];
    match command.as_str() {
        "word" => word_command(&babel, rest),
        "text" => text_command(&babel, rest),
        "html-text" => html_text_command(&babel, rest),
        "date" => date_command(&babel, rest),
        "languages" => languages_command(&babel),
        "validate" => validate_command(&babel),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }
}

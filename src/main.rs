use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use interp::{
    config::load_tables,
    display_error,
    lexer::{
        lexer::tokenize_with,
        tokens::{format_tokens, LanguageTables, ListingFormat, TokenKind},
    },
};
use log::{debug, info};

#[derive(Debug, Parser)]
#[clap(about = "Tokenizes a program of the toy language")]
struct Options {
    /// Source file to tokenize
    file: PathBuf,
    /// TOML file overriding keyword spellings
    #[clap(short, long)]
    keywords: Option<PathBuf>,
    #[clap(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Increase log verbosity (repeatable)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Plain,
}

impl From<Format> for ListingFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => ListingFormat::Table,
            Format::Plain => ListingFormat::Plain,
        }
    }
}

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module("interp")
        .verbosity(options.verbose as usize)
        .init()
        .context("failed to initialise logging")?;

    let tables = match &options.keywords {
        Some(path) => load_tables(path)?,
        None => LanguageTables::default(),
    };

    for kind in TokenKind::KEYWORDS {
        if let Some(spelling) = tables.spelling_of(kind) {
            debug!("keyword {} spelled `{}`", kind, spelling);
        }
    }

    let file_name = options.file.to_string_lossy().to_string();
    let file_contents = read_to_string(&options.file)
        .with_context(|| format!("failed to read {}", file_name))?;

    let start = Instant::now();

    match tokenize_with(&file_contents, &tables) {
        Ok(tokens) => {
            info!("tokenized in {:?}", start.elapsed());
            print!("{}", format_tokens(&tokens, options.format.into()));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            display_error(&error, &file_contents, &file_name);
            Ok(ExitCode::FAILURE)
        }
    }
}

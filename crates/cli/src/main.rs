//! # astgen
//! Generate the C++ abstract syntax tree headers of a tree-walking interpreter.
//!
//! Reads a node catalogue (the built-in Lox one, or a JSON schema file) and writes one
//! header per family into the target directory.

#![allow(clippy::print_stdout)]

mod commands;
mod diagnostics;
mod logging;

use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{ArgAction, Parser, ValueEnum};
use commands::CommandStatus;
use owo_colors::*;
use std::{path::PathBuf, process};

const STYLES: Styles = Styles::styled()
  .usage(Style::new().italic())
  .header(AnsiColor::BrightYellow.on_default().bold());

fn coloured_header() -> String {
  format!(
    "{} {}",
    "astgen".fg::<owo_colors::colors::css::Orange>().bold(),
    concat!("(v", env!("CARGO_PKG_VERSION"), ")").italic().dimmed()
  )
}

fn about() -> String {
  format!(
    "{}\nGenerate visitor-based syntax tree headers from a node catalogue.",
    coloured_header()
  )
}

#[derive(Parser)]
#[clap(name = "astgen", version, about = about(), styles = STYLES)]
struct App {
  /// The directory to write the headers into
  directory: PathBuf,

  /// Read the node catalogue from a JSON schema file, instead of the built-in Lox catalogue
  #[clap(long)]
  schema: Option<PathBuf>,
  /// Preview the generated headers. Do not write to the directory
  #[clap(long, conflicts_with = "check")]
  dryrun: bool,
  /// Check the headers in the directory are up to date. Do not write to the directory
  #[clap(long)]
  check: bool,
  /// Log what is being generated. Repeat for more detail
  #[clap(short, long, action = ArgAction::Count)]
  verbose: u8,

  /// Namespace to declare the nodes in. Also prefixes the inclusion guards
  #[clap(
    long,
    default_value = "lox",
    value_parser = namespace,
    help_heading = "Generator Config"
  )]
  config_namespace: String,
  /// Indentation size (spaces) to use. If 0 uses tabs
  #[clap(long, default_value_t = 2, help_heading = "Generator Config")]
  config_indent_size: u16,
  /// Line ending to use
  #[clap(
    long,
    value_enum,
    default_value_t = LineEndingOption::Lf,
    help_heading = "Generator Config"
  )]
  config_line_ending: LineEndingOption,
  /// File extension of the headers
  #[clap(
    long,
    default_value = "h",
    value_parser = extension,
    help_heading = "Generator Config"
  )]
  config_extension: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum LineEndingOption {
  /// `\n`
  Lf,
  /// `\r\n`
  Crlf,
  /// `\r\n` on Windows, otherwise `\n`
  Native,
}

/// A namespace such as `lox` or `lang::ast`, where every part is a usable identifier
fn namespace(value: &str) -> Result<String, String> {
  let usable = |part: &str| {
    astgen_schema::is_identifier(part) && part.starts_with(|c: char| c.is_ascii_alphabetic())
  };

  if value.split("::").all(usable) {
    Ok(value.to_owned())
  } else {
    Err("each part of the namespace must start with a letter, only use letters, digits and `_`, and not be a C++ keyword".to_owned())
  }
}

/// A file extension without the leading dot, such as `h` or `hpp`
fn extension(value: &str) -> Result<String, String> {
  let usable = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-');

  if !value.is_empty() && value.chars().all(usable) {
    Ok(value.to_owned())
  } else {
    Err("the extension must not be empty, and only use letters, digits, `_`, `+` and `-`".to_owned())
  }
}

fn main() -> process::ExitCode {
  let args = App::parse();
  logging::init(args.verbose);

  let result = commands::generate(&args);

  match result {
    Ok(CommandStatus::Success) => process::ExitCode::from(0),
    Ok(CommandStatus::Failure) => process::ExitCode::from(1),
    Err(()) => process::ExitCode::from(2),
  }
}

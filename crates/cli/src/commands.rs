use super::diagnostics::Message;
use super::{App, LineEndingOption};

use astgen_generator::Config;
use astgen_generator::config::LineEnding;
use astgen_schema::Catalogue;

use anstream::{eprintln, print, println};
use std::{fs, path::Path};

pub enum CommandStatus {
  /// Command was successful
  Success,
  /// Command ran, but the headers on disk are out of date
  Failure,
}

fn read_file(path: &Path) -> Result<String, ()> {
  match fs::read_to_string(path) {
    Ok(file) => Ok(file),
    Err(error) => {
      eprintln!(
        "{}",
        Message::error(format!("Could not read `{}`: {error}", path.display()))
      );
      Err(())
    }
  }
}

fn load_catalogue(schema: Option<&Path>) -> Result<Catalogue, ()> {
  let catalogue = match schema {
    Some(path) => Catalogue::from_json(&read_file(path)?),
    None => astgen_schema::lox(),
  };

  match catalogue {
    Ok(catalogue) => {
      tracing::info!(families = catalogue.families().len(), "loaded node catalogue");
      Ok(catalogue)
    }
    Err(error) => {
      eprintln!("{}", Message::from(&error));
      Err(())
    }
  }
}

fn config(args: &App) -> Config {
  Config {
    namespace: args.config_namespace.clone(),
    extension: args.config_extension.clone(),
    indentation: args.config_indent_size.into(),
    line_ending: match args.config_line_ending {
      LineEndingOption::Lf => LineEnding::LineFeed,
      LineEndingOption::Crlf => LineEnding::CarriageReturnLineFeed,
      LineEndingOption::Native => LineEnding::Native,
    },
  }
}

pub fn generate(args: &App) -> Result<CommandStatus, ()> {
  let catalogue = load_catalogue(args.schema.as_deref())?;
  let artifacts = astgen_generator::generate(&catalogue, &config(args));

  if args.dryrun {
    for artifact in &artifacts {
      println!("╭─[{}]", artifact.file_name);
      print!("{}", artifact.contents);
      println!("╯");
    }
    return Ok(CommandStatus::Success);
  }

  if args.check {
    let drift = match astgen_generator::check(&artifacts, &args.directory) {
      Ok(drift) => drift,
      Err(error) => {
        eprintln!("{}", Message::from(&error));
        return Err(());
      }
    };

    for header in &drift {
      eprintln!("{}", Message::from(header));
    }

    return if drift.is_empty() {
      Ok(CommandStatus::Success)
    } else {
      Ok(CommandStatus::Failure)
    };
  }

  if let Err(error) = astgen_generator::write(&artifacts, &args.directory) {
    eprintln!("{}", Message::from(&error));
    return Err(());
  }

  Ok(CommandStatus::Success)
}

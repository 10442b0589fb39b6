use astgen_generator::{Drift, WriteError};
use astgen_schema::SchemaError;
use owo_colors::OwoColorize;
use std::fmt;

#[derive(Debug)]
pub enum Severity {
  Error,
  Warning,
}
pub struct Message {
  pub title: String,
  pub body: String,
  pub hint: Option<String>,
  pub severity: Severity,
}
impl Message {
  pub fn error(message: String) -> Self {
    Self {
      title: message,
      body: String::new(),
      hint: None,
      severity: Severity::Error,
    }
  }
}
impl fmt::Display for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.severity {
      Severity::Error => write!(f, "{}", "✕ Error".bold().red()),
      Severity::Warning => write!(f, "{}", "⚠ Warning".bold().yellow()),
    }?;
    writeln!(f, "{} {}", ":".bold(), &self.title.bold())?;

    if !self.body.is_empty() {
      writeln!(f, "{}", &self.body)?;
    }

    if let Some(hint) = &self.hint {
      writeln!(f, "{} {}", "hint:".italic().cyan(), hint)?;
    }

    Ok(())
  }
}
impl From<&SchemaError> for Message {
  fn from(error: &SchemaError) -> Self {
    Self {
      title: error.title().to_owned(),
      body: error.to_string(),
      hint: error.suggestion(),
      severity: Severity::Error,
    }
  }
}
impl From<&WriteError> for Message {
  fn from(error: &WriteError) -> Self {
    Self {
      title: error.title().to_owned(),
      body: error.to_string(),
      hint: None,
      severity: Severity::Error,
    }
  }
}
impl From<&Drift> for Message {
  fn from(drift: &Drift) -> Self {
    let (title, body) = match drift {
      Drift::Missing(path) => ("Header Missing", format!("`{}` does not exist", path.display())),
      Drift::Modified(path) => (
        "Header Out of Date",
        format!("`{}` does not match the node catalogue", path.display()),
      ),
    };

    Self {
      title: title.to_owned(),
      body,
      hint: Some("run without `--check` to regenerate the headers".to_owned()),
      severity: Severity::Warning,
    }
  }
}

//! The configuration options for the generator
use std::fmt;

/// Configuration for the generated headers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  /// The namespace every node type is declared in. Also prefixes the inclusion guards
  pub namespace: String,
  /// The file extension of the headers, without the dot
  pub extension: String,
  /// The indentation to use for nested declarations
  pub indentation: Indentation,
  /// The line ending to use
  pub line_ending: LineEnding,
}
impl Default for Config {
  fn default() -> Self {
    Self {
      namespace: "lox".to_owned(),
      extension: "h".to_owned(),
      indentation: Indentation::Space(2),
      line_ending: LineEnding::LineFeed,
    }
  }
}

/// The indentation to use when printing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indentation {
  /// Use this number of spaces for indentation
  Space(u16),
  /// Use tabs for indentation
  Tab,
}
impl From<u16> for Indentation {
  /// The number of spaces to use for indentation. If 0 uses tabs.
  fn from(n: u16) -> Self {
    if n == 0 {
      Self::Tab
    } else {
      Self::Space(n)
    }
  }
}
impl fmt::Display for Indentation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Space(n) => (0..*n).try_for_each(|_| write!(f, " ")),
      Self::Tab => write!(f, "\t"),
    }
  }
}

/// The type of line endings to use for the file
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum LineEnding {
  ///  Line Feed only (\n), common on Linux and macOS as well as inside git repos
  #[default]
  LineFeed,

  /// Carriage Return + Line Feed characters (\r\n), common on Windows
  CarriageReturnLineFeed,

  /// Line endings will be converted to `\n` on Unix and `\r\n` on Windows.
  Native,
}
impl LineEnding {
  #[inline]
  pub(crate) const fn as_str(self) -> &'static str {
    match self {
      LineEnding::LineFeed => "\n",
      LineEnding::CarriageReturnLineFeed => "\r\n",

      #[cfg(not(target_os = "windows"))]
      LineEnding::Native => "\n",
      #[cfg(target_os = "windows")]
      LineEnding::Native => "\r\n",
    }
  }
}

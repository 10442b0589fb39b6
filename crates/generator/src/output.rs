//! Writing generated headers to disk, and checking headers on disk are up to date.

use crate::assembler::Artifact;
use std::{
  fs, io,
  path::{Path, PathBuf},
};
use thiserror::Error;

/// A problem persisting the generated headers
#[derive(Debug, Error)]
pub enum WriteError {
  /// The target directory couldn't be created
  #[error("could not create directory `{}`: {source}", path.display())]
  CreateDirectory {
    /// The directory
    path: PathBuf,
    /// The underlying problem
    source: io::Error,
  },
  /// A header couldn't be written
  #[error("could not write `{}`: {source}", path.display())]
  Write {
    /// The file being written
    path: PathBuf,
    /// The underlying problem
    source: io::Error,
  },
  /// An existing header couldn't be read to compare against
  #[error("could not read `{}`: {source}", path.display())]
  Read {
    /// The file being read
    path: PathBuf,
    /// The underlying problem
    source: io::Error,
  },
}
impl WriteError {
  /// The title of the error message
  #[must_use]
  pub fn title(&self) -> &'static str {
    match self {
      Self::CreateDirectory { .. } => "Cannot Create Directory",
      Self::Write { .. } => "Cannot Write Header",
      Self::Read { .. } => "Cannot Read Header",
    }
  }
}

/// How a header on disk differs from the generated one
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Drift {
  /// The header doesn't exist
  Missing(PathBuf),
  /// The header exists, but has different contents
  Modified(PathBuf),
}
impl Drift {
  /// The path of the header
  #[must_use]
  pub fn path(&self) -> &Path {
    match self {
      Self::Missing(path) | Self::Modified(path) => path,
    }
  }
}

/// Write each header into the directory, creating the directory if needed.
///
/// Each header is written whole, but if one fails the headers before it stay written.
///
/// # Errors
/// If the directory can't be created, or a header can't be written
pub fn write(artifacts: &[Artifact], directory: &Path) -> Result<Vec<PathBuf>, WriteError> {
  fs::create_dir_all(directory).map_err(|source| WriteError::CreateDirectory {
    path: directory.to_owned(),
    source,
  })?;

  let mut written = Vec::with_capacity(artifacts.len());
  for artifact in artifacts {
    let path = directory.join(&artifact.file_name);
    fs::write(&path, &artifact.contents).map_err(|source| WriteError::Write {
      path: path.clone(),
      source,
    })?;

    tracing::info!(path = %path.display(), "wrote header");
    written.push(path);
  }

  Ok(written)
}

/// Compare the headers in the directory against the generated ones, without writing anything
///
/// # Errors
/// If a header exists but can't be read
pub fn check(artifacts: &[Artifact], directory: &Path) -> Result<Vec<Drift>, WriteError> {
  let mut drift = Vec::new();

  for artifact in artifacts {
    let path = directory.join(&artifact.file_name);

    match fs::read_to_string(&path) {
      Ok(existing) if existing == artifact.contents => {
        tracing::debug!(path = %path.display(), "header is up to date");
      }
      Ok(_) => drift.push(Drift::Modified(path)),
      Err(error) if error.kind() == io::ErrorKind::NotFound => drift.push(Drift::Missing(path)),
      Err(error) if error.kind() == io::ErrorKind::InvalidData => {
        drift.push(Drift::Modified(path));
      }
      Err(source) => return Err(WriteError::Read { path, source }),
    }
  }

  Ok(drift)
}

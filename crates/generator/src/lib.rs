//! # Generator
//! Generate C++ abstract syntax tree headers from a node catalogue.
//!
//! Each family in the catalogue becomes one self-contained header, holding:
//! - an abstract base type, with an `accept` entry point per result type
//! - a generic `Visitor<T>`, with one dispatch method per variant
//! - a concrete node type per variant, with a constructor taking its fields in order
//!
//! Families are generated in catalogue order, and a header includes the headers of the
//! earlier families it holds nodes of. Generation is deterministic: the same catalogue and
//! config always produce the same bytes.

#![deny(unsafe_code)]

mod assembler;
pub mod config;
mod names;
pub mod node;
mod output;
pub mod visitor;
mod writer;

#[cfg(test)]
mod test;

use astgen_schema::Catalogue;

/// Generate the header of every family in the catalogue, in catalogue order.
///
/// The catalogue has already been validated, so generation can't fail.
///
/// # Examples
/// ```
/// use astgen_generator::{Config, generate};
///
/// let catalogue = astgen_schema::lox().unwrap();
/// let artifacts = generate(&catalogue, &Config::default());
///
/// assert_eq!(artifacts[0].file_name, "Expr.h");
/// assert_eq!(artifacts[1].file_name, "Stmt.h");
/// assert_eq!(artifacts[1].dependencies, ["Expr.h"]);
/// ```
#[must_use]
pub fn generate(catalogue: &Catalogue, config: &Config) -> Vec<Artifact> {
  catalogue
    .families()
    .map(|family| {
      tracing::debug!(
        family = family.basename(),
        variants = family.len(),
        "generating family"
      );
      assembler::assemble(family, config)
    })
    .collect()
}

pub use assembler::Artifact;
pub use config::Config;
pub use output::{Drift, WriteError, check, write};

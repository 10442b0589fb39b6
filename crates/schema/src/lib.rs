//! # Schema
//! The node catalogue which abstract syntax tree types are generated from.
//!
//! A catalogue is an ordered list of families (e.g. expressions, then statements). Each family
//! has an ordered list of variants, and each variant an ordered list of typed fields. Orders
//! are kept exactly as authored, as they decide member layout and constructor parameters.
//!
//! Catalogues are authored as [`FamilyDeclaration`]s, with field types written as text. Loading
//! validates the declarations and resolves the types, after which the catalogue is immutable.

#![deny(unsafe_code)]

pub mod builtin;
mod catalogue;
mod declaration;
mod error;
mod types;


pub use catalogue::{Catalogue, Contract, Family, FieldSpec, NodeVariant};
pub use declaration::{FamilyDeclaration, SchemaDocument, VariantDeclaration};
pub use error::SchemaError;
pub use types::{Primitive, TypeReference, is_identifier};

/// Load the built-in Lox catalogue
///
/// # Examples
/// ```
/// let catalogue = astgen_schema::lox().unwrap();
///
/// let basenames = catalogue.families().map(|f| f.basename()).collect::<Vec<_>>();
/// assert_eq!(basenames, ["Expr", "Stmt"]);
/// ```
///
/// # Errors
/// Never for the built-in declarations, but they go through the same validation as any other
pub fn lox() -> Result<Catalogue, SchemaError> {
  Catalogue::load(builtin::lox())
}

//! # Declarations
//!
//! The authored form of a catalogue, as it is written by hand or read from a schema file.
//! Field types are still text here, they are resolved when the catalogue is loaded.

use serde::Deserialize;

/// A schema document, the top level of a JSON schema file
///
/// ```json
/// { "families": [ { "basename": "Expr", "result": "ExprResult", "variants": [] } ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
  /// The families, in the order they are generated
  pub families: Vec<FamilyDeclaration>,
}

/// A family of node variants, as authored
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilyDeclaration {
  /// The name of the abstract base type
  pub basename: String,
  /// The result type visits produce. If missing, visits only have effects
  #[serde(default)]
  pub result: Option<String>,
  /// Can nodes also be visited to render them as text?
  #[serde(default)]
  pub render: bool,
  /// The variants, in declaration order
  #[serde(default)]
  pub variants: Vec<VariantDeclaration>,
}
impl FamilyDeclaration {
  /// A family whose visits produce a value of the `result` type
  #[must_use]
  pub fn value(basename: &str, result: &str) -> Self {
    Self {
      basename: basename.to_owned(),
      result: Some(result.to_owned()),
      render: false,
      variants: Vec::new(),
    }
  }

  /// A family whose visits only have effects
  #[must_use]
  pub fn effect(basename: &str) -> Self {
    Self {
      basename: basename.to_owned(),
      result: None,
      render: false,
      variants: Vec::new(),
    }
  }

  /// Also allow the family to be visited to render text
  #[must_use]
  pub fn rendered(mut self) -> Self {
    self.render = true;
    self
  }

  /// Add a variant with the given `(type, name)` fields
  #[must_use]
  pub fn variant<const N: usize>(mut self, name: &str, fields: [(&str, &str); N]) -> Self {
    self.variants.push(VariantDeclaration {
      name: name.to_owned(),
      fields: fields
        .into_iter()
        .map(|(type_, name)| (type_.to_owned(), name.to_owned()))
        .collect(),
    });
    self
  }
}

/// A single node variant, as authored
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDeclaration {
  /// The name of the concrete node type
  pub name: String,
  /// `(type, name)` pairs, in member order
  #[serde(default)]
  pub fields: Vec<(String, String)>,
}

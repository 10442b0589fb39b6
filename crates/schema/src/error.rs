use thiserror::Error;

/// A problem found while loading a node catalogue
#[derive(Debug, Error)]
pub enum SchemaError {
  /// A family with no variants, so nothing to dispatch to
  #[error("family `{family}` declares no variants")]
  EmptyFamily {
    /// The family basename
    family: String,
  },
  /// Two families with the same basename
  #[error("family `{family}` is declared more than once")]
  DuplicateFamily {
    /// The family basename
    family: String,
  },
  /// Two variants with the same name in a family
  #[error("variant `{variant}` is declared more than once in family `{family}`")]
  DuplicateVariant {
    /// The family basename
    family: String,
    /// The repeated variant name
    variant: String,
  },
  /// Two fields with the same name in a variant
  #[error("field `{field}` is declared more than once in `{family}::{variant}`")]
  DuplicateField {
    /// The family basename
    family: String,
    /// The variant name
    variant: String,
    /// The repeated field name
    field: String,
  },
  /// A name which is already taken in the namespace the nodes are generated into
  #[error("`{name}` in family `{family}` is already used by {previous}")]
  NameClash {
    /// The family basename
    family: String,
    /// The repeated name
    name: String,
    /// What the name was first used for
    previous: String,
  },
  /// A field type which is not one of the recognised kinds
  #[error("field `{field}` in `{family}::{variant}` has unknown type `{type_name}`")]
  UnknownType {
    /// The family basename
    family: String,
    /// The variant name
    variant: String,
    /// The field name
    field: String,
    /// The type as written in the schema
    type_name: String,
  },
  /// A field referring to a family which is only generated afterwards
  #[error(
    "field `{field}` in `{family}::{variant}` refers to `{referenced}`, which is declared after `{family}`"
  )]
  ForwardReference {
    /// The family basename
    family: String,
    /// The variant name
    variant: String,
    /// The field name
    field: String,
    /// The family referred to
    referenced: String,
  },
  /// A name which can't be used as an identifier
  #[error("`{name}` in family `{family}` is not a valid identifier")]
  InvalidIdentifier {
    /// The family basename
    family: String,
    /// The offending name
    name: String,
  },
  /// A schema document which couldn't be parsed
  #[error("schema is not well formed: {0}")]
  Malformed(#[from] serde_json::Error),
}
impl SchemaError {
  /// The title of the error message
  #[must_use]
  pub fn title(&self) -> &'static str {
    match self {
      Self::EmptyFamily { .. } => "Empty Family",
      Self::DuplicateFamily { .. } => "Duplicate Family",
      Self::DuplicateVariant { .. } => "Duplicate Variant",
      Self::DuplicateField { .. } => "Duplicate Field",
      Self::NameClash { .. } => "Name Clash",
      Self::UnknownType { .. } => "Unknown Type",
      Self::ForwardReference { .. } => "Forward Family Reference",
      Self::InvalidIdentifier { .. } => "Invalid Identifier",
      Self::Malformed(_) => "Malformed Schema",
    }
  }

  /// A suggestion for how to fix the error
  #[must_use]
  pub fn suggestion(&self) -> Option<String> {
    match self {
      Self::UnknownType { .. } => Some(
        "types are `bool`, `number`, `string`, `null`, `Token`, a family name, or `[Family]` for a list of the family's own nodes"
          .to_owned(),
      ),
      Self::InvalidIdentifier { .. } => Some(
        "names use letters, digits and `_`, don't start with a digit, and can't be a C++ keyword"
          .to_owned(),
      ),
      Self::ForwardReference { referenced, .. } => {
        Some(format!("declare `{referenced}` before the families which use it"))
      }
      _ => None,
    }
  }
}

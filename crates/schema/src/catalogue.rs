//! # Catalogue
//!
//! The validated, immutable node catalogue which the emitters work from.

use crate::{
  declaration::{FamilyDeclaration, SchemaDocument, VariantDeclaration},
  error::SchemaError,
  types::{TypeName, TypeReference, is_identifier},
};
use indexmap::{IndexMap, map::Entry};
use rustc_hash::{FxHashMap, FxHashSet};
use thin_vec::ThinVec;

/// What a visit to a node of the family produces
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Contract {
  /// Visits are only run for their side effects
  Effect,
  /// Visits produce a value of the named result type
  Value {
    /// The name of the result type
    result: String,
  },
}

/// A single field of a node variant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
  /// How the field is stored and passed
  pub type_: TypeReference,
  /// The name of the field, unique within the variant
  pub name: String,
}

/// One concrete alternative of a family
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeVariant {
  name: String,
  fields: ThinVec<FieldSpec>,
}
impl NodeVariant {
  /// The name of the concrete node type
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// The fields, in declaration order
  #[must_use]
  pub fn fields(&self) -> &[FieldSpec] {
    &self.fields
  }
}

/// A group of node variants sharing an abstract base and a result contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Family {
  basename: String,
  contract: Contract,
  renders_text: bool,
  variants: IndexMap<String, NodeVariant>,
}
impl Family {
  /// The name of the abstract base type
  #[must_use]
  pub fn basename(&self) -> &str {
    &self.basename
  }

  /// What visiting a node of this family produces
  #[must_use]
  pub fn contract(&self) -> &Contract {
    &self.contract
  }

  /// Can nodes also be visited to render them as text?
  #[must_use]
  pub fn renders_text(&self) -> bool {
    self.renders_text
  }

  /// The variants, in declaration order
  pub fn variants(&self) -> impl ExactSizeIterator<Item = &NodeVariant> {
    self.variants.values()
  }

  /// Look up a variant by name
  #[must_use]
  pub fn variant(&self, name: &str) -> Option<&NodeVariant> {
    self.variants.get(name)
  }

  /// The number of variants in the family
  #[must_use]
  pub fn len(&self) -> usize {
    self.variants.len()
  }

  /// Does the family have no variants? Never true for a loaded family
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.variants.is_empty()
  }

  /// The other families whose nodes are held by this family, in order of first use
  #[must_use]
  pub fn references(&self) -> Vec<&str> {
    let mut seen = FxHashSet::default();

    self
      .fields()
      .filter_map(|field| field.type_.foreign_family())
      .filter(|family| seen.insert(*family))
      .collect()
  }

  /// Does any variant hold a token?
  #[must_use]
  pub fn uses_token(&self) -> bool {
    self.fields().any(|field| field.type_ == TypeReference::Token)
  }

  fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
    self.variants().flat_map(|variant| variant.fields.iter())
  }
}

/// An ordered set of families, validated and ready to generate
///
/// Families are in dependency order, a family can only hold nodes of families before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalogue {
  families: Vec<Family>,
}
impl Catalogue {
  /// Validate the declarations, and resolve them into a catalogue
  ///
  /// # Errors
  /// If any family, variant, or field is malformed. Nothing is returned for any family
  /// if a single one is malformed.
  pub fn load(
    declarations: impl IntoIterator<Item = FamilyDeclaration>,
  ) -> Result<Self, SchemaError> {
    let declarations = declarations.into_iter().collect::<Vec<_>>();
    let mut loader = Loader::new();

    for (position, declaration) in declarations.iter().enumerate() {
      loader.declare_family(declaration, position)?;
    }

    let families = declarations
      .iter()
      .enumerate()
      .map(|(position, declaration)| loader.family(declaration, position))
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Self { families })
  }

  /// Parse a JSON schema document, then validate it like [`Catalogue::load`]
  ///
  /// # Errors
  /// If the document is not valid JSON of the right shape, or it describes a malformed catalogue
  pub fn from_json(source: &str) -> Result<Self, SchemaError> {
    let document = serde_json::from_str::<SchemaDocument>(source)?;
    Self::load(document.families)
  }

  /// The families, in dependency order
  pub fn families(&self) -> impl ExactSizeIterator<Item = &Family> {
    self.families.iter()
  }

  /// Look up a family by its basename
  #[must_use]
  pub fn family(&self, basename: &str) -> Option<&Family> {
    self.families.iter().find(|family| family.basename == basename)
  }
}

struct Loader {
  /// Where each family is in the dependency order
  positions: FxHashMap<String, usize>,
  /// Names which are already taken in the namespace the nodes are generated into, and what
  /// took them
  taken: FxHashMap<String, String>,
  /// Types named in constructor parameters, which a parameter can't shadow
  parameter_types: FxHashSet<String>,
}
impl Loader {
  fn new() -> Self {
    let mut taken = FxHashMap::default();
    taken.insert(TypeReference::TOKEN.to_owned(), "the token type".to_owned());
    taken.insert("std".to_owned(), "the standard library namespace".to_owned());

    Self {
      positions: FxHashMap::default(),
      taken,
      parameter_types: [TypeReference::TOKEN, "std"].map(str::to_owned).into_iter().collect(),
    }
  }

  /// Take a name in the generated namespace, failing if something already has it
  fn claim(&mut self, family: &str, name: &str, owner: String) -> Result<(), SchemaError> {
    if let Some(previous) = self.taken.get(name) {
      return Err(SchemaError::NameClash {
        family: family.to_owned(),
        name: name.to_owned(),
        previous: previous.clone(),
      });
    }

    self.taken.insert(name.to_owned(), owner);
    Ok(())
  }

  fn declare_family(
    &mut self,
    declaration: &FamilyDeclaration,
    position: usize,
  ) -> Result<(), SchemaError> {
    let family = &declaration.basename;
    check_identifier(family, family)?;
    if let Some(result) = &declaration.result {
      check_identifier(family, result)?;
    }

    if self.positions.insert(family.clone(), position).is_some() {
      return Err(SchemaError::DuplicateFamily {
        family: family.clone(),
      });
    }

    self.claim(family, family, format!("family `{family}`"))?;
    for (name, kind) in [(format!("{family}Ptr"), "handle"), (format!("{family}List"), "list")] {
      self.claim(family, &name, format!("the {kind} type of `{family}`"))?;
      self.parameter_types.insert(name);
    }
    self.claim(
      family,
      &family.to_lowercase(),
      format!("the visitor namespace of `{family}`"),
    )?;
    if let Some(result) = &declaration.result {
      self.claim(family, result, format!("the result type of `{family}`"))?;
    }

    Ok(())
  }

  fn family(
    &mut self,
    declaration: &FamilyDeclaration,
    position: usize,
  ) -> Result<Family, SchemaError> {
    let basename = &declaration.basename;

    if declaration.variants.is_empty() {
      return Err(SchemaError::EmptyFamily {
        family: basename.clone(),
      });
    }

    let mut variants = IndexMap::with_capacity(declaration.variants.len());
    for variant in &declaration.variants {
      check_identifier(basename, &variant.name)?;

      match variants.entry(variant.name.clone()) {
        Entry::Occupied(_) => {
          return Err(SchemaError::DuplicateVariant {
            family: basename.clone(),
            variant: variant.name.clone(),
          });
        }
        Entry::Vacant(entry) => {
          self.claim(
            basename,
            &variant.name,
            format!("`{basename}::{}`", variant.name),
          )?;
          entry.insert(self.variant(basename, variant, position)?);
        }
      }
    }

    Ok(Family {
      basename: basename.clone(),
      contract: match &declaration.result {
        Some(result) => Contract::Value {
          result: result.clone(),
        },
        None => Contract::Effect,
      },
      renders_text: declaration.render,
      variants,
    })
  }

  fn variant(
    &self,
    family: &str,
    declaration: &VariantDeclaration,
    position: usize,
  ) -> Result<NodeVariant, SchemaError> {
    let mut names = FxHashSet::default();
    let mut fields = ThinVec::with_capacity(declaration.fields.len());

    for (type_name, name) in &declaration.fields {
      check_identifier(family, name)?;
      if self.parameter_types.contains(name) {
        let previous = self.taken.get(name).cloned().unwrap_or_default();
        return Err(SchemaError::NameClash {
          family: family.to_owned(),
          name: name.clone(),
          previous,
        });
      }
      if !names.insert(name.as_str()) {
        return Err(SchemaError::DuplicateField {
          family: family.to_owned(),
          variant: declaration.name.clone(),
          field: name.clone(),
        });
      }

      let type_ = self
        .resolve(type_name, family, position)
        .map_err(|unresolved| match unresolved {
          Unresolved::Unknown => SchemaError::UnknownType {
            family: family.to_owned(),
            variant: declaration.name.clone(),
            field: name.clone(),
            type_name: type_name.clone(),
          },
          Unresolved::Later(referenced) => SchemaError::ForwardReference {
            family: family.to_owned(),
            variant: declaration.name.clone(),
            field: name.clone(),
            referenced,
          },
        })?;

      fields.push(FieldSpec {
        type_,
        name: name.clone(),
      });
    }

    Ok(NodeVariant {
      name: declaration.name.clone(),
      fields,
    })
  }

  fn resolve(
    &self,
    type_name: &str,
    family: &str,
    position: usize,
  ) -> Result<TypeReference, Unresolved> {
    match TypeName::parse(type_name) {
      TypeName::Primitive(primitive) => Ok(TypeReference::Primitive(primitive)),
      TypeName::Token => Ok(TypeReference::Token),
      TypeName::Node(name) if name == family => Ok(TypeReference::Owned),
      TypeName::Node(name) => match self.positions.get(name) {
        Some(&declared) if declared < position => Ok(TypeReference::OwnedForeign(name.to_owned())),
        Some(_) => Err(Unresolved::Later(name.to_owned())),
        None => Err(Unresolved::Unknown),
      },
      TypeName::List(name) if name == family => Ok(TypeReference::OwnedList),
      TypeName::List(_) | TypeName::Unknown => Err(Unresolved::Unknown),
    }
  }
}

enum Unresolved {
  Unknown,
  Later(String),
}

fn check_identifier(family: &str, name: &str) -> Result<(), SchemaError> {
  if is_identifier(name) {
    Ok(())
  } else {
    Err(SchemaError::InvalidIdentifier {
      family: family.to_owned(),
      name: name.to_owned(),
    })
  }
}

//! # Node Emitter
//!
//! Turns a variant into the definition of its concrete node type.
//!
//! Members are laid out in field order, and the constructor takes one parameter per field in
//! the same order. Values (primitives and tokens) are copied in. Owned nodes are moved in, so
//! the node takes sole ownership and the caller's handle is left empty.
//!
//! A variant whose only field is a list of owned nodes (e.g. a block of statements) takes the
//! already built list as a whole, by rvalue reference.

use crate::{
  names,
  writer::{Emit, SourceWriter},
};
use astgen_schema::{Family, NodeVariant, TypeReference};

/// How a constructor parameter is accepted and stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Passing {
  /// Taken by value, and copied into the member
  Copy,
  /// Taken by value, and moved into the member
  Move,
  /// The whole collection is taken by rvalue reference, and moved into the member
  MoveWhole,
}

/// A data member of a node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
  /// The type the member is stored as
  pub type_: String,
  /// The name of the member
  pub name: String,
}

/// A constructor parameter, and the member it initialises
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
  /// The type of the parameter
  pub type_: String,
  /// The name of the parameter
  pub name: String,
  /// The member the parameter initialises
  pub member: String,
  /// How the parameter is accepted
  pub passing: Passing,
}
impl Parameter {
  fn declaration(&self) -> String {
    match self.passing {
      Passing::Copy | Passing::Move => format!("{} {}", self.type_, self.name),
      Passing::MoveWhole => format!("{} &&{}", self.type_, self.name),
    }
  }

  fn initialiser(&self) -> String {
    match self.passing {
      Passing::Copy => format!("{}({})", self.member, self.name),
      Passing::Move | Passing::MoveWhole => format!("{}(std::move({}))", self.member, self.name),
    }
  }
}

/// An entry point which dispatches the node to a visitor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accept {
  /// The result type of the visit
  pub result: String,
  /// The visitor instantiation accepted
  pub visitor: String,
  /// The method on the visitor the node is forwarded to
  pub dispatch: String,
}

/// The layout of a concrete node type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDefinition {
  /// The name of the node type
  pub name: String,
  /// The abstract base the node derives from
  pub base: String,
  /// The data members, in field order
  pub members: Vec<Member>,
  /// The constructor parameters, in field order
  pub parameters: Vec<Parameter>,
  /// The dispatch entry points, one per result type
  pub accepts: Vec<Accept>,
}
impl NodeDefinition {
  /// Derive the node definition of a variant of the family
  #[must_use]
  pub fn new(variant: &NodeVariant, family: &Family) -> Self {
    let basename = family.basename();
    let sole_list = is_sole_list(variant);

    let members = variant
      .fields()
      .iter()
      .map(|field| Member {
        type_: names::field_type(&field.type_, basename),
        name: names::member(&field.name),
      })
      .collect::<Vec<_>>();

    let parameters = variant
      .fields()
      .iter()
      .zip(&members)
      .map(|(field, member)| Parameter {
        type_: member.type_.clone(),
        name: field.name.clone(),
        member: member.name.clone(),
        passing: match &field.type_ {
          TypeReference::OwnedList if sole_list => Passing::MoveWhole,
          type_ if type_.is_owned() => Passing::Move,
          _ => Passing::Copy,
        },
      })
      .collect();

    let dispatch = names::dispatch_method(variant.name(), basename);
    let accepts = names::results(family)
      .into_iter()
      .map(|result| Accept {
        result: result.to_owned(),
        visitor: names::visitor(basename, result),
        dispatch: dispatch.clone(),
      })
      .collect();

    Self {
      name: variant.name().to_owned(),
      base: basename.to_owned(),
      members,
      parameters,
      accepts,
    }
  }
}

/// Is the variant built from a single, already assembled, list of nodes?
fn is_sole_list(variant: &NodeVariant) -> bool {
  matches!(variant.fields(), [field] if field.type_ == TypeReference::OwnedList)
}

impl Emit for NodeDefinition {
  fn emit(&self, writer: &mut SourceWriter) {
    writer.line(format!("struct {} : {} {{", self.name, self.base));
    writer.indented(|writer| {
      for member in &self.members {
        writer.line(format!("{} {};", member.type_, member.name));
      }
      if !self.members.is_empty() {
        writer.blank();
      }

      let parameters = self
        .parameters
        .iter()
        .map(Parameter::declaration)
        .collect::<Vec<_>>()
        .join(", ");

      if self.parameters.is_empty() {
        writer.line(format!("{}() {{}}", self.name));
      } else {
        writer.line(format!("{}({parameters})", self.name));

        let last = self.parameters.len() - 1;
        for (i, parameter) in self.parameters.iter().enumerate() {
          let leader = if i == 0 { ": " } else { "  " };
          let trailer = if i == last { " {}" } else { "," };
          writer.continuation(format!("{leader}{}{trailer}", parameter.initialiser()));
        }
      }

      for accept in &self.accepts {
        writer.blank();
        writer.line(format!(
          "{} accept({} &v) override {{",
          accept.result, accept.visitor
        ));
        writer.indented(|writer| writer.line(format!("return v.{}(*this);", accept.dispatch)));
        writer.line("}");
      }
    });
    writer.line("};");
  }
}

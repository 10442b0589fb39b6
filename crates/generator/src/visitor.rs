//! # Visitor Emitter
//!
//! The generic visitor interface of a family, with one dispatch method per variant.

use crate::{
  names,
  writer::{Emit, SourceWriter},
};
use astgen_schema::Family;

/// A pure virtual method on the visitor, handling one variant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchMethod {
  /// The name of the method
  pub name: String,
  /// The variant the method receives
  pub variant: String,
}

/// The visitor interface of a family, generic over the result type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitorInterface {
  /// The namespace the visitor is declared in
  pub namespace: String,
  /// One method per variant, in variant order
  pub methods: Vec<DispatchMethod>,
}
impl VisitorInterface {
  /// Derive the visitor interface of the family
  #[must_use]
  pub fn new(family: &Family) -> Self {
    let methods = family
      .variants()
      .map(|variant| DispatchMethod {
        name: names::dispatch_method(variant.name(), family.basename()),
        variant: variant.name().to_owned(),
      })
      .collect();

    Self {
      namespace: names::visitor_namespace(family.basename()),
      methods,
    }
  }

  /// Declare the visitor template without defining it
  pub(crate) fn emit_declaration(&self, writer: &mut SourceWriter) {
    self.in_namespace(writer, |writer| {
      writer.line("template <typename T>");
      writer.line("struct Visitor;");
    });
  }

  fn in_namespace(&self, writer: &mut SourceWriter, body: impl FnOnce(&mut SourceWriter)) {
    writer.line(format!("namespace {} {{", self.namespace));
    writer.blank();
    body(writer);
    writer.blank();
    writer.line(format!("}} // namespace {}", self.namespace));
  }
}

impl Emit for VisitorInterface {
  fn emit(&self, writer: &mut SourceWriter) {
    self.in_namespace(writer, |writer| {
      writer.line("template <typename T>");
      writer.line("struct Visitor {");
      writer.indented(|writer| {
        for method in &self.methods {
          writer.line(format!(
            "virtual T {}({} &) = 0;",
            method.name, method.variant
          ));
        }
        writer.line("virtual ~Visitor() = default;");
      });
      writer.line("};");
    });
  }
}

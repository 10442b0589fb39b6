//! # Names
//!
//! Every name in a generated header is derived here, so a node's dispatch call and the
//! visitor's declaration are always built from the same function.

use crate::config::Config;
use astgen_schema::{Contract, Family, Primitive, TypeReference};

/// The result type of text rendering visits
pub(crate) const RENDERED: &str = "std::string";

/// The dispatch method for a variant, e.g. `visitBinaryExpr`
pub(crate) fn dispatch_method(variant: &str, family: &str) -> String {
  format!("visit{variant}{family}")
}

/// The namespace holding a family's visitor, e.g. `expr`
pub(crate) fn visitor_namespace(family: &str) -> String {
  family.to_lowercase()
}

/// A visitor instantiated for a result type, e.g. `expr::Visitor<ExprResult>`
pub(crate) fn visitor(family: &str, result: &str) -> String {
  format!("{}::Visitor<{result}>", visitor_namespace(family))
}

/// The owning handle to a node of the family, e.g. `ExprPtr`
pub(crate) fn handle(family: &str) -> String {
  format!("{family}Ptr")
}

/// An ordered collection of owning handles, e.g. `StmtList`
pub(crate) fn list(family: &str) -> String {
  format!("{family}List")
}

/// The member a field is stored in
pub(crate) fn member(field: &str) -> String {
  format!("{field}_")
}

/// The file a family's header is written to, e.g. `Expr.h`
pub(crate) fn header(family: &str, config: &Config) -> String {
  format!("{family}.{}", config.extension)
}

/// The inclusion guard of a family's header, e.g. `LOX_EXPR_H_`
///
/// Anything which can't be in a macro name becomes a single `_`, and the guard never starts
/// with `_` or contains `__`, as those names are reserved.
pub(crate) fn guard(family: &str, config: &Config) -> String {
  let name = format!("{}_{family}_{}", config.namespace, config.extension);

  let mut guard = String::with_capacity(name.len() + 1);
  for c in name.chars() {
    if c.is_ascii_alphanumeric() {
      guard.push(c.to_ascii_uppercase());
    } else if !guard.is_empty() && !guard.ends_with('_') {
      guard.push('_');
    }
  }
  if !guard.ends_with('_') {
    guard.push('_');
  }

  guard
}

/// The result types a family's nodes can be visited for. The family's contract comes first
pub(crate) fn results(family: &Family) -> Vec<&str> {
  let primary = match family.contract() {
    Contract::Effect => "void",
    Contract::Value { result } => result.as_str(),
  };

  if family.renders_text() {
    vec![primary, RENDERED]
  } else {
    vec![primary]
  }
}

/// The type a primitive is stored as
pub(crate) fn primitive(primitive: Primitive) -> &'static str {
  match primitive {
    Primitive::Boolean => "bool",
    Primitive::Number => "double",
    Primitive::Text => "std::string",
    Primitive::Null => "std::nullptr_t",
  }
}

/// The type a field is stored as, within the given family
pub(crate) fn field_type(type_: &TypeReference, family: &str) -> String {
  match type_ {
    TypeReference::Primitive(p) => primitive(*p).to_owned(),
    TypeReference::Token => TypeReference::TOKEN.to_owned(),
    TypeReference::Owned => handle(family),
    TypeReference::OwnedForeign(other) => handle(other),
    TypeReference::OwnedList => list(family),
  }
}

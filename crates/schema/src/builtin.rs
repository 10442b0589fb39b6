//! # Built-in Catalogue
//!
//! The node catalogue of the Lox tree-walking interpreter, used when no schema file is given.

use crate::declaration::FamilyDeclaration;

/// The Lox expression and statement families, expressions first
#[must_use]
pub fn lox() -> Vec<FamilyDeclaration> {
  vec![expressions(), statements()]
}

fn expressions() -> FamilyDeclaration {
  FamilyDeclaration::value("Expr", "ExprResult")
    .rendered()
    .variant("Assign", [("Token", "name"), ("Expr", "val")])
    .variant(
      "Binary",
      [("Expr", "left"), ("Expr", "right"), ("Token", "op")],
    )
    .variant(
      "Ternary",
      [("Expr", "cond"), ("Expr", "left"), ("Expr", "right")],
    )
    .variant(
      "Call",
      [("Expr", "callee"), ("Token", "paren"), ("[Expr]", "args")],
    )
    .variant("Group", [("Expr", "expr")])
    .variant("BoolLiteral", [("bool", "value")])
    .variant("StrLiteral", [("string", "value")])
    .variant("NullLiteral", [])
    .variant("NumLiteral", [("number", "value")])
    .variant(
      "Logical",
      [("Expr", "left"), ("Expr", "right"), ("Token", "op")],
    )
    .variant("Variable", [("Token", "name")])
    .variant("Unary", [("Expr", "right"), ("Token", "op")])
}

fn statements() -> FamilyDeclaration {
  FamilyDeclaration::effect("Stmt")
    .rendered()
    .variant("Block", [("[Stmt]", "statements")])
    .variant("Expression", [("Expr", "expression")])
    .variant(
      "If",
      [("Expr", "condition"), ("Stmt", "then"), ("Stmt", "else_br")],
    )
    .variant("While", [("Expr", "condition"), ("Stmt", "body")])
    .variant("Var", [("Token", "name"), ("Expr", "initialiser")])
}

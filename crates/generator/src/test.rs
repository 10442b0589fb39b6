use crate::{
  Artifact,
  config::{Config, Indentation, LineEnding},
  generate,
  names,
  node::{NodeDefinition, Passing},
  visitor::VisitorInterface,
  writer::{Emit, SourceWriter},
};
use astgen_schema::{Catalogue, FamilyDeclaration};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn minimal() -> Catalogue {
  Catalogue::load([
    FamilyDeclaration::value("Expr", "ExprResult").variant("BoolLiteral", [("bool", "value")]),
    FamilyDeclaration::effect("Stmt").variant("Expression", [("Expr", "expression")]),
  ])
  .unwrap()
}

fn lox() -> Catalogue {
  astgen_schema::lox().unwrap()
}

fn header<'a>(artifacts: &'a [Artifact], family: &str) -> &'a Artifact {
  artifacts.iter().find(|a| a.family == family).unwrap()
}

fn node(catalogue: &Catalogue, family: &str, variant: &str) -> NodeDefinition {
  let family = catalogue.family(family).unwrap();
  NodeDefinition::new(family.variant(variant).unwrap(), family)
}

fn emit(item: &impl Emit) -> String {
  let config = Config::default();
  let mut writer = SourceWriter::new(&config);
  item.emit(&mut writer);
  writer.finish()
}

#[test]
fn minimal_expression_header() {
  let artifacts = generate(&minimal(), &Config::default());
  assert_eq!(artifacts.len(), 2);

  let expr = header(&artifacts, "Expr");
  assert_eq!(expr.file_name, "Expr.h");
  assert!(expr.dependencies.is_empty());

  let expected = indoc! {"
    // Generated by astgen from the node catalogue. Do not edit.
    #ifndef LOX_EXPR_H_
    #define LOX_EXPR_H_

    #include <cstddef>
    #include <memory>
    #include <string>
    #include <utility>
    #include <variant>
    #include <vector>

    namespace lox {

    using ExprResult = std::variant<bool, double, std::string, std::nullptr_t>;

    namespace expr {

    template <typename T>
    struct Visitor;

    } // namespace expr

    struct BoolLiteral;

    struct Expr {
      virtual ExprResult accept(expr::Visitor<ExprResult> &) = 0;
      virtual ~Expr() = default;
    };

    using ExprPtr = std::unique_ptr<Expr>;
    using ExprList = std::vector<ExprPtr>;

    namespace expr {

    template <typename T>
    struct Visitor {
      virtual T visitBoolLiteralExpr(BoolLiteral &) = 0;
      virtual ~Visitor() = default;
    };

    } // namespace expr

    struct BoolLiteral : Expr {
      bool value_;

      BoolLiteral(bool value)
          : value_(value) {}

      ExprResult accept(expr::Visitor<ExprResult> &v) override {
        return v.visitBoolLiteralExpr(*this);
      }
    };

    } // namespace lox

    #endif // LOX_EXPR_H_
  "};
  assert_eq!(expr.contents, expected);
}

#[test]
fn minimal_statement_header() {
  let artifacts = generate(&minimal(), &Config::default());

  let stmt = header(&artifacts, "Stmt");
  assert_eq!(stmt.file_name, "Stmt.h");
  assert_eq!(stmt.dependencies, ["Expr.h"]);

  let expected = indoc! {r#"
    // Generated by astgen from the node catalogue. Do not edit.
    #ifndef LOX_STMT_H_
    #define LOX_STMT_H_

    #include "Expr.h"

    #include <cstddef>
    #include <memory>
    #include <string>
    #include <utility>
    #include <variant>
    #include <vector>

    namespace lox {

    namespace stmt {

    template <typename T>
    struct Visitor;

    } // namespace stmt

    struct Expression;

    struct Stmt {
      virtual void accept(stmt::Visitor<void> &) = 0;
      virtual ~Stmt() = default;
    };

    using StmtPtr = std::unique_ptr<Stmt>;
    using StmtList = std::vector<StmtPtr>;

    namespace stmt {

    template <typename T>
    struct Visitor {
      virtual T visitExpressionStmt(Expression &) = 0;
      virtual ~Visitor() = default;
    };

    } // namespace stmt

    struct Expression : Stmt {
      ExprPtr expression_;

      Expression(ExprPtr expression)
          : expression_(std::move(expression)) {}

      void accept(stmt::Visitor<void> &v) override {
        return v.visitExpressionStmt(*this);
      }
    };

    } // namespace lox

    #endif // LOX_STMT_H_
  "#};
  assert_eq!(stmt.contents, expected);
}

#[test]
fn expression_header_comes_first() {
  let artifacts = generate(&lox(), &Config::default());

  let families = artifacts.iter().map(|a| a.family.as_str()).collect::<Vec<_>>();
  assert_eq!(families, ["Expr", "Stmt"]);
}

#[test]
fn node_with_several_fields() {
  let binary = node(&lox(), "Expr", "Binary");

  let expected = indoc! {"
    struct Binary : Expr {
      ExprPtr left_;
      ExprPtr right_;
      Token op_;

      Binary(ExprPtr left, ExprPtr right, Token op)
          : left_(std::move(left)),
            right_(std::move(right)),
            op_(op) {}

      ExprResult accept(expr::Visitor<ExprResult> &v) override {
        return v.visitBinaryExpr(*this);
      }

      std::string accept(expr::Visitor<std::string> &v) override {
        return v.visitBinaryExpr(*this);
      }
    };
  "};
  assert_eq!(emit(&binary), expected);
}

#[test]
fn node_without_fields() {
  let null = node(&lox(), "Expr", "NullLiteral");
  assert!(null.members.is_empty());
  assert!(null.parameters.is_empty());

  let expected = indoc! {"
    struct NullLiteral : Expr {
      NullLiteral() {}

      ExprResult accept(expr::Visitor<ExprResult> &v) override {
        return v.visitNullLiteralExpr(*this);
      }

      std::string accept(expr::Visitor<std::string> &v) override {
        return v.visitNullLiteralExpr(*this);
      }
    };
  "};
  assert_eq!(emit(&null), expected);
}

#[test]
fn sole_list_is_taken_whole() {
  let block = node(&lox(), "Stmt", "Block");

  assert_eq!(block.parameters.len(), 1);
  assert_eq!(block.parameters[0].passing, Passing::MoveWhole);
  assert_eq!(block.parameters[0].type_, "StmtList");

  let expected = indoc! {"
    struct Block : Stmt {
      StmtList statements_;

      Block(StmtList &&statements)
          : statements_(std::move(statements)) {}

      void accept(stmt::Visitor<void> &v) override {
        return v.visitBlockStmt(*this);
      }

      std::string accept(stmt::Visitor<std::string> &v) override {
        return v.visitBlockStmt(*this);
      }
    };
  "};
  assert_eq!(emit(&block), expected);
}

#[test]
fn list_among_other_fields_is_moved() {
  let call = node(&lox(), "Expr", "Call");

  let passing = call.parameters.iter().map(|p| p.passing).collect::<Vec<_>>();
  assert_eq!(passing, [Passing::Move, Passing::Copy, Passing::Move]);
  assert_eq!(call.parameters[2].type_, "ExprList");

  let text = emit(&call);
  assert!(text.contains("Call(ExprPtr callee, Token paren, ExprList args)"));
  assert!(text.contains("args_(std::move(args)) {}"));
}

#[test]
fn values_are_copied() {
  let catalogue = Catalogue::load([FamilyDeclaration::effect("Node").variant(
    "Values",
    [
      ("bool", "flag"),
      ("number", "amount"),
      ("string", "text"),
      ("null", "nothing"),
      ("Token", "token"),
    ],
  )])
  .unwrap();
  let values = node(&catalogue, "Node", "Values");

  assert!(values.parameters.iter().all(|p| p.passing == Passing::Copy));
  let types = values.members.iter().map(|m| m.type_.as_str()).collect::<Vec<_>>();
  assert_eq!(types, ["bool", "double", "std::string", "std::nullptr_t", "Token"]);
}

#[test]
fn constructor_follows_field_order() {
  let catalogue = lox();

  for family in catalogue.families() {
    for variant in family.variants() {
      let definition = NodeDefinition::new(variant, family);
      let fields = variant.fields();

      assert_eq!(definition.members.len(), fields.len());
      assert_eq!(definition.parameters.len(), fields.len());

      for ((field, member), parameter) in fields
        .iter()
        .zip(&definition.members)
        .zip(&definition.parameters)
      {
        assert_eq!(member.name, format!("{}_", field.name));
        assert_eq!(parameter.name, field.name);
        assert_eq!(parameter.member, member.name);
        assert_eq!(parameter.type_, member.type_);
      }
    }
  }
}

#[test]
fn visitor_matches_variants() {
  let catalogue = lox();

  for family in catalogue.families() {
    let visitor = VisitorInterface::new(family);
    assert_eq!(visitor.methods.len(), family.len());

    for (method, variant) in visitor.methods.iter().zip(family.variants()) {
      assert_eq!(method.variant, variant.name());

      let definition = NodeDefinition::new(variant, family);
      assert!(definition.accepts.iter().all(|a| a.dispatch == method.name));
    }
  }
}

#[test]
fn visitor_interface() {
  let catalogue = lox();
  let visitor = VisitorInterface::new(catalogue.family("Stmt").unwrap());

  let expected = indoc! {"
    namespace stmt {

    template <typename T>
    struct Visitor {
      virtual T visitBlockStmt(Block &) = 0;
      virtual T visitExpressionStmt(Expression &) = 0;
      virtual T visitIfStmt(If &) = 0;
      virtual T visitWhileStmt(While &) = 0;
      virtual T visitVarStmt(Var &) = 0;
      virtual ~Visitor() = default;
    };

    } // namespace stmt
  "};
  assert_eq!(emit(&visitor), expected);
}

#[test]
fn rendering_adds_a_second_entry_point() {
  let artifacts = generate(&lox(), &Config::default());
  let expr = header(&artifacts, "Expr");

  assert!(expr.contents.contains(indoc! {"
    struct Expr {
      virtual ExprResult accept(expr::Visitor<ExprResult> &) = 0;
      virtual std::string accept(expr::Visitor<std::string> &) = 0;
      virtual ~Expr() = default;
    };
  "}));

  let definition = node(&lox(), "Stmt", "If");
  let results = definition.accepts.iter().map(|a| a.result.as_str()).collect::<Vec<_>>();
  assert_eq!(results, ["void", "std::string"]);
}

#[test]
fn declarations_come_before_definitions() {
  let artifacts = generate(&lox(), &Config::default());

  for artifact in &artifacts {
    let contents = &artifact.contents;
    let base = contents.find(&format!("struct {} {{", artifact.family)).unwrap();
    let visitor = contents.find("struct Visitor {").unwrap();
    let first_definition = contents.find(&format!(" : {} {{", artifact.family)).unwrap();

    assert!(base < visitor);
    assert!(visitor < first_definition);

    for line in contents.lines().filter(|l| l.ends_with(&format!(" : {} {{", artifact.family))) {
      let name = line
        .trim_start_matches("struct ")
        .split(' ')
        .next()
        .unwrap();
      let declaration = contents.find(&format!("struct {name};")).unwrap();
      assert!(declaration < base, "`{name}` is not declared before the base");
    }
  }
}

#[test]
fn statement_header_includes_expressions_only_when_used() {
  let catalogue = Catalogue::load([
    FamilyDeclaration::value("Expr", "ExprResult").variant("Nil", []),
    FamilyDeclaration::effect("Stmt")
      .variant("Break", [("Token", "keyword")])
      .variant("Block", [("[Stmt]", "statements")]),
  ])
  .unwrap();
  let artifacts = generate(&catalogue, &Config::default());
  let stmt = header(&artifacts, "Stmt");

  assert!(stmt.dependencies.is_empty());
  assert!(!stmt.contents.contains("#include \"Expr.h\""));

  let artifacts = generate(&lox(), &Config::default());
  let stmt = header(&artifacts, "Stmt");

  assert_eq!(stmt.dependencies, ["Expr.h"]);
  assert!(stmt.contents.contains("#include \"Expr.h\"\n#include \"Token.h\"\n"));
}

#[test]
fn token_header_only_when_used() {
  let artifacts = generate(&minimal(), &Config::default());
  assert!(artifacts.iter().all(|a| !a.contents.contains("Token.h")));

  let artifacts = generate(&lox(), &Config::default());
  assert!(artifacts.iter().all(|a| a.contents.contains("#include \"Token.h\"")));
}

#[test]
fn generation_is_idempotent() {
  let config = Config::default();

  assert_eq!(generate(&lox(), &config), generate(&lox(), &config));
  assert_eq!(generate(&minimal(), &config), generate(&minimal(), &config));
}

#[test]
fn config_indentation_and_line_ending() {
  let config = Config {
    indentation: Indentation::Tab,
    line_ending: LineEnding::CarriageReturnLineFeed,
    ..Config::default()
  };
  let artifacts = generate(&minimal(), &config);
  let expr = header(&artifacts, "Expr");

  assert!(expr.contents.ends_with("#endif // LOX_EXPR_H_\r\n"));
  assert_eq!(
    expr.contents.matches('\n').count(),
    expr.contents.matches("\r\n").count()
  );
  assert!(expr.contents.contains("\r\n\tvirtual ~Expr() = default;\r\n"));
  assert!(expr.contents.contains("\r\n\t\t\t: value_(value) {}\r\n"));
  assert!(expr.contents.contains("\r\n\t\treturn v.visitBoolLiteralExpr(*this);\r\n"));

  let config = Config {
    indentation: 4.into(),
    ..Config::default()
  };
  let artifacts = generate(&minimal(), &config);
  let expr = header(&artifacts, "Expr");
  assert!(expr.contents.contains("\n    bool value_;\n"));
  assert!(!expr.contents.contains('\r'));
}

#[test]
fn config_namespace_and_extension() {
  let config = Config {
    namespace: "ast".to_owned(),
    extension: "hpp".to_owned(),
    ..Config::default()
  };
  let artifacts = generate(&lox(), &config);

  let stmt = header(&artifacts, "Stmt");
  assert_eq!(stmt.file_name, "Stmt.hpp");
  assert_eq!(stmt.dependencies, ["Expr.hpp"]);
  assert!(stmt.contents.contains("#ifndef AST_STMT_HPP_\n"));
  assert!(stmt.contents.contains("#include \"Token.hpp\"\n"));
  assert!(stmt.contents.contains("\nnamespace ast {\n"));
  assert!(stmt.contents.contains("\n} // namespace ast\n"));
}

#[test]
fn no_empty_lines_are_indented() {
  let artifacts = generate(&lox(), &Config::default());

  for artifact in &artifacts {
    assert!(artifact.contents.lines().all(|l| l.trim_end() == l));
  }
}

#[test]
fn guard_names() {
  let config = Config {
    extension: "h++".to_owned(),
    ..Config::default()
  };
  assert_eq!(names::guard("Expr", &config), "LOX_EXPR_H_");
  assert_eq!(names::guard("Stmt", &Config::default()), "LOX_STMT_H_");

  let config = Config {
    namespace: "lang::ast".to_owned(),
    extension: "hh".to_owned(),
    ..Config::default()
  };
  assert_eq!(names::guard("Expr", &config), "LANG_AST_EXPR_HH_");

  let config = Config {
    namespace: "_detail".to_owned(),
    extension: "h".to_owned(),
    ..Config::default()
  };
  assert_eq!(names::guard("Expr", &config), "DETAIL_EXPR_H_");
}

#[test]
fn guards_are_never_reserved() {
  for extension in ["h++", "h__", "_h", "h-", "++"] {
    let config = Config {
      extension: extension.to_owned(),
      ..Config::default()
    };
    let guard = names::guard("Expr", &config);

    assert!(!guard.contains("__"), "`{extension}` gave {guard}");
    assert!(!guard.starts_with('_'), "`{extension}` gave {guard}");
    assert!(guard.ends_with('_'), "`{extension}` gave {guard}");
  }
}

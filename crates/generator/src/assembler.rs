//! # Artifact Assembler
//!
//! Lays out the pieces of a family's header so every name is declared before it is used:
//! includes, forward declarations, the abstract base, the visitor, then the concrete nodes.

use crate::{
  config::Config,
  names,
  node::NodeDefinition,
  visitor::VisitorInterface,
  writer::{Emit, SourceWriter},
};
use astgen_schema::{Contract, Family, Primitive};

const BANNER: &str = "// Generated by astgen from the node catalogue. Do not edit.";
const STANDARD_HEADERS: [&str; 6] = ["cstddef", "memory", "string", "utility", "variant", "vector"];

/// The generated header of one family
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
  /// The basename of the family the header is for
  pub family: String,
  /// The file name the header is written to
  pub file_name: String,
  /// The headers of other families which this header includes
  pub dependencies: Vec<String>,
  /// The text of the header
  pub contents: String,
}

/// Build the complete header of a family
pub(crate) fn assemble(family: &Family, config: &Config) -> Artifact {
  let basename = family.basename();
  let guard = names::guard(basename, config);
  let visitor = VisitorInterface::new(family);
  let nodes = family
    .variants()
    .map(|variant| {
      tracing::trace!(family = basename, variant = variant.name(), "defining node");
      NodeDefinition::new(variant, family)
    })
    .collect::<Vec<_>>();

  let dependencies = family
    .references()
    .into_iter()
    .map(|other| names::header(other, config))
    .collect::<Vec<_>>();

  let mut writer = SourceWriter::new(config);
  writer.line(BANNER);
  writer.line(format!("#ifndef {guard}"));
  writer.line(format!("#define {guard}"));
  writer.blank();

  let mut local_headers = dependencies.clone();
  if family.uses_token() {
    local_headers.push(names::header("Token", config));
  }
  if !local_headers.is_empty() {
    for header in &local_headers {
      writer.line(format!("#include \"{header}\""));
    }
    writer.blank();
  }
  for header in STANDARD_HEADERS {
    writer.line(format!("#include <{header}>"));
  }
  writer.blank();

  writer.line(format!("namespace {} {{", config.namespace));
  writer.blank();

  if let Contract::Value { result } = family.contract() {
    let alternatives = Primitive::ALL.map(names::primitive).join(", ");
    writer.line(format!("using {result} = std::variant<{alternatives}>;"));
    writer.blank();
  }

  visitor.emit_declaration(&mut writer);
  writer.blank();
  for node in &nodes {
    writer.line(format!("struct {};", node.name));
  }
  writer.blank();

  emit_base(family, &mut writer);
  writer.blank();
  writer.line(format!(
    "using {} = std::unique_ptr<{basename}>;",
    names::handle(basename)
  ));
  writer.line(format!(
    "using {} = std::vector<{}>;",
    names::list(basename),
    names::handle(basename)
  ));
  writer.blank();

  visitor.emit(&mut writer);
  writer.blank();

  for node in &nodes {
    node.emit(&mut writer);
    writer.blank();
  }

  writer.line(format!("}} // namespace {}", config.namespace));
  writer.blank();
  writer.line(format!("#endif // {guard}"));

  Artifact {
    family: basename.to_owned(),
    file_name: names::header(basename, config),
    dependencies,
    contents: writer.finish(),
  }
}

/// The abstract base, with one pure virtual entry point per result type
fn emit_base(family: &Family, writer: &mut SourceWriter) {
  let basename = family.basename();

  writer.line(format!("struct {basename} {{"));
  writer.indented(|writer| {
    for result in names::results(family) {
      writer.line(format!(
        "virtual {result} accept({} &) = 0;",
        names::visitor(basename, result)
      ));
    }
    writer.line(format!("virtual ~{basename}() = default;"));
  });
  writer.line("};");
}

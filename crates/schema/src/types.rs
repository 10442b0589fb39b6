//! # Types
//!
//! The closed set of field types a node can hold.

use std::fmt;

/// A value copied into a node as-is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
  /// `true` or `false`
  Boolean,
  /// A double precision number
  Number,
  /// An owned string of text
  Text,
  /// The null value
  Null,
}
impl Primitive {
  /// Every primitive, in the order they appear in a value result type
  pub const ALL: [Self; 4] = [Self::Boolean, Self::Number, Self::Text, Self::Null];

  /// The name used for the primitive in a schema
  #[must_use]
  pub const fn keyword(self) -> &'static str {
    match self {
      Self::Boolean => "bool",
      Self::Number => "number",
      Self::Text => "string",
      Self::Null => "null",
    }
  }

  fn from_keyword(keyword: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|primitive| primitive.keyword() == keyword)
  }
}

/// The kind of a field
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeReference {
  /// A primitive value, stored and passed by value
  Primitive(Primitive),
  /// A lexical token, stored and passed by value
  Token,
  /// A uniquely owned child node of the same family
  Owned,
  /// A uniquely owned child node of another, earlier, family
  OwnedForeign(String),
  /// An ordered collection of uniquely owned child nodes of the same family
  OwnedList,
}
impl TypeReference {
  /// The name of the token type in a schema
  pub const TOKEN: &'static str = "Token";

  /// Does the node take sole ownership of another node through this field?
  #[must_use]
  pub fn is_owned(&self) -> bool {
    matches!(self, Self::Owned | Self::OwnedForeign(_) | Self::OwnedList)
  }

  /// The family this field refers to, if it is a node of another family
  #[must_use]
  pub fn foreign_family(&self) -> Option<&str> {
    match self {
      Self::OwnedForeign(family) => Some(family),
      _ => None,
    }
  }
}

/// The textual form of a type in a schema, before it is resolved against the families
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TypeName<'a> {
  Primitive(Primitive),
  Token,
  Node(&'a str),
  List(&'a str),
  Unknown,
}
impl<'a> TypeName<'a> {
  pub(crate) fn parse(text: &'a str) -> Self {
    let text = text.trim();

    if let Some(primitive) = Primitive::from_keyword(text) {
      return Self::Primitive(primitive);
    }
    if text == TypeReference::TOKEN {
      return Self::Token;
    }
    if let Some(inner) = text.strip_prefix('[').and_then(|x| x.strip_suffix(']')) {
      let inner = inner.trim();
      return if is_identifier(inner) {
        Self::List(inner)
      } else {
        Self::Unknown
      };
    }
    if is_identifier(text) {
      Self::Node(text)
    } else {
      Self::Unknown
    }
  }
}

/// Keywords and alternative operator tokens of C++, which can't name anything
const KEYWORDS: &[&str] = &[
  "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
  "case", "catch", "char", "char16_t", "char32_t", "char8_t", "class", "co_await", "co_return",
  "co_yield", "compl", "concept", "const", "const_cast", "consteval", "constexpr", "constinit",
  "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
  "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
  "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr",
  "operator", "or", "or_eq", "private", "protected", "public", "register", "reinterpret_cast",
  "requires", "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast",
  "struct", "switch", "template", "this", "thread_local", "throw", "true", "try", "typedef",
  "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
  "while", "xor", "xor_eq",
];

/// Can the name be used as an identifier in the generated source?
///
/// It must be an ASCII identifier which isn't a C++ keyword, and isn't reserved for the
/// implementation (containing `__`, or starting with `_` and a capital letter).
///
/// ```
/// use astgen_schema::is_identifier;
///
/// assert!(is_identifier("else_branch"));
/// assert!(!is_identifier("else"));
/// assert!(!is_identifier("_Value"));
/// assert!(!is_identifier("2nd"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  let well_formed = match chars.next() {
    Some(first) if first.is_ascii_alphabetic() || first == '_' => {
      chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
    _ => false,
  };
  let reserved = name.contains("__")
    || name.strip_prefix('_').is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()));

  well_formed && !reserved && !KEYWORDS.contains(&name)
}

impl fmt::Display for TypeReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Primitive(primitive) => write!(f, "{}", primitive.keyword()),
      Self::Token => write!(f, "{}", Self::TOKEN),
      Self::Owned => write!(f, "owned node"),
      Self::OwnedForeign(family) => write!(f, "owned {family}"),
      Self::OwnedList => write!(f, "list of owned nodes"),
    }
  }
}

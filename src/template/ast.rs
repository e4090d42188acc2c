//! The unbound pattern tree produced by the parser (spec.md §3, §4.A).

use indexmap::IndexMap;

/// A literal argument value accepted by a tag invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl Literal {
    /// Canonical string form used when a tag needs to stringify one of its
    /// own configuration values: decimal integers, `true`/`false`, no
    /// locale-dependent formatting.
    pub fn to_canonical_string(&self) -> String {
        match self {
            Literal::Int(i) => i.to_string(),
            Literal::Bool(b) => b.to_string(),
            Literal::Str(s) => s.clone(),
        }
    }
}

/// An unresolved reference to a tag, as written in template source
#[derive(Debug, Clone, PartialEq)]
pub struct TagCall {
    pub category: Option<String>,
    pub name: String,
    pub args: Vec<Literal>,
    pub kwargs: IndexMap<String, Literal>,
    pub context: Option<Pattern>,
}

/// A single element of a pattern: either literal text or a tag invocation
#[derive(Debug, Clone, PartialEq)]
pub enum PatternElement {
    RawText(String),
    TagPlaceholder(TagCall),
}

/// An ordered sequence of pattern elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pattern(pub Vec<PatternElement>);

impl Pattern {
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self(elements)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//! The tag contract (spec.md §4.C) and the calling convention used to
//! configure tag instances at bind time (spec.md §4.B, §9 Design Notes).

use std::fmt::Debug;

use indexmap::IndexMap;

use crate::filesystem::File;
use crate::template::ast::Literal;
use crate::template::error::TagEvaluationError;

/// Whether a tag must, must not, or may optionally be bound with a `{...}`
/// context subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequireContext {
    Required,
    Forbidden,
    Optional,
}

/// Positional and keyword arguments passed to `Tag::configure`
#[derive(Debug, Clone, Default)]
pub struct TagArgs {
    pub positional: Vec<Literal>,
    pub keyword: IndexMap<String, Literal>,
}

impl TagArgs {
    pub fn new(positional: Vec<Literal>, keyword: IndexMap<String, Literal>) -> Self {
        Self { positional, keyword }
    }

    /// Pop a keyword argument by name, falling back to the next unclaimed
    /// positional argument at `index`. Returns `None` if neither is present.
    pub fn take(&mut self, name: &str, index: usize) -> Option<Literal> {
        if let Some(v) = self.keyword.shift_remove(name) {
            return Some(v);
        }
        self.positional.get(index).cloned()
    }
}

/// A named, configurable function from `(file, optional context string)` to
/// `String` — the atom of the template language.
///
/// Implementations must be pure with respect to the filesystem: invoking
/// `process` twice with the same `file` and `context` in one job must
/// produce the same string (required so sorting by a template key is
/// stable). Tags that legitimately vary across a batch (e.g. a running
/// counter) are expected to vary with the position of `file` in the batch,
/// not with repeated calls for the *same* file.
pub trait Tag: Debug {
    /// Whether this tag must, must not, or may be bound with a context
    fn require_context(&self) -> RequireContext;

    /// Validate and store configuration; any argument problem is wrapped by
    /// the binder into `BindError::Configuration`.
    fn configure(&mut self, args: TagArgs) -> Result<(), String>;

    /// Produce this tag's contribution to the evaluated string
    fn process(&self, file: &File, context: Option<&str>) -> Result<String, TagEvaluationError>;
}

/// A way to produce a configured [`Tag`] instance from raw arguments.
///
/// The closed set of built-in tags register themselves via
/// [`TagFactory::FromDefault`], which default-constructs the tag and then
/// calls `configure`. [`TagFactory::FromFn`] covers arbitrary factory
/// callables (used by tests and any future plugin loader), mirroring the
/// source's support for factories that are not tied to a single class.
pub enum TagFactory {
    FromDefault(fn() -> Box<dyn Tag>),
    FromFn(Box<dyn Fn(TagArgs) -> Result<Box<dyn Tag>, String>>),
}

impl TagFactory {
    pub fn create(&self, args: TagArgs) -> Result<Box<dyn Tag>, String> {
        match self {
            TagFactory::FromDefault(make) => {
                let mut tag = make();
                tag.configure(args)?;
                Ok(tag)
            }
            TagFactory::FromFn(f) => f(args),
        }
    }
}

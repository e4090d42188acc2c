//! Error types for the template language, following the teacher's
//! one-`thiserror`-enum-per-module idiom (see `filesystem::Error`).

use std::path::PathBuf;
use thiserror::Error;

/// Raised by the parser on malformed template source
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{line}:{column}: {message}")]
pub struct TemplateSyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl TemplateSyntaxError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Raised while resolving tag names and configuring tag instances
#[derive(Debug, Error)]
pub enum BindError {
    #[error("unknown tag `{name}`")]
    UnknownTag { name: String },

    #[error("ambiguous tag `{name}`, candidates: {}", candidates.join(", "))]
    AmbiguousTag { name: String, candidates: Vec<String> },

    #[error("configuration error for tag `{tag_name}`: {cause}")]
    Configuration { tag_name: String, cause: String },

    #[error("tag `{tag_name}` requires a context but none was given")]
    ContextMissing { tag_name: String },

    #[error("tag `{tag_name}` does not accept a context")]
    ContextForbidden { tag_name: String },
}

/// Raised while registering a tag or category
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("invalid tag name: `{0}`")]
    InvalidTagName(String),

    #[error("tag `{0}` already registered in category `{1}`")]
    DuplicateTag(String, String),

    #[error("category `{0}` already registered")]
    DuplicateCategory(String),

    #[error("cannot deduce a tag name from class `{0}`")]
    UnderivableName(String),
}

/// Raised by a tag's `process` method during evaluation
#[derive(Debug, Error)]
#[error("tag `{tag_name}` failed while processing `{}`: {cause}", file.display())]
pub struct TagEvaluationError {
    pub tag_name: String,
    pub file: PathBuf,
    pub cause: String,
}

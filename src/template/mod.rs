//! The embedded template language: parsing, binding, and evaluation
//! (spec.md §3, §4).

pub mod ast;
pub mod bound;
pub mod builtin;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod registry;
pub mod tag;

use crate::filesystem::File;
use crate::template::error::{BindError, TagEvaluationError, TemplateSyntaxError};
use crate::template::registry::Registry;

/// Errors that can occur while turning template source into a rendered
/// string for a given file: parse, then bind, then evaluate.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error(transparent)]
    Syntax(#[from] TemplateSyntaxError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Evaluation(#[from] TagEvaluationError),
}

/// Parse, bind, and evaluate `source` against `file` in one call. Callers
/// that render the same template against many files (the common case)
/// should parse and bind once and call [`evaluator::evaluate`] per file
/// instead of paying the parse/bind cost repeatedly.
pub fn render(source: &str, registry: &Registry, file: &File) -> Result<String, TemplateError> {
    let pattern = parser::parse(source)?;
    let bound = registry::bind(&pattern, registry)?;
    Ok(evaluator::evaluate(&bound, file)?)
}

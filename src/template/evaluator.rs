//! Evaluates a bound pattern against a file (spec.md §4.D).
//!
//! Elements are processed left to right. A tag's context, if any, is
//! evaluated eagerly and passed to the tag as a plain string before the tag
//! itself runs — contexts never see raw, unevaluated sub-patterns.

use crate::filesystem::File;
use crate::template::bound::{BoundElement, BoundPattern};
use crate::template::error::TagEvaluationError;

pub fn evaluate(pattern: &BoundPattern, file: &File) -> Result<String, TagEvaluationError> {
    let mut out = String::new();
    for element in &pattern.0 {
        match element {
            BoundElement::RawText(text) => out.push_str(text),
            BoundElement::TagInstance { tag, context } => {
                let context_str = match context {
                    Some(inner) => Some(evaluate(inner, file)?),
                    None => None,
                };
                out.push_str(&tag.process(file, context_str.as_deref())?);
            },
        }
    }
    Ok(out)
}

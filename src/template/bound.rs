//! The bound pattern tree produced by the binder (spec.md §3, §4.B).

use crate::template::tag::Tag;

/// A single element of a bound pattern: literal text, or a ready-to-invoke
/// tag instance plus its optional (already-bound) context subtree
#[derive(Debug)]
pub enum BoundElement {
    RawText(String),
    TagInstance {
        tag: Box<dyn Tag>,
        context: Option<BoundPattern>,
    },
}

/// An ordered sequence of bound pattern elements, ready for evaluation
#[derive(Debug, Default)]
pub struct BoundPattern(pub Vec<BoundElement>);

impl BoundPattern {
    pub fn new(elements: Vec<BoundElement>) -> Self {
        Self(elements)
    }
}

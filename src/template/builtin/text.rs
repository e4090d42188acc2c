//! Text-transforming built-in tags, registered under category `text`.

use crate::filesystem::File;
use crate::template::error::TagEvaluationError;
use crate::template::tag::{RequireContext, Tag, TagArgs};

#[derive(Debug, Default)]
pub struct UpperTag;

impl Tag for UpperTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Required
    }

    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }

    fn process(&self, _file: &File, context: Option<&str>) -> Result<String, TagEvaluationError> {
        Ok(context.unwrap_or_default().to_uppercase())
    }
}

#[derive(Debug, Default)]
pub struct LowerTag;

impl Tag for LowerTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Required
    }

    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }

    fn process(&self, _file: &File, context: Option<&str>) -> Result<String, TagEvaluationError> {
        Ok(context.unwrap_or_default().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file() -> File {
        File::new(PathBuf::from("/tmp"), PathBuf::from("a.txt"))
    }

    #[test]
    fn upper_uppercases_context() {
        let tag = UpperTag;
        assert_eq!(tag.process(&file(), Some("mixedCase")).unwrap(), "MIXEDCASE");
    }

    #[test]
    fn lower_lowercases_context() {
        let tag = LowerTag;
        assert_eq!(tag.process(&file(), Some("MixedCase")).unwrap(), "mixedcase");
    }
}

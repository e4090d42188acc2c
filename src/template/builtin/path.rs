//! Path-derived built-in tags, registered under category `path`.

use crate::filesystem::File;
use crate::template::error::TagEvaluationError;
use crate::template::tag::{RequireContext, Tag, TagArgs};

#[derive(Debug, Default)]
pub struct FilenameTag;

impl Tag for FilenameTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }

    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }

    fn process(&self, file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
        Ok(file.file_name())
    }
}

#[derive(Debug, Default)]
pub struct NameTag;

impl Tag for NameTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }

    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }

    fn process(&self, file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
        Ok(file.file_stem())
    }
}

#[derive(Debug, Default)]
pub struct ExtTag;

impl Tag for ExtTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }

    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }

    fn process(&self, file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
        Ok(file.extension())
    }
}

#[derive(Debug, Default)]
pub struct ParentTag;

impl Tag for ParentTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }

    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }

    fn process(&self, file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
        Ok(file
            .parent_relative()
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default())
    }
}

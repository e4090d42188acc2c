//! Filesystem-metadata and sequencing built-in tags, registered under
//! category `meta`.

use std::cell::Cell;

use crate::filesystem::File;
use crate::template::ast::Literal;
use crate::template::error::TagEvaluationError;
use crate::template::tag::{RequireContext, Tag, TagArgs};

#[derive(Debug, Default)]
pub struct SizeTag;

impl Tag for SizeTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }

    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }

    fn process(&self, file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
        let metadata = file.metadata().map_err(|err| TagEvaluationError {
            tag_name: "Size".to_string(),
            file: file.absolute_path(),
            cause: err.to_string(),
        })?;
        Ok(metadata.len().to_string())
    }
}

/// Sequential counter over the batch being renamed. One instance is created
/// per bound occurrence of `%Count()` in a template, so its `Cell` tracks
/// state across the whole job, not per file.
#[derive(Debug)]
pub struct CountTag {
    start: i64,
    step: i64,
    next: Cell<i64>,
}

impl Default for CountTag {
    fn default() -> Self {
        Self {
            start: 0,
            step: 1,
            next: Cell::new(0),
        }
    }
}

impl Tag for CountTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }

    fn configure(&mut self, mut args: TagArgs) -> Result<(), String> {
        if let Some(value) = args.take("start", 0) {
            self.start = expect_int(&value, "start")?;
        }
        if let Some(value) = args.take("step", 1) {
            self.step = expect_int(&value, "step")?;
        }
        self.next.set(self.start);
        Ok(())
    }

    fn process(&self, _file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
        let value = self.next.get();
        self.next.set(value + self.step);
        Ok(value.to_string())
    }
}

/// `%SizeUnder(threshold)` — returns `"true"` if the file is smaller than
/// `threshold` bytes, else `"false"`. Stands in for the boolean comparison
/// expressions the template grammar itself does not support.
#[derive(Debug, Default)]
pub struct SizeLessThanTag {
    threshold: i64,
}

impl Tag for SizeLessThanTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }

    fn configure(&mut self, mut args: TagArgs) -> Result<(), String> {
        let value = args
            .take("threshold", 0)
            .ok_or_else(|| "SizeUnder requires a threshold argument".to_string())?;
        self.threshold = expect_int(&value, "threshold")?;
        Ok(())
    }

    fn process(&self, file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
        let metadata = file.metadata().map_err(|err| TagEvaluationError {
            tag_name: "SizeUnder".to_string(),
            file: file.absolute_path(),
            cause: err.to_string(),
        })?;
        Ok((metadata.len() < self.threshold as u64).to_string())
    }
}

fn expect_int(value: &Literal, name: &str) -> Result<i64, String> {
    match value {
        Literal::Int(i) => Ok(*i),
        other => Err(format!("argument `{}` must be an integer, got `{}`", name, other.to_canonical_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    fn file() -> File {
        File::new(PathBuf::from("/tmp"), PathBuf::from("a.txt"))
    }

    #[test]
    fn count_defaults_to_zero_start_one_step() {
        let mut tag = CountTag::default();
        tag.configure(TagArgs::default()).unwrap();
        assert_eq!(tag.process(&file(), None).unwrap(), "0");
        assert_eq!(tag.process(&file(), None).unwrap(), "1");
        assert_eq!(tag.process(&file(), None).unwrap(), "2");
    }

    #[test]
    fn count_honors_start_and_step_kwargs() {
        let mut tag = CountTag::default();
        let mut kwargs = IndexMap::new();
        kwargs.insert("start".to_string(), Literal::Int(10));
        kwargs.insert("step".to_string(), Literal::Int(5));
        tag.configure(TagArgs::new(vec![], kwargs)).unwrap();
        assert_eq!(tag.process(&file(), None).unwrap(), "10");
        assert_eq!(tag.process(&file(), None).unwrap(), "15");
    }

    #[test]
    fn size_under_requires_threshold() {
        let mut tag = SizeLessThanTag::default();
        assert!(tag.configure(TagArgs::default()).is_err());
    }
}

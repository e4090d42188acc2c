//! Integration-level tests for the template language against the public
//! `tempren` library API: parse -> bind -> evaluate end to end, plus the
//! binder error cases the original fixtures exercise (context
//! required/forbidden, unknown tag).

use std::path::PathBuf;

use tempren::filesystem::File;
use tempren::template::error::BindError;
use tempren::template::registry::{bind, Registry};
use tempren::template::tag::{RequireContext, Tag, TagArgs};
use tempren::template::{builtin, evaluator, parser, TemplateError};

fn registry() -> Registry {
    let mut registry = Registry::new();
    builtin::register_builtins(&mut registry);
    registry
}

fn file(name: &str) -> File {
    File::new(PathBuf::from("/tmp"), PathBuf::from(name))
}

fn render(source: &str, file: &File) -> Result<String, TemplateError> {
    let registry = registry();
    let pattern = parser::parse(source)?;
    let bound = bind(&pattern, &registry)?;
    Ok(evaluator::evaluate(&bound, file)?)
}

#[test]
fn renames_via_nested_tags() {
    let out = render("%Upper(){%Name()}_%Count(start=1).%Ext()", &file("photo.jpg")).unwrap();
    assert_eq!(out, "PHOTO_1.jpg");
}

#[test]
fn unknown_tag_is_a_bind_error() {
    let registry = registry();
    let pattern = parser::parse("%Nope()").unwrap();
    let err = bind(&pattern, &registry).unwrap_err();
    assert!(matches!(err, BindError::UnknownTag { .. }));
}

#[derive(Debug, Default)]
struct RequiresContextTag;
impl Tag for RequiresContextTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Required
    }
    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }
    fn process(&self, _file: &File, context: Option<&str>) -> Result<String, tempren::template::error::TagEvaluationError> {
        Ok(context.unwrap_or_default().to_string())
    }
}

#[derive(Debug, Default)]
struct ForbidsContextTag;
impl Tag for ForbidsContextTag {
    fn require_context(&self) -> RequireContext {
        RequireContext::Forbidden
    }
    fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
        Ok(())
    }
    fn process(&self, _file: &File, _context: Option<&str>) -> Result<String, tempren::template::error::TagEvaluationError> {
        Ok("x".to_string())
    }
}

#[test]
fn context_required_but_missing_is_an_error() {
    let mut registry = Registry::new();
    registry
        .register("custom", "NeedsCtx", tempren::template::tag::TagFactory::FromDefault(|| Box::new(RequiresContextTag)))
        .unwrap();

    let pattern = parser::parse("%NeedsCtx()").unwrap();
    let err = bind(&pattern, &registry).unwrap_err();
    assert!(matches!(err, BindError::ContextMissing { .. }));
}

#[test]
fn context_forbidden_but_given_is_an_error() {
    let mut registry = Registry::new();
    registry
        .register("custom", "NoCtx", tempren::template::tag::TagFactory::FromDefault(|| Box::new(ForbidsContextTag)))
        .unwrap();

    let pattern = parser::parse("%NoCtx(){oops}").unwrap();
    let err = bind(&pattern, &registry).unwrap_err();
    assert!(matches!(err, BindError::ContextForbidden { .. }));
}

#[test]
fn size_under_reflects_actual_file_size() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"12345").unwrap();
    let file = File::new(dir.path().to_path_buf(), PathBuf::from("a.txt"));

    assert_eq!(render("%SizeUnder(100)", &file).unwrap(), "true");
    assert_eq!(render("%SizeUnder(1)", &file).unwrap(), "false");
    assert_eq!(render("%Size()", &file).unwrap(), "5");
}

#[test]
fn count_sequences_across_repeated_calls_on_one_bound_tag() {
    let registry = registry();
    let pattern = parser::parse("%Count(start=0,step=1)-%Filename()").unwrap();
    let bound = bind(&pattern, &registry).unwrap();

    let first = evaluator::evaluate(&bound, &file("a.jpg")).unwrap();
    let second = evaluator::evaluate(&bound, &file("b.jpg")).unwrap();
    assert_eq!(first, "0-a.jpg");
    assert_eq!(second, "1-b.jpg");
}

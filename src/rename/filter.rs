//! Deciding which gathered files take part in a job (spec.md §4.F).

use regex::Regex;
use thiserror::Error;

use crate::filesystem::File;
use crate::template::registry::Registry;
use crate::template::TemplateError;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid glob pattern: {0}")]
    Glob(String),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

enum FilterSource {
    Pattern(Regex),
    Template(String),
}

/// A single filter: glob or regex match the file name, or evaluate a
/// template against the file and treat the result as a boolean.
pub struct Filter {
    source: FilterSource,
    invert: bool,
}

/// A template's rendered output is truthy unless empty, `"0"`, or a
/// case-insensitive match for `"false"` — the same convention the built-in
/// comparison tags use for their own `"true"`/`"false"` output.
fn is_truthy(rendered: &str) -> bool {
    !(rendered.is_empty() || rendered == "0" || rendered.eq_ignore_ascii_case("false"))
}

impl Filter {
    pub fn glob(pattern: &str, invert: bool) -> Result<Self, FilterError> {
        let glob = wax::Glob::new(pattern).map_err(|err| FilterError::Glob(err.to_string()))?;
        let regex = Regex::new(&glob.regex().to_string())?;
        Ok(Self {
            source: FilterSource::Pattern(regex),
            invert,
        })
    }

    pub fn regex(pattern: &str, invert: bool) -> Result<Self, FilterError> {
        let regex = Regex::new(pattern)?;
        Ok(Self {
            source: FilterSource::Pattern(regex),
            invert,
        })
    }

    pub fn template(source: impl Into<String>, invert: bool) -> Self {
        Self {
            source: FilterSource::Template(source.into()),
            invert,
        }
    }

    pub fn matches(&self, file: &File, registry: &Registry) -> Result<bool, FilterError> {
        let raw = match &self.source {
            FilterSource::Pattern(regex) => regex.is_match(&file.file_name()),
            FilterSource::Template(source) => is_truthy(&crate::template::render(source, registry, file)?),
        };
        Ok(raw != self.invert)
    }
}

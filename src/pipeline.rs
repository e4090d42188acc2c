//! Wires gathering, filtering, sorting, template evaluation, and renaming
//! into the single end-to-end run a CLI invocation performs (spec.md §4.H).

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::filesystem::{self, File, FileGatherer, FlatFileGatherer, RecursiveFileGatherer};
use crate::opt::{FilterType, Opts};
use crate::rename::{DryRunRenamer, Filter, FileMover, FileRenamer, FilterError, RenameError, Renamer};
use crate::rename::sort::sort_by_key;
use crate::template::bound::BoundPattern;
use crate::template::error::{BindError, TemplateSyntaxError};
use crate::template::registry::{bind, Registry};
use crate::template::{builtin, evaluator, parser};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input directory `{0}` doesn't exists")]
    InputDirMissing(std::path::PathBuf),

    #[error(transparent)]
    Gather(#[from] filesystem::Error),

    #[error(transparent)]
    Syntax(#[from] TemplateSyntaxError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Evaluation(#[from] crate::template::error::TagEvaluationError),

    #[error(transparent)]
    Rename(#[from] RenameError),
}

pub struct RunSummary {
    pub considered: usize,
    pub renamed: usize,
}

/// `--filter`/`--filter-type`/`--filter-invert` assembled into a usable
/// [`Filter`], if a filter was requested at all.
fn build_filter(opts: &Opts) -> Result<Option<Filter>, PipelineError> {
    let Some(pattern) = &opts.filter else {
        return Ok(None);
    };
    let filter = match opts.filter_type {
        FilterType::Glob => Filter::glob(pattern, opts.filter_invert)?,
        FilterType::Regex => Filter::regex(pattern, opts.filter_invert)?,
        FilterType::Template => Filter::template(pattern.clone(), opts.filter_invert),
    };
    Ok(Some(filter))
}

fn gather(opts: &Opts, input_dir: &Path) -> Result<Vec<File>, PipelineError> {
    if !input_dir.is_dir() {
        return Err(PipelineError::InputDirMissing(input_dir.to_path_buf()));
    }
    let files = if opts.recursive {
        RecursiveFileGatherer { include_hidden: opts.hidden }.gather(input_dir)?
    } else {
        FlatFileGatherer { include_hidden: opts.hidden }.gather(input_dir)?
    };
    Ok(files)
}

/// Where a rendered template string lands on disk, and which [`Renamer`]
/// realizes that: `--path` treats it as relative to the input directory
/// and creates missing intermediate directories; the default treats it as
/// a bare new name within the file's current directory.
fn destination_for(file: &File, rendered: &str, path_mode: bool) -> Result<std::path::PathBuf, RenameError> {
    if path_mode {
        Ok(file.input_directory.join(rendered))
    } else {
        if rendered.contains('/') || rendered.contains(std::path::MAIN_SEPARATOR) {
            return Err(RenameError::InvalidDestination(std::path::PathBuf::from(rendered)));
        }
        Ok(file
            .absolute_path()
            .parent()
            .map(|parent| parent.join(rendered))
            .unwrap_or_else(|| std::path::PathBuf::from(rendered)))
    }
}

fn make_renamer(opts: &Opts) -> Box<dyn Renamer> {
    if opts.dry_run {
        Box::new(DryRunRenamer::new())
    } else if opts.path {
        Box::new(FileMover)
    } else {
        Box::new(FileRenamer)
    }
}

/// Runs one full job: gather, filter, sort, evaluate, rename.
pub fn run(opts: &Opts, template: &str, input_dir: &Path) -> Result<RunSummary, PipelineError> {
    let mut registry = Registry::new();
    builtin::register_builtins(&mut registry);

    let pattern = parser::parse(template)?;
    let bound = bind(&pattern, &registry)?;

    let sort_bound: Option<BoundPattern> = match &opts.sort {
        Some(sort_template) => {
            let sort_pattern = parser::parse(sort_template)?;
            Some(bind(&sort_pattern, &registry)?)
        },
        None => None,
    };

    let mut files = gather(opts, input_dir)?;

    if let Some(filter) = build_filter(opts)? {
        let mut kept = Vec::with_capacity(files.len());
        for file in files {
            if filter.matches(&file, &registry)? {
                kept.push(file);
            }
        }
        files = kept;
    }

    if let Some(sort_bound) = &sort_bound {
        let mut keys = Vec::with_capacity(files.len());
        for file in &files {
            keys.push(evaluator::evaluate(sort_bound, file)?);
        }
        let mut indexed: Vec<(File, String)> = files.into_iter().zip(keys).collect();
        sort_by_key(&mut indexed, |(_, key)| key.clone(), opts.sort_invert);
        files = indexed.into_iter().map(|(file, _)| file).collect();
    }

    let considered = files.len();
    let mut renamer = make_renamer(opts);
    let mut renamed = 0;
    let mut first_error = None;

    for file in &files {
        let rendered = evaluator::evaluate(&bound, file)?;
        let outcome = destination_for(file, &rendered, opts.path).and_then(|destination| {
            renamer
                .rename(&file.absolute_path(), &destination, opts.overwrite)
                .map(|()| destination)
        });

        match outcome {
            Ok(destination) => {
                if opts.dry_run {
                    println!("{} -> {}", file.relative_path.display(), destination.display());
                } else {
                    info!("{} -> {}", file.relative_path.display(), destination.display());
                }
                renamed += 1;
            },
            Err(err) if opts.dry_run => {
                crate::tempren_error!("{}", err);
                first_error.get_or_insert(err);
            },
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(err) = first_error {
        return Err(err.into());
    }

    Ok(RunSummary { considered, renamed })
}

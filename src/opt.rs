//! Command-line argument definitions, following the teacher's `opt.rs`
//! idiom: a single `clap` derive struct, `crate_version!()`, a colorized
//! `override_usage`/`after_help` built from `consts.rs` statics.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{crate_version, Parser};

use crate::consts::{AFTER_HELP, APP_ABOUT, APP_NAME, OVERRIDE_HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Glob,
    Regex,
    Template,
}

impl FromStr for FilterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "glob" => Ok(FilterType::Glob),
            "regex" => Ok(FilterType::Regex),
            "template" => Ok(FilterType::Template),
            other => Err(format!("invalid filter type `{}` (expected glob, regex, or template)", other)),
        }
    }
}

/// Batch-rename files driven by an embedded template language
#[derive(Parser, Debug)]
#[clap(
    name = APP_NAME,
    version = crate_version!(),
    about = APP_ABOUT.as_str(),
    override_usage = OVERRIDE_HELP.as_str(),
    after_help = AFTER_HELP.as_str()
)]
pub struct Opts {
    /// Template used to generate the new name/path of each matched file.
    /// Required unless --list-tags is given.
    #[clap(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Directory to search for files to rename. Required unless
    /// --list-tags is given.
    #[clap(value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// List every available tag, grouped by category, and exit
    #[clap(short = 'l', long = "list-tags")]
    pub list_tags: bool,

    /// Increase verbosity; repeatable (-v, -vv, -vvv)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    pub verbose: u8,

    /// Show what would be renamed without touching the filesystem
    #[clap(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Template output renames the file in place (default)
    #[clap(short = 'n', long = "name", conflicts_with = "path")]
    pub name: bool,

    /// Template output is treated as a path relative to the input
    /// directory; missing intermediate directories are created
    #[clap(short = 'p', long = "path")]
    pub path: bool,

    /// Recurse into subdirectories of the input directory
    #[clap(short = 'R', long = "recursive")]
    pub recursive: bool,

    /// Include hidden files (and, recursively, hidden directories)
    #[clap(short = 'H', long = "hidden")]
    pub hidden: bool,

    /// Only rename files matching this filter
    #[clap(short = 'f', long = "filter", value_name = "PATTERN")]
    pub filter: Option<String>,

    /// How to interpret --filter: glob (default), regex, or template
    #[clap(long = "filter-type", alias = "ft", value_name = "TYPE", default_value = "glob")]
    pub filter_type: FilterType,

    /// Invert the --filter match
    #[clap(long = "filter-invert", alias = "fi")]
    pub filter_invert: bool,

    /// Sort files by the output of this template before renaming
    #[clap(short = 's', long = "sort", value_name = "TEMPLATE")]
    pub sort: Option<String>,

    /// Reverse the --sort ordering
    #[clap(long = "sort-invert", alias = "si")]
    pub sort_invert: bool,

    /// Overwrite an existing destination instead of failing
    #[clap(long = "overwrite")]
    pub overwrite: bool,
}

impl Opts {
    pub fn get_args() -> Self {
        Opts::parse()
    }
}

//! Constants used throughout this crate. Mainly to 'prettify' the output
//! with color, in line with the teacher's `consts.rs`.

use clap::crate_description;
use colored::Color::{BrightBlue, BrightGreen, BrightRed, BrightYellow, Green, Red};
use once_cell::sync::Lazy;

/// ANSI escape characters used for coloring output
pub(crate) const YELLOW: &str = "\x1b[0;33m";
pub(crate) const GREEN: &str = "\x1b[0;32m";
pub(crate) const BRRED: &str = "\x1b[38;5;9m";
pub(crate) const BRED: &str = "\x1b[01;38;5;1m";
pub(crate) const RES: &str = "\x1b[0m";

pub(crate) const APP_NAME: &str = "tempren";

/// Colors assigned, in order, to the categories printed by `--list-tags`
#[allow(dead_code)]
pub(crate) const CATEGORY_COLORS: &[colored::Color] = &[
    Red,
    Green,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
];

pub(crate) static APP_ABOUT: Lazy<String> = Lazy::new(|| {
    format!(
        "{}DESCRIPTION: {}{}{}",
        YELLOW,
        GREEN,
        crate_description!(),
        RES
    )
});

pub(crate) static OVERRIDE_HELP: Lazy<String> =
    Lazy::new(|| format!("{}tempren{} [OPTIONS] <TEMPLATE> <INPUT_DIR>", BRED, RES));

pub(crate) static AFTER_HELP: Lazy<String> = Lazy::new(|| {
    format!(
        "See {}tempren{} {}--help{} for longer explanations of the template language.",
        BRED, RES, GREEN, RES
    )
});

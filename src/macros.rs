//! Macros used in more than one file, following the teacher's `wutag_error!`
//! family.

/// Expand to an error message written to stderr
#[macro_export]
macro_rules! tempren_error {
    ($($err:tt)*) => ({
        use $crate::macros::ColoredExt as _;
        eprintln!("{}: {}", "[tempren error]".red().bold(), format!($($err)*));
    })
}

/// Expand to an info message written to stderr
#[macro_export]
macro_rules! tempren_info {
    ($($err:tt)*) => ({
        use $crate::macros::ColoredExt as _;
        eprintln!("{}: {}", "[tempren info]".green().bold(), format!($($err)*));
    })
}

pub use colored::Colorize as ColoredExt;

/// Convert a `Path`-like value to an owned `String`
#[macro_export]
macro_rules! path_str {
    ($p:expr) => {
        $p.to_string_lossy().to_string()
    };
}

//! Filtering, sorting, and applying renames to a gathered file set
//! (spec.md §4.F, §4.G).

pub mod filter;
pub mod renamer;
pub mod sort;

pub use filter::{Filter, FilterError};
pub use renamer::{DryRunRenamer, FileMover, FileRenamer, RenameError, Renamer};

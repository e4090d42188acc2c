//! Process exit codes, following the teacher's `exe::exits::ExitCode`.

/// Exit code returned by the `tempren` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Everything went fine
    Success,
    /// Missing template/input, or nonexistent input path
    Usage,
    /// Template parse, bind, or evaluation error
    TemplateError,
    /// Filesystem error while committing renames
    FilesystemError,
    /// Unexpected internal error
    Internal,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => 0,
            ExitCode::Internal => 1,
            ExitCode::Usage => 2,
            ExitCode::TemplateError => 3,
            ExitCode::FilesystemError => 4,
        }
    }
}

use std::process::ExitCode;

/// How a `bulbul` run ended.
///
/// `0` when every file was handled, `1` when the run finished but some files
/// were left as they were (parse or write failures, an existing config on
/// `init`), `2` when the run stopped early (bad config, unreadable working
/// directory).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Some files were not transformed.
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of a transform run that could not process `failed_files` files.
    pub fn from_failed_files(failed_files: usize) -> Self {
        if failed_files == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}

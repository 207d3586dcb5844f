use std::path::PathBuf;

use thiserror::Error;

/// The two precondition failures the tool reports explicitly. Everything
/// downstream of loading is best-effort text munging and never errors.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("You need to specify a valid path to a mapping file.")]
    MissingPath,

    #[error("The file you have specified could not be found")]
    FileNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

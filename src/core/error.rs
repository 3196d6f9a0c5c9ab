use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds surfaced by the walker.
///
/// Errors propagate unmodified through the recursive walk; there is no
/// recovery and no partial result.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The resolved path is missing or not a directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The directory holds neither manifest kind.
    #[error("could not find 'deploy.json' or 'package.js' in directory '{}'", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// A manifest file is unreadable or does not match its expected shape.
    #[error("could not parse manifest '{}': {}", .path.display(), .reason)]
    Parse { path: PathBuf, reason: String },
}

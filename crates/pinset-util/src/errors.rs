use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for pinset operations that touch the outside world.
///
/// Parse and validation failures have their own structured types in
/// `pinset-core` and `pinset-resolver`; this enum covers everything around
/// them (reading files, config, lockfiles, group selection).
#[derive(Debug, Error, Diagnostic)]
pub enum PinsetError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest could not be read or located.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Pass the manifest path with --manifest"))]
    Manifest { message: String },

    /// Building the resolved environment failed (unknown group, etc.).
    #[error("Resolution failed: {message}")]
    Resolution { message: String },

    /// The lockfile is missing, unreadable, or out of date.
    #[error("Lockfile error: {message}")]
    #[diagnostic(help("Run `pinset lock` to regenerate it"))]
    Lockfile { message: String },

    /// Global configuration could not be parsed.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PinsetResult<T> = miette::Result<T>;

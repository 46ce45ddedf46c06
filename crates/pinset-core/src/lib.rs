//! Core data types for pinset.
//!
//! This crate defines the immutable value types that represent a pinned
//! requirements manifest (groups, exact pins, the editable-install marker),
//! the text parser and renderer, exact-version validation, the global
//! configuration, and the lockfile format.
//!
//! This crate is intentionally free of async code and network I/O.

/// Manifest file looked up when none is given on the command line.
pub const DEFAULT_MANIFEST_NAME: &str = "requirements.txt";

/// Lockfile written next to the manifest by `pinset lock`.
pub const DEFAULT_LOCKFILE_NAME: &str = "pinset.lock";

pub mod config;
pub mod lockfile;
pub mod manifest;
pub mod name;
pub mod parse;
pub mod version;

pub use manifest::{EditableMarker, Entry, Group, Manifest, Pin};
pub use name::PackageName;
pub use parse::{parse, ParseError};
pub use version::{ExactVersion, VersionError, VersionPolicy};

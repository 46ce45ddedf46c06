//! Environment resolution engine: exact-pin validation, cross-group conflict
//! detection, priority-ordered merging of manifests, and the resolved,
//! group-partitioned environment handed to an installer.
//!
//! Every operation here is a pure function of its inputs. Conflicts are
//! always reported and never resolved by picking a version.

pub mod environment;
pub mod merge;
pub mod problem;
pub mod validate;

pub use environment::{resolve, Environment, ResolvedEditable, ResolvedGroup, ResolvedPackage};
pub use merge::merge;
pub use problem::{Problem, ProblemReport};
pub use validate::{validate, validate_with, ValidateOptions, ValidationResult};

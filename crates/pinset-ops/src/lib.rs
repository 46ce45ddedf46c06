//! Operations behind each `pinset` command.
//!
//! Every operation reads its inputs from disk, runs the pure core/resolver
//! functions, and prints or writes the result. Status lines go to stderr so
//! stdout stays pipeable.

pub mod ops_check;
pub mod ops_export;
pub mod ops_lock;
pub mod ops_merge;
pub mod ops_setup;
pub mod ops_show;

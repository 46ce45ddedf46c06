//! Shared utilities for pinset.
//!
//! This crate provides cross-cutting concerns used by the other pinset
//! crates: the unified error type, filesystem helpers, SHA-256 hashing,
//! and Cargo-style terminal status lines.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;

//! Check command implementation.

use std::path::Path;

use miette::Result;

pub fn exec(manifest: Option<&Path>, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(pinset_util::errors::PinsetError::Io)?;
    pinset_ops::ops_check::check(&cwd, manifest, verbose)
}

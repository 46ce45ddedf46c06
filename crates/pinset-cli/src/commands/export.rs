//! Handler for `pinset export`.

use std::path::Path;

use miette::Result;

pub fn exec(manifest: Option<&Path>, groups: &[String], output: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(pinset_util::errors::PinsetError::Io)?;
    pinset_ops::ops_export::export(&cwd, manifest, groups, output)
}

//! Handler for `pinset show`.

use std::path::Path;

use miette::Result;

use pinset_ops::ops_show::{self, ShowOptions};

pub fn exec(manifest: Option<&Path>, groups: Vec<String>, json: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(pinset_util::errors::PinsetError::Io)?;
    ops_show::show(&cwd, manifest, &ShowOptions { groups, json })
}

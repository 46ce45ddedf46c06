//! Handler for `pinset merge`.

use std::path::PathBuf;

use miette::Result;

use pinset_ops::ops_merge::{self, MergeOptions};

pub async fn exec(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(pinset_util::errors::PinsetError::Io)?;
    ops_merge::merge(&cwd, &MergeOptions { inputs, output }).await
}

//! Operation: merge several manifests in priority order.
//!
//! Files are read and parsed concurrently; the merge itself is the single
//! synchronization point and runs once every input is parsed.

use std::path::{Path, PathBuf};

use pinset_core::Manifest;
use pinset_resolver::{merge as merge_manifests, validate_with};
use pinset_util::errors::PinsetError;
use tokio::task::JoinSet;

use crate::ops_setup;

/// Options for `pinset merge`.
pub struct MergeOptions {
    /// Inputs, lowest priority first.
    pub inputs: Vec<PathBuf>,
    /// Write the merged manifest here instead of stdout.
    pub output: Option<PathBuf>,
}

pub async fn merge(cwd: &Path, opts: &MergeOptions) -> miette::Result<()> {
    if opts.inputs.is_empty() {
        return Err(PinsetError::Generic {
            message: "merge needs at least one manifest".to_string(),
        }
        .into());
    }

    let paths: Vec<PathBuf> = opts.inputs.iter().map(|p| cwd.join(p)).collect();
    let manifests = parse_all(&paths).await?;
    let merged = merge_manifests(&manifests)?;

    let config = ops_setup::load_config();
    validate_with(&merged, &ops_setup::validate_options(&config))?;

    let rendered = merged.render();
    match &opts.output {
        Some(out) => {
            let out = cwd.join(out);
            pinset_util::fs::write_file(&out, &rendered)?;
            pinset_util::progress::status(
                "Merged",
                &format!("{} manifests into {}", manifests.len(), out.display()),
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Read and parse every path concurrently, returning manifests in input order.
pub async fn parse_all(paths: &[PathBuf]) -> miette::Result<Vec<Manifest>> {
    let mut set = JoinSet::new();
    for (idx, path) in paths.iter().cloned().enumerate() {
        set.spawn(async move {
            let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
                miette::Report::from(PinsetError::Manifest {
                    message: format!("Failed to read {}: {e}", path.display()),
                })
            })?;
            let manifest = ops_setup::parse_with_source(&path, &text)?;
            Ok::<_, miette::Report>((idx, manifest))
        });
    }

    let mut slots: Vec<Option<Manifest>> = vec![None; paths.len()];
    while let Some(joined) = set.join_next().await {
        let (idx, manifest) = joined.map_err(|e| PinsetError::Generic {
            message: format!("Manifest task failed: {e}"),
        })??;
        slots[idx] = Some(manifest);
    }
    Ok(slots.into_iter().flatten().collect())
}

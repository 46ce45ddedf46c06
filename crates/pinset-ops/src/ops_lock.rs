//! Operation: resolve the manifest and (re)generate the lockfile.

use std::path::Path;

use pinset_core::lockfile::Lockfile;
use pinset_resolver::resolve;
use pinset_util::errors::PinsetError;

use crate::ops_setup;

/// Write the lockfile, or with `check_only` verify the existing one is current.
pub fn lock(cwd: &Path, manifest: Option<&Path>, check_only: bool) -> miette::Result<()> {
    let preflight = ops_setup::preflight(cwd, manifest)?;
    let env = resolve(&preflight.manifest, &preflight.validate_options())?;
    let source = preflight.manifest_file_name();
    let expected = env.to_lockfile(&source, &preflight.text);
    let lockfile_path = preflight.lockfile_path();

    if check_only {
        let lock_name = lockfile_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !lockfile_path.is_file() {
            return Err(PinsetError::Lockfile {
                message: format!("{lock_name} does not exist"),
            }
            .into());
        }
        let existing = Lockfile::from_path(&lockfile_path)?;
        if !existing.is_fresh(&preflight.text) || existing != expected {
            pinset_util::progress::status_warn("Stale", &lock_name);
            return Err(PinsetError::Lockfile {
                message: format!("{lock_name} is out of date with {source}"),
            }
            .into());
        }
        pinset_util::progress::status("Fresh", &lock_name);
        return Ok(());
    }

    expected.write_to(&lockfile_path)?;
    pinset_util::progress::status(
        "Locked",
        &format!(
            "{} packages in {} groups",
            env.package_count(),
            env.groups.len()
        ),
    );
    Ok(())
}

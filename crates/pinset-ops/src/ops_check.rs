//! Operation: parse and validate the manifest without writing anything.

use std::path::Path;

use pinset_resolver::validate_with;

use crate::ops_setup;

/// Validate the manifest, reporting every problem at once.
pub fn check(cwd: &Path, manifest: Option<&Path>, verbose: bool) -> miette::Result<()> {
    let preflight = ops_setup::preflight(cwd, manifest)?;
    let name = preflight.manifest_file_name();

    if verbose {
        for group in preflight.manifest.groups() {
            pinset_util::progress::status_info(
                "Group",
                &format!("{} ({} entries)", group.name(), group.entries().len()),
            );
        }
    }

    validate_with(&preflight.manifest, &preflight.validate_options())?;

    pinset_util::progress::status(
        "Checked",
        &format!(
            "{name} ({} groups, {} pins)",
            preflight.manifest.groups().len(),
            preflight.manifest.pin_count()
        ),
    );
    Ok(())
}

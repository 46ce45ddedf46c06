//! Operation: write selected groups as a flat requirements list for an installer.

use std::path::Path;

use pinset_resolver::resolve;

use crate::ops_setup;

pub fn export(
    cwd: &Path,
    manifest: Option<&Path>,
    groups: &[String],
    output: Option<&Path>,
) -> miette::Result<()> {
    let preflight = ops_setup::preflight(cwd, manifest)?;
    let env = resolve(&preflight.manifest, &preflight.validate_options())?;
    let text = env.to_requirements(groups)?;

    match output {
        Some(path) => {
            let path = cwd.join(path);
            pinset_util::fs::write_file(&path, &text)?;
            pinset_util::progress::status("Exported", &path.display().to_string());
        }
        None => print!("{text}"),
    }
    Ok(())
}

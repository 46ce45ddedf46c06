//! Manifest discovery and loading shared by every command.

use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};
use pinset_core::config::GlobalConfig;
use pinset_core::{parse, Manifest};
use pinset_resolver::ValidateOptions;
use pinset_util::errors::PinsetError;

/// A manifest read from disk together with the settings it is checked under.
pub struct PreflightResult {
    pub config: GlobalConfig,
    pub manifest_path: PathBuf,
    pub text: String,
    pub manifest: Manifest,
}

impl PreflightResult {
    pub fn validate_options(&self) -> ValidateOptions {
        validate_options(&self.config)
    }

    /// File name of the manifest, as recorded in lockfiles.
    pub fn manifest_file_name(&self) -> String {
        self.manifest_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.manifest_path.display().to_string())
    }

    /// Path of the lockfile next to the manifest.
    pub fn lockfile_path(&self) -> PathBuf {
        self.manifest_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(&self.config.lock.file)
    }
}

/// Load the global config, falling back to defaults when it is unreadable.
pub fn load_config() -> GlobalConfig {
    match GlobalConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load global config, using defaults: {e}");
            GlobalConfig::default()
        }
    }
}

pub fn validate_options(config: &GlobalConfig) -> ValidateOptions {
    ValidateOptions {
        versions: config.validate.version_policy(),
    }
}

/// Locate, read and parse the manifest.
///
/// An explicit path is taken relative to `cwd`; otherwise the configured
/// manifest name is searched for in `cwd` and its ancestors.
pub fn preflight(cwd: &Path, explicit: Option<&Path>) -> miette::Result<PreflightResult> {
    let config = load_config();
    let manifest_path = locate_manifest(cwd, explicit, &config)?;
    let (text, manifest) = load_manifest(&manifest_path)?;
    Ok(PreflightResult {
        config,
        manifest_path,
        text,
        manifest,
    })
}

pub fn locate_manifest(
    cwd: &Path,
    explicit: Option<&Path>,
    config: &GlobalConfig,
) -> miette::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(cwd.join(path));
    }
    match pinset_util::fs::find_ancestor_with(cwd, &config.manifest) {
        Some(dir) => Ok(dir.join(&config.manifest)),
        None => Err(PinsetError::Manifest {
            message: format!(
                "Could not find {} in {} or any parent directory",
                config.manifest,
                cwd.display()
            ),
        }
        .into()),
    }
}

/// Read and parse one manifest file. Parse errors carry the file's source so
/// the offending line is rendered.
pub fn load_manifest(path: &Path) -> miette::Result<(String, Manifest)> {
    let text = pinset_util::fs::read_manifest_text(path)?;
    tracing::debug!("Parsing {}", path.display());
    let manifest = parse_with_source(path, &text)?;
    Ok((text, manifest))
}

pub fn parse_with_source(path: &Path, text: &str) -> miette::Result<Manifest> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    parse(text).map_err(|e| {
        Report::new(e).with_source_code(NamedSource::new(
            path.display().to_string(),
            text.to_string(),
        ))
    })
}

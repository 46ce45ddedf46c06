//! Operation: print the resolved environment, grouped.

use std::path::Path;

use pinset_resolver::{resolve, Environment};

use crate::ops_setup;

/// Options for `pinset show`.
#[derive(Default)]
pub struct ShowOptions {
    /// Only show these groups (all when empty).
    pub groups: Vec<String>,
    /// Emit JSON instead of text.
    pub json: bool,
}

pub fn show(cwd: &Path, manifest: Option<&Path>, opts: &ShowOptions) -> miette::Result<()> {
    let preflight = ops_setup::preflight(cwd, manifest)?;
    let env = resolve(&preflight.manifest, &preflight.validate_options())?;
    let env = filter_groups(env, &opts.groups)?;

    if opts.json {
        let json = serde_json::to_string_pretty(&env).map_err(|e| {
            pinset_util::errors::PinsetError::Generic {
                message: format!("Failed to serialize environment: {e}"),
            }
        })?;
        println!("{json}");
    } else {
        print!("{}", render_tree(&env));
    }
    Ok(())
}

/// Keep only the named groups, in manifest order.
pub fn filter_groups(mut env: Environment, names: &[String]) -> miette::Result<Environment> {
    if names.is_empty() {
        return Ok(env);
    }
    // Rejects unknown names.
    env.select(names)?;
    env.groups
        .retain(|g| names.iter().any(|n| n.trim().eq_ignore_ascii_case(&g.name)));
    if let Some(editable) = &env.editable {
        if !env.groups.iter().any(|g| g.name == editable.group) {
            env.editable = None;
        }
    }
    Ok(env)
}

pub fn render_tree(env: &Environment) -> String {
    let mut out = String::new();
    for group in &env.groups {
        out.push_str(&format!("{}\n", group.name));
        let mut lines: Vec<String> = Vec::new();
        if let Some(editable) = env.editable.as_ref().filter(|e| e.group == group.name) {
            lines.push(format!("-e {}", editable.target));
        }
        lines.extend(
            group
                .packages
                .iter()
                .map(|p| format!("{} {}", p.name, p.version)),
        );
        if lines.is_empty() {
            out.push_str("└── (empty)\n");
        }
        for (i, line) in lines.iter().enumerate() {
            let branch = if i + 1 == lines.len() { "└──" } else { "├──" };
            out.push_str(&format!("{branch} {line}\n"));
        }
    }
    out
}

//! Command dispatch and handler modules.

mod check;
mod export;
mod lock;
mod merge;
mod show;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    tracing::debug!("dispatching {:?}", cli.command);
    let manifest = cli.manifest.as_deref();
    match cli.command {
        Command::Check => check::exec(manifest, cli.verbose),
        Command::Show { groups, json } => show::exec(manifest, groups, json),
        Command::Lock { check } => lock::exec(manifest, check),
        Command::Merge { inputs, output } => merge::exec(inputs, output).await,
        Command::Export { groups, output } => export::exec(manifest, &groups, output.as_deref()),
    }
}

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::store::ConfigStore;

/// Core editor/pager/branch/merge/push/performance settings.
///
/// Each entry is an independent, idempotent write; order does not affect
/// the final state.
pub const CORE_SETTINGS: &[(&str, &str)] = &[
    ("core.editor", "vim"),
    ("core.pager", "delta"),
    ("core.autocrlf", "input"),
    ("init.defaultBranch", "main"),
    ("color.ui", "auto"),
    ("merge.conflictstyle", "zdiff3"),
    ("merge.tool", "vimdiff"),
    ("diff.colorMoved", "default"),
    ("pull.rebase", "true"),
    ("push.default", "current"),
    ("push.autoSetupRemote", "true"),
    ("fetch.prune", "true"),
    ("rerere.enabled", "true"),
    ("credential.helper", "cache --timeout=86400"),
    ("feature.manyFiles", "true"),
];

/// delta pager integration: theme, layout, and decoration styling.
pub const DELTA_SETTINGS: &[(&str, &str)] = &[
    ("interactive.diffFilter", "delta --color-only"),
    ("delta.navigate", "true"),
    ("delta.light", "false"),
    ("delta.side-by-side", "true"),
    ("delta.line-numbers", "true"),
    ("delta.syntax-theme", "Monokai Extended"),
    ("delta.file-style", "bold yellow"),
    ("delta.file-decoration-style", "yellow ul"),
    ("delta.commit-decoration-style", "bold box ul"),
    ("delta.hunk-header-decoration-style", "blue box"),
];

fn apply_table(store: &dyn ConfigStore, table: &[(&str, &str)]) -> Result<()> {
    for (key, value) in table {
        store.write(key, value)?;
    }
    Ok(())
}

pub fn apply_core_settings(store: &dyn ConfigStore) -> Result<()> {
    info!("Applying {} core settings", CORE_SETTINGS.len());
    apply_table(store, CORE_SETTINGS)?;
    if store.is_dry_run() {
        println!(
            "{}",
            format!("DRY-RUN: Would apply {} core settings", CORE_SETTINGS.len()).cyan()
        );
    } else {
        println!("{}", "✅ Core settings applied".green());
    }
    Ok(())
}

pub fn apply_delta_settings(store: &dyn ConfigStore) -> Result<()> {
    info!("Applying {} delta settings", DELTA_SETTINGS.len());
    apply_table(store, DELTA_SETTINGS)?;
    if store.is_dry_run() {
        println!(
            "{}",
            format!("DRY-RUN: Would apply {} delta settings", DELTA_SETTINGS.len()).cyan()
        );
    } else {
        println!("{}", "✅ delta integration configured".green());
    }
    Ok(())
}

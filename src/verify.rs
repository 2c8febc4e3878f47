use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::store::ConfigStore;

/// Snapshot of the configuration state shown by `--check-only` and at the
/// end of a full run. Absent keys surface as `None` and render "Not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: Option<String>,
    pub email: Option<String>,
    pub editor: Option<String>,
    pub pager: Option<String>,
    pub default_branch: Option<String>,
    pub pull_rebase: Option<String>,
    pub alias_count: usize,
}

/// Human-readable alias families shown to the user. A hard-coded list,
/// separate from the registration table.
const ALIAS_CATEGORIES: &[&str] = &[
    "status, staging, and commits",
    "fetch, pull, push, and remotes",
    "branches",
    "history and logs",
    "searching",
    "diffs",
    "merge, rebase, and cherry-pick",
    "stash",
    "undo, reset, and cleanup",
    "ignoring and inspection",
    "worktrees, submodules, and tags",
];

/// Read back identity, a subset of core settings, and the alias count.
/// Strictly read-only.
pub fn collect_report(store: &dyn ConfigStore) -> Result<Report> {
    Ok(Report {
        name: store.read("user.name")?,
        email: store.read("user.email")?,
        editor: store.read("core.editor")?,
        pager: store.read("core.pager")?,
        default_branch: store.read("init.defaultBranch")?,
        pull_rebase: store.read("pull.rebase")?,
        alias_count: store.enumerate("alias.")?.len(),
    })
}

fn render(label: &str, value: &Option<String>) {
    match value {
        Some(value) => println!("  {label}: {value}"),
        None => println!("  {label}: {}", "Not set".yellow()),
    }
}

pub fn print_report(report: &Report) {
    println!();
    println!("{}", "Current Git configuration".bold());
    render("Name", &report.name);
    render("Email", &report.email);
    render("Editor", &report.editor);
    render("Pager", &report.pager);
    render("Default branch", &report.default_branch);
    render("Pull rebase", &report.pull_rebase);
    println!("  Aliases: {}", report.alias_count);
    if report.alias_count > 0 {
        println!("  Alias categories:");
        for category in ALIAS_CATEGORIES {
            println!("    - {category}");
        }
    }
}

/// Verify and display the current state of the global configuration.
pub fn verify(store: &dyn ConfigStore) -> Result<()> {
    info!("Verifying global Git configuration");
    let report = collect_report(store)?;
    print_report(&report);
    Ok(())
}

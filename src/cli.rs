use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{info, warn};

use crate::aliases;
use crate::identity::{self, IdentitySource, PlaceholderSource, PromptSource};
use crate::pkg;
use crate::settings;
use crate::store::{ConfigStore, DryRunStore, GitConfigStore};
use crate::verify;

#[derive(Parser)]
#[command(name = "gitrig")]
#[command(about = "Bootstrap a curated global Git configuration")]
#[command(version)]
pub struct Args {
    /// Clear the stored identity (user.name, user.email) before reconfiguring
    #[arg(long)]
    pub reset: bool,

    /// Verify the current configuration without writing anything
    #[arg(long)]
    pub check_only: bool,

    /// Suppress status messages (only show errors)
    #[arg(short, long)]
    pub quiet: bool,

    /// Simulate all configuration writes without applying them
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: Args) -> Result<()> {
    if args.check_only {
        info!("Check-only mode: verifying configuration");
        let store = GitConfigStore::new();
        return verify::verify(&store);
    }

    if args.dry_run {
        warn!("Running in DRY-RUN mode - no changes will be made");
        eprintln!("{}", "DRY-RUN: No changes will be made".cyan());
    }

    if !args.quiet {
        if let Some(home) = dirs::home_dir() {
            eprintln!(
                "Configuring global Git settings in {}",
                home.join(".gitconfig").display()
            );
        }
    }

    // git provides the config store itself; delta is the diff pager the
    // settings below point at.
    pkg::ensure_installed("git", "git", args.dry_run).await?;
    pkg::ensure_installed("delta", "git-delta", args.dry_run).await?;

    let store: Box<dyn ConfigStore> = if args.dry_run {
        Box::new(DryRunStore::new(GitConfigStore::new()))
    } else {
        Box::new(GitConfigStore::new())
    };
    let source: Box<dyn IdentitySource> = if args.dry_run {
        Box::new(PlaceholderSource)
    } else {
        Box::new(PromptSource)
    };

    identity::configure_identity(&*store, &*source, args.reset)?;
    settings::apply_core_settings(&*store)?;
    settings::apply_delta_settings(&*store)?;
    aliases::register_aliases(&*store)?;

    verify::verify(&*store)?;

    if !args.quiet {
        print_closing_hints();
    }

    info!("Setup completed");
    if args.dry_run {
        println!("{}", "✅ Dry run complete - no changes were made".green());
    } else {
        println!("{}", "✅ Git configuration complete".green());
    }
    Ok(())
}

fn print_closing_hints() {
    println!();
    println!("{}", "Try these:".bold());
    println!("  git st          # short status");
    println!("  git lg          # decorated one-line graph");
    println!("  git co <branch> # checkout");
    println!("  git save        # timestamped savepoint commit");
    println!("  git aliases     # list everything that was registered");
}

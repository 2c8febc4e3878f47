use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::store::ConfigStore;

/// The `(name, email)` pair attributed to authored commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Outcome of asking an identity source what to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityDecision {
    /// Keep the stored identity as-is; write nothing.
    Keep,
    /// Replace the stored identity with this one.
    Use(Identity),
}

/// Strategy for obtaining an identity: a real interactive prompt, or a
/// fixed substitution under dry-run.
pub trait IdentitySource {
    fn collect(&self, current: Option<&Identity>) -> Result<IdentityDecision>;
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Conventional `local@domain.tld` shape; not an RFC 5322 validator.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Trim surrounding whitespace; `None` when nothing remains.
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Interactive identity source backed by terminal prompts. Invalid input
/// re-prompts until accepted; there is no attempt cap.
pub struct PromptSource;

impl IdentitySource for PromptSource {
    fn collect(&self, current: Option<&Identity>) -> Result<IdentityDecision> {
        if let Some(identity) = current {
            println!(
                "Current identity: {} <{}>",
                identity.name.bold(),
                identity.email.bold()
            );
            let keep = Confirm::new()
                .with_prompt("Keep this identity?")
                .default(true)
                .interact()?;
            if keep {
                return Ok(IdentityDecision::Keep);
            }
        }

        let name: String = Input::new()
            .with_prompt("Your name")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let email: String = Input::new()
            .with_prompt("Your email")
            .validate_with(|input: &String| -> Result<(), &str> {
                if is_valid_email(input.trim()) {
                    Ok(())
                } else {
                    Err("Enter an address like you@example.com")
                }
            })
            .interact_text()?;

        Ok(IdentityDecision::Use(Identity {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        }))
    }
}

/// Dry-run identity source: never prompts. Keeps an existing identity, or
/// substitutes fixed placeholder values when none is stored.
pub struct PlaceholderSource;

pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_EMAIL: &str = "you@example.com";

impl IdentitySource for PlaceholderSource {
    fn collect(&self, current: Option<&Identity>) -> Result<IdentityDecision> {
        if current.is_some() {
            println!("{}", "DRY-RUN: Would keep current identity".cyan());
            return Ok(IdentityDecision::Keep);
        }
        println!(
            "{}",
            format!("DRY-RUN: Would prompt for identity (using {PLACEHOLDER_NAME} <{PLACEHOLDER_EMAIL}>)")
                .cyan()
        );
        Ok(IdentityDecision::Use(Identity {
            name: PLACEHOLDER_NAME.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
        }))
    }
}

/// Read the stored identity; both keys must be present.
pub fn read_identity(store: &dyn ConfigStore) -> Result<Option<Identity>> {
    let name = store.read("user.name")?;
    let email = store.read("user.email")?;
    match (name, email) {
        (Some(name), Some(email)) => Ok(Some(Identity { name, email })),
        _ => Ok(None),
    }
}

/// Establish the user identity through the injected source.
///
/// With `reset`, the stored name/email are cleared first so the prompt
/// never sees stale values.
pub fn configure_identity(
    store: &dyn ConfigStore,
    source: &dyn IdentitySource,
    reset: bool,
) -> Result<()> {
    let current = if reset {
        info!("Resetting stored identity");
        store.unset("user.name")?;
        store.unset("user.email")?;
        None
    } else {
        read_identity(store)?
    };

    match source.collect(current.as_ref())? {
        IdentityDecision::Keep => {
            debug!("Keeping existing identity");
            Ok(())
        }
        IdentityDecision::Use(identity) => {
            let name = normalize_name(&identity.name)
                .ok_or_else(|| anyhow::anyhow!("Identity name is empty"))?;
            store.write("user.name", &name)?;
            store.write("user.email", identity.email.trim())?;
            if store.is_dry_run() {
                println!(
                    "{}",
                    format!("DRY-RUN: Would set identity: {name} <{}>", identity.email.trim())
                        .cyan()
                );
            } else {
                println!(
                    "{}",
                    format!("✅ Identity set: {name} <{}>", identity.email.trim()).green()
                );
            }
            Ok(())
        }
    }
}

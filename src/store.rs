use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use tracing::debug;

/// Access to the global Git configuration store.
///
/// All mutation in the application goes through this trait, so dry-run mode
/// is just an alternate implementation rather than a flag checked at every
/// call site.
pub trait ConfigStore {
    /// Read a single key; `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a single key (last-write-wins, idempotent).
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error.
    fn unset(&self, key: &str) -> Result<()>;

    /// List all `(key, value)` pairs whose key starts with `prefix`.
    fn enumerate(&self, prefix: &str) -> Result<Vec<(String, String)>>;

    /// True when writes are simulated rather than applied; callers use this
    /// to phrase their summary lines as intentions instead of results.
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// The real store: shells out to `git config --global`.
///
/// Honors `GIT_CONFIG_GLOBAL` implicitly since child processes inherit the
/// environment, which is how the integration tests isolate themselves.
pub struct GitConfigStore;

impl GitConfigStore {
    pub fn new() -> Self {
        Self
    }

    fn git_config(&self, args: &[&str]) -> Result<std::process::Output> {
        Command::new("git")
            .arg("config")
            .arg("--global")
            .args(args)
            .output()
            .with_context(|| format!("Failed to run git config --global {}", args.join(" ")))
    }
}

impl Default for GitConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for GitConfigStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let output = self.git_config(&["--get", key])?;
        if output.status.success() {
            let value = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
            Ok(Some(value))
        } else {
            // Exit code 1 means the key is not set
            match output.status.code() {
                Some(1) => Ok(None),
                _ => Err(anyhow::anyhow!(
                    "git config --get {key} failed: {}",
                    String::from_utf8_lossy(&output.stderr)
                )),
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        debug!("Setting {} = {}", key, value);
        let output = self.git_config(&[key, value])?;
        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "Failed to set {key}: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        debug!("Unsetting {}", key);
        let output = self.git_config(&["--unset", key])?;
        // Exit code 5 means the key was not set to begin with
        match output.status.code() {
            Some(0) | Some(5) => Ok(()),
            _ => Err(anyhow::anyhow!(
                "Failed to unset {key}: {}",
                String::from_utf8_lossy(&output.stderr)
            )),
        }
    }

    fn enumerate(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let pattern = format!("^{}", regex::escape(prefix));
        let output = self.git_config(&["--get-regexp", &pattern])?;
        if !output.status.success() {
            // Exit code 1 means no keys matched
            return match output.status.code() {
                Some(1) => Ok(Vec::new()),
                _ => Err(anyhow::anyhow!(
                    "git config --get-regexp {pattern} failed: {}",
                    String::from_utf8_lossy(&output.stderr)
                )),
            };
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut entries = Vec::new();
        for line in stdout.lines() {
            match line.split_once(' ') {
                Some((key, value)) => entries.push((key.to_string(), value.to_string())),
                // A key set to the empty string is emitted with no separator
                None => entries.push((line.to_string(), String::new())),
            }
        }
        Ok(entries)
    }
}

/// Dry-run store: reads pass through to the wrapped store (reads are
/// side-effect free), writes and unsets only log what would happen.
pub struct DryRunStore<S: ConfigStore> {
    inner: S,
}

impl<S: ConfigStore> DryRunStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: ConfigStore> ConfigStore for DryRunStore<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        debug!("[DRY RUN] Would set {} = {}", key, value);
        println!("{}", format!("DRY-RUN: Would set {key} = {value}").cyan());
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        debug!("[DRY RUN] Would unset {}", key);
        println!("{}", format!("DRY-RUN: Would unset {key}").cyan());
        Ok(())
    }

    fn enumerate(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        self.inner.enumerate(prefix)
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// In-memory store used by unit tests across the crate.
#[cfg(test)]
pub mod testing {
    use super::ConfigStore;
    use anyhow::Result;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }

        pub fn snapshot(&self) -> BTreeMap<String, String> {
            self.entries.borrow().clone()
        }
    }

    impl ConfigStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn unset(&self, key: &str) -> Result<()> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }

        fn enumerate(&self, prefix: &str) -> Result<Vec<(String, String)>> {
            Ok(self
                .entries
                .borrow()
                .iter()
                .filter(|(k, _)| k.starts_with(prefix))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::*;

    #[test]
    fn test_memory_store_last_write_wins() {
        let store = MemoryStore::new();
        store.write("user.name", "Alice").unwrap();
        store.write("user.name", "Bob").unwrap();
        assert_eq!(store.read("user.name").unwrap(), Some("Bob".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_unset_absent_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.unset("user.name").is_ok());
    }

    #[test]
    fn test_memory_store_enumerate_filters_by_prefix() {
        let store = MemoryStore::new();
        store.write("alias.co", "checkout").unwrap();
        store.write("alias.st", "status").unwrap();
        store.write("user.name", "Alice").unwrap();
        let aliases = store.enumerate("alias.").unwrap();
        assert_eq!(aliases.len(), 2);
        assert!(aliases.iter().all(|(k, _)| k.starts_with("alias.")));
    }

    #[test]
    fn test_dry_run_store_does_not_mutate() {
        let store = DryRunStore::new(MemoryStore::new());
        store.write("user.name", "Alice").unwrap();
        store.unset("user.email").unwrap();
        assert_eq!(store.read("user.name").unwrap(), None);
        assert!(store.enumerate("user.").unwrap().is_empty());
    }

    #[test]
    fn test_only_dry_run_store_reports_simulation() {
        assert!(DryRunStore::new(MemoryStore::new()).is_dry_run());
        assert!(!MemoryStore::new().is_dry_run());
        assert!(!GitConfigStore::new().is_dry_run());
    }

    #[test]
    fn test_dry_run_store_reads_pass_through() {
        let inner = MemoryStore::new();
        inner.write("user.name", "Alice").unwrap();
        let store = DryRunStore::new(inner);
        assert_eq!(store.read("user.name").unwrap(), Some("Alice".to_string()));
    }

    #[test]
    fn test_write_is_idempotent() {
        let store = MemoryStore::new();
        store.write("pull.rebase", "true").unwrap();
        let first = store.snapshot();
        store.write("pull.rebase", "true").unwrap();
        assert_eq!(first, store.snapshot());
    }
}

use assert_cmd::Command;
use assert_fs::prelude::*;

/// RAII guard for environment variables that restores the original value
/// when dropped, even if the test panics
#[allow(dead_code)]
pub struct EnvVarGuard {
    key: String,
    original: Option<String>,
}

#[allow(dead_code)]
impl EnvVarGuard {
    pub fn set<K: Into<String>, V: AsRef<std::ffi::OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = std::env::var(&key).ok();
        std::env::set_var(&key, value.as_ref());
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(ref val) = self.original {
            std::env::set_var(&self.key, val);
        } else {
            std::env::remove_var(&self.key);
        }
    }
}

/// Create a gitrig command whose global Git config is redirected into the
/// temp dir, so tests never touch the real ~/.gitconfig
#[allow(dead_code)]
pub fn gitrig_cmd(temp: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitrig").unwrap();
    cmd.current_dir(temp);
    cmd.env("GIT_CONFIG_GLOBAL", temp.child("gitconfig").path());
    cmd.env("HOME", temp.path());
    cmd
}

/// Set a key in the redirected global config with plain `git config`
#[allow(dead_code)]
pub fn git_config_set(temp: &assert_fs::TempDir, key: &str, value: &str) {
    let status = std::process::Command::new("git")
        .env("GIT_CONFIG_GLOBAL", temp.child("gitconfig").path())
        .args(["config", "--global", key, value])
        .status()
        .unwrap();
    assert!(status.success(), "failed to seed {key}");
}

/// Read a key back from the redirected global config
#[allow(dead_code)]
pub fn git_config_get(temp: &assert_fs::TempDir, key: &str) -> Option<String> {
    let output = std::process::Command::new("git")
        .env("GIT_CONFIG_GLOBAL", temp.child("gitconfig").path())
        .args(["config", "--global", "--get", key])
        .output()
        .unwrap();
    if output.status.success() {
        Some(
            String::from_utf8_lossy(&output.stdout)
                .trim_end()
                .to_string(),
        )
    } else {
        None
    }
}

//! Shared testing utilities for folio integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use folio::{AppConfig, PortfolioDocument};
use serde_json::Value;
use tempfile::TempDir;

/// Isolated application root plus an empty `$HOME` for the binary and git.
#[allow(dead_code)]
pub struct TestContext {
    home: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp directory for tests");
        let root = home.path().join("site");
        fs::create_dir_all(&root).expect("Failed to create site directory");
        Self { home, root }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Application root: holds the document, `output/`, and optionally a git repo.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Command for the compiled `folio` binary, rooted at [`Self::root`].
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("Failed to locate folio binary");
        cmd.current_dir(&self.root)
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.home())
            .env("RUST_LOG", "off")
            .env_remove("FOLIO_ROOT")
            .env_remove("GIT_BIN")
            .env_remove("GIT_TIMEOUT_SECS")
            .env_remove("HOST")
            .env_remove("PORT");
        cmd
    }

    /// Library configuration equivalent to what the binary sees.
    pub fn config(&self) -> AppConfig {
        AppConfig {
            root: self.root.clone(),
            host: "127.0.0.1".into(),
            port: 0,
            git_timeout: Duration::from_secs(30),
            git_program: "git".into(),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join("portfolio_data.json")
    }

    pub fn output_file(&self) -> PathBuf {
        self.root.join("output").join("index.html")
    }

    pub fn write_document(&self, document: &PortfolioDocument) {
        let json = serde_json::to_string_pretty(document).expect("Failed to serialize document");
        fs::write(self.data_file(), json).expect("Failed to write document");
    }

    pub fn read_document_json(&self) -> Value {
        let raw = fs::read_to_string(self.data_file()).expect("Failed to read document");
        serde_json::from_str(&raw).expect("Document should be valid JSON")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_file()).expect("Failed to read rendered page")
    }

    /// Turn the root into a git repository with a local identity.
    pub fn init_repo(&self) {
        self.git(&["init", "--quiet"]);
        self.git(&["config", "user.name", "Folio Tests"]);
        self.git(&["config", "user.email", "folio@example.com"]);
        self.git(&["config", "commit.gpgsign", "false"]);
    }

    /// Run git in the root, panicking on failure, and return stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let output = process::Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.home())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

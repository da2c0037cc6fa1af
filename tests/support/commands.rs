//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envsnap command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envsnap").expect("failed to find envsnap binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env_remove("ENVSNAP_BASE_URL");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envsnap init --repo <repo>`.
    pub fn init_cmd(&self, repo: &str) -> Output {
        self.cmd()
            .args(["init", "--repo", repo])
            .output()
            .expect("failed to run envsnap init")
    }

    /// Shortcut for `envsnap commit -m <message>`.
    pub fn commit(&self, message: &str) -> Output {
        self.cmd()
            .args(["commit", "-m", message])
            .output()
            .expect("failed to run envsnap commit")
    }

    /// Shortcut for `envsnap backup`.
    pub fn backup(&self) -> Output {
        self.cmd()
            .arg("backup")
            .output()
            .expect("failed to run envsnap backup")
    }

    /// Shortcut for `envsnap pull`.
    pub fn pull(&self) -> Output {
        self.cmd()
            .arg("pull")
            .output()
            .expect("failed to run envsnap pull")
    }

    /// Shortcut for `envsnap list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run envsnap list")
    }

    /// Shortcut for `envsnap completions <shell>`.
    pub fn completions(&self, shell: &str) -> Output {
        self.cmd()
            .args(["completions", shell])
            .output()
            .expect("failed to run envsnap completions")
    }
}

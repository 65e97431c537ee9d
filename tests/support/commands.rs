//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment variables that would let the SDK find real credentials.
const AWS_ENV: &[&str] = &[
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_PROFILE",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_WEB_IDENTITY_TOKEN_FILE",
    "AWS_ROLE_ARN",
    "AWS_CONTAINER_CREDENTIALS_RELATIVE_URI",
    "AWS_CONTAINER_CREDENTIALS_FULL_URI",
];

impl Test {
    /// Create a uscis-notifier command isolated from the host.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - AWS config and credentials files pointing into that home (absent)
    /// - instance metadata lookups disabled
    /// - colors disabled
    /// - current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("uscis-notifier").expect("failed to find uscis-notifier binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("AWS_CONFIG_FILE", self.home.path().join(".aws/config"));
        cmd.env(
            "AWS_SHARED_CREDENTIALS_FILE",
            self.home.path().join(".aws/credentials"),
        );
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("NOTIFIER_CONFIG");
        cmd.env_remove("NOTIFIER_LOG");
        for var in AWS_ENV {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `uscis-notifier setup --dry-run` with piped answers.
    pub fn setup_dry_run(&self, answers: &str) -> Output {
        self.cmd()
            .args(["setup", "--dry-run"])
            .write_stdin(answers)
            .output()
            .expect("failed to run uscis-notifier setup --dry-run")
    }

    /// Shortcut for `uscis-notifier setup` with piped answers.
    pub fn setup(&self, answers: &str) -> Output {
        self.cmd()
            .arg("setup")
            .write_stdin(answers)
            .output()
            .expect("failed to run uscis-notifier setup")
    }

    /// Shortcut for `uscis-notifier params`.
    pub fn params(&self) -> Output {
        self.cmd()
            .arg("params")
            .output()
            .expect("failed to run uscis-notifier params")
    }

    /// Shortcut for `uscis-notifier params --json`.
    pub fn params_json(&self) -> Output {
        self.cmd()
            .args(["params", "--json"])
            .output()
            .expect("failed to run uscis-notifier params --json")
    }

    /// Shortcut for `uscis-notifier config`.
    pub fn show_config(&self) -> Output {
        self.cmd()
            .arg("config")
            .output()
            .expect("failed to run uscis-notifier config")
    }
}

//! Config command - show where credentials come from.

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Print the resolved configuration.
pub fn execute(config: &Config) -> Result<()> {
    output::section("Configuration");
    output::kv("source ", &config.source);
    output::kv("project", &config.project.name);
    output::kv("profile", &config.aws.profile);
    output::kv("region ", &config.aws.region);
    Ok(())
}

//! Setup command.
//!
//! Prompts for the notifier's secrets and writes each one to the parameter
//! store. A failed write is reported and does not stop the others or change
//! the exit status.

use std::sync::Arc;
use tracing::info;

use crate::cli::{output, prompt};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::prompt::collect;
use crate::core::store::{DryRun, ParameterStore, Ssm};
use crate::core::upload::{upload_all, Outcome};
use crate::error::Result;

/// Collect answers and upload them.
pub fn execute(config: &Config, dry_run: bool) -> Result<()> {
    let mut prompter = prompt::for_stdin();
    let answers = collect(prompter.as_mut())?;
    let parameters = answers.into_parameters();

    info!(
        profile = %config.aws.profile,
        region = %config.aws.region,
        dry_run,
        "uploading parameters"
    );

    let rt = crate::cli::runtime()?;
    let summary = rt.block_on(async {
        let store: Arc<dyn ParameterStore> = if dry_run {
            Arc::new(DryRun)
        } else {
            Arc::new(Ssm::connect(&config.aws).await)
        };
        upload_all(store, parameters, |outcome| report(outcome, dry_run)).await
    });
    info!(
        uploaded = summary.uploaded.len(),
        failed = summary.failed.len(),
        "setup finished"
    );

    output::blank();
    output::success(&format!("{} is ready to deploy.", config.project.name));
    Ok(())
}

fn report(outcome: &Outcome, dry_run: bool) {
    match &outcome.result {
        Ok(()) if dry_run => output::dimmed(&format!(
            "would upload {} to {} ({})",
            outcome.description,
            constants::STORE_NAME,
            output::key(outcome.name)
        )),
        Ok(()) => output::success(&format!(
            "uploaded {} to {}",
            outcome.description,
            constants::STORE_NAME
        )),
        Err(reason) => output::error(&format!(
            "failed to upload {}: {}",
            outcome.description, reason
        )),
    }
}

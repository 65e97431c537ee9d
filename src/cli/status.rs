//! Status command.
//!
//! Reports which parameters already exist in the store. Values are not
//! decrypted.

use serde::Serialize;
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::store::{ParameterInfo, ParameterStore, Ssm};
use crate::error::Result;

#[derive(Serialize)]
struct Row {
    name: &'static str,
    #[serde(flatten)]
    info: Option<ParameterInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn check(store: &dyn ParameterStore) -> Vec<Row> {
    let mut rows = Vec::with_capacity(constants::PARAMETER_NAMES.len());
    for &name in constants::PARAMETER_NAMES {
        let row = match store.describe(name).await {
            Ok(info) => Row {
                name,
                info,
                error: None,
            },
            Err(e) => {
                debug!(name, error = %e, "describe failed");
                Row {
                    name,
                    info: None,
                    error: Some(e.to_string()),
                }
            }
        };
        rows.push(row);
    }
    rows
}

/// Show presence, type and version of every parameter.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let rt = crate::cli::runtime()?;
    let rows = rt.block_on(async {
        let store = Ssm::connect(&config.aws).await;
        check(&store).await
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    output::section(&format!(
        "{} ({}, {})",
        constants::STORE_NAME,
        config.aws.profile,
        config.aws.region
    ));
    for row in &rows {
        match (&row.info, &row.error) {
            (_, Some(e)) => output::error(&format!("{}  {}", output::key(row.name), e)),
            (Some(info), None) => output::success(&format!(
                "{}  {} v{}",
                output::key(row.name),
                info.kind,
                info.version
            )),
            (None, None) => output::warn(&format!("{}  missing", output::key(row.name))),
        }
    }
    Ok(())
}

//! Independent writes of every record.
//!
//! Each record is written by its own task. Outcomes are reported as tasks
//! finish, so their order is not the order records were issued in. A failed
//! write, including one whose task panicked, is reported and otherwise
//! ignored. Failures are logged at debug level; the operator-facing message
//! is left to the caller's `on_outcome`.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::core::parameter::Parameter;
use crate::core::store::ParameterStore;

/// Result of writing one record.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub name: &'static str,
    pub description: &'static str,
    /// `Err` carries the store error message
    pub result: std::result::Result<(), String>,
}

/// Names written and failed during one run.
#[derive(Debug, Default, Clone)]
pub struct UploadReport {
    pub uploaded: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

impl UploadReport {
    /// Number of writes that settled.
    pub fn attempted(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Issue one write per record without waiting between them, then wait for
/// all of them to settle.
///
/// `on_outcome` is called once per record in completion order.
pub async fn upload_all<F>(
    store: Arc<dyn ParameterStore>,
    parameters: Vec<Parameter>,
    mut on_outcome: F,
) -> UploadReport
where
    F: FnMut(&Outcome),
{
    debug!(
        count = parameters.len(),
        backend = store.name(),
        "issuing writes"
    );

    let mut tasks = JoinSet::new();
    let mut pending = HashMap::with_capacity(parameters.len());
    for parameter in parameters {
        let store = Arc::clone(&store);
        let name = parameter.name();
        let description = parameter.description();
        let handle = tasks.spawn(async move {
            let result = store.put(&parameter).await.map_err(|e| e.to_string());
            Outcome {
                name: parameter.name(),
                description: parameter.description(),
                result,
            }
        });
        pending.insert(handle.id(), (name, description));
    }

    let mut report = UploadReport::default();
    while let Some(joined) = tasks.join_next_with_id().await {
        let outcome = match joined {
            Ok((_, outcome)) => outcome,
            Err(e) => {
                // The record's name is only known through its task id here.
                let Some(&(name, description)) = pending.get(&e.id()) else {
                    debug!(error = %e, "unknown write task did not complete");
                    continue;
                };
                Outcome {
                    name,
                    description,
                    result: Err(format!("write task did not complete: {}", e)),
                }
            }
        };

        match &outcome.result {
            Ok(()) => {
                info!(name = outcome.name, "uploaded");
                report.uploaded.push(outcome.name);
            }
            Err(reason) => {
                debug!(name = outcome.name, error = %reason, "upload failed");
                report.failed.push((outcome.name, reason.clone()));
            }
        }
        on_outcome(&outcome);
    }

    debug!(
        uploaded = report.uploaded.len(),
        failed = report.failed.len(),
        "writes settled"
    );
    report
}

//! Dry-run backend.
//!
//! Accepts every write without contacting a store. Values are never
//! printed or logged.

use async_trait::async_trait;
use tracing::info;

use super::{ParameterInfo, ParameterStore};
use crate::core::parameter::Parameter;
use crate::error::Result;

/// Store that only reports what would be written.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRun;

#[async_trait]
impl ParameterStore for DryRun {
    async fn put(&self, parameter: &Parameter) -> Result<()> {
        info!(
            name = parameter.name(),
            kind = %parameter.kind(),
            overwrite = parameter.overwrite(),
            "dry run: skipping write"
        );
        Ok(())
    }

    async fn describe(&self, _name: &str) -> Result<Option<ParameterInfo>> {
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}

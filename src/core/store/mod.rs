//! Parameter store backends.
//!
//! Abstracts where records are written so the setup flow can target AWS
//! SSM, a dry run, or an in-memory store under test.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file next to `ssm.rs`
//! 3. Re-export from this module

use async_trait::async_trait;
use serde::Serialize;

use crate::core::parameter::Parameter;
use crate::error::Result;

mod dry_run;
mod ssm;

pub use dry_run::DryRun;
pub use ssm::{sdk_config, Ssm};

/// Metadata of a stored parameter. Never carries the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterInfo {
    /// Store-side type name (`String`, `SecureString`, ...)
    pub kind: String,
    pub version: i64,
}

/// Key-value store the setup command writes to.
///
/// Implementations are shared across concurrently running write tasks.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Write one record, honoring its overwrite flag.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Put` carrying the underlying store error.
    async fn put(&self, parameter: &Parameter) -> Result<()>;

    /// Look up a parameter's metadata without decrypting it.
    ///
    /// Returns `Ok(None)` if the parameter does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Describe` for any failure other than absence.
    async fn describe(&self, name: &str) -> Result<Option<ParameterInfo>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

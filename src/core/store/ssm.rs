//! AWS SSM Parameter Store backend.
//!
//! Credentials come from the named profile in the shared AWS config files
//! and the region from `notifier.toml`. Nothing else in the crate chooses a
//! profile or region.

use async_trait::async_trait;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::ParameterType;
use tracing::trace;

use super::{ParameterInfo, ParameterStore};
use crate::core::config::Aws;
use crate::core::parameter::{Parameter, ParameterKind};
use crate::error::{Result, StoreError};

/// SSM-backed parameter store.
#[derive(Clone)]
pub struct Ssm {
    client: aws_sdk_ssm::Client,
}

impl Ssm {
    /// Connect using the configured profile and region.
    pub async fn connect(aws: &Aws) -> Self {
        let sdk = sdk_config(aws).await;
        Self::from_sdk(&sdk)
    }

    /// Build from an already loaded SDK configuration.
    pub fn from_sdk(sdk: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_ssm::Client::new(sdk),
        }
    }
}

/// Load SDK configuration pinned to the configured profile and region.
///
/// Credentials come only from the named profile in the shared config files.
/// Environment keys, web identity, container and instance metadata
/// credentials are never consulted. They are resolved lazily on the first
/// request, so a missing profile surfaces as a per-write failure.
pub async fn sdk_config(aws: &Aws) -> SdkConfig {
    trace!(profile = %aws.profile, region = %aws.region, "loading AWS config");
    let credentials = ProfileFileCredentialsProvider::builder()
        .profile_name(&aws.profile)
        .build();
    aws_config::defaults(BehaviorVersion::latest())
        .profile_name(&aws.profile)
        .credentials_provider(credentials)
        .region(Region::new(aws.region.clone()))
        .load()
        .await
}

fn parameter_type(kind: ParameterKind) -> ParameterType {
    match kind {
        ParameterKind::Plain => ParameterType::String,
        ParameterKind::Secret => ParameterType::SecureString,
    }
}

#[async_trait]
impl ParameterStore for Ssm {
    async fn put(&self, parameter: &Parameter) -> Result<()> {
        trace!(name = parameter.name(), kind = %parameter.kind(), "putting parameter");

        let output = self
            .client
            .put_parameter()
            .name(parameter.name())
            .r#type(parameter_type(parameter.kind()))
            .value(parameter.value())
            .description(parameter.description())
            .overwrite(parameter.overwrite())
            .send()
            .await
            .map_err(|e| StoreError::Put {
                name: parameter.name().to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        trace!(
            name = parameter.name(),
            version = output.version(),
            "parameter written"
        );
        Ok(())
    }

    async fn describe(&self, name: &str) -> Result<Option<ParameterInfo>> {
        trace!(name, "getting parameter metadata");

        let result = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(false)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                if e
                    .as_service_error()
                    .map(|se| se.is_parameter_not_found())
                    .unwrap_or(false)
                {
                    return Ok(None);
                }
                return Err(StoreError::Describe {
                    name: name.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                }
                .into());
            }
        };

        Ok(output.parameter().map(|p| ParameterInfo {
            kind: p
                .r#type()
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            version: p.version(),
        }))
    }

    fn name(&self) -> &'static str {
        "aws-ssm"
    }
}

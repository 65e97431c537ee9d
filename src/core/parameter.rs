//! Parameter records.
//!
//! A record is one named value headed for the parameter store. Records are
//! built fresh from the operator's answers on every run and never persisted
//! locally.

use serde::Serialize;
use std::fmt;
use zeroize::Zeroizing;

/// How the store should hold a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Stored as plain text (`String`)
    Plain,
    /// Encrypted at rest (`SecureString`)
    Secret,
}

impl ParameterKind {
    /// The parameter type name used by SSM.
    pub fn as_ssm(&self) -> &'static str {
        match self {
            ParameterKind::Plain => "String",
            ParameterKind::Secret => "SecureString",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ssm())
    }
}

/// A single record to write.
#[derive(Clone)]
pub struct Parameter {
    name: &'static str,
    kind: ParameterKind,
    value: Zeroizing<String>,
    description: &'static str,
    overwrite: bool,
}

impl Parameter {
    /// Create an encrypted record. Existing values are always overwritten.
    pub fn secret(name: &'static str, value: impl Into<String>, description: &'static str) -> Self {
        Self {
            name,
            kind: ParameterKind::Secret,
            value: Zeroizing::new(value.into()),
            description,
            overwrite: true,
        }
    }

    /// Hierarchical path, e.g. `/twilio/auth_token`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// The operator-supplied value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.kind {
            ParameterKind::Plain => self.value.as_str(),
            ParameterKind::Secret => "<redacted>",
        };
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &value)
            .field("description", &self.description)
            .field("overwrite", &self.overwrite)
            .finish()
    }
}

//! Core library components.
//!
//! Configuration, the fixed parameter records, the operator questions, and
//! the store backends the records are written to.

pub mod config;
pub mod constants;
pub mod parameter;
pub mod prompt;
pub mod store;
pub mod upload;

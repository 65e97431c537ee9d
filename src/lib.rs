//! uscis-notifier - one-time setup for the USCIS case status notifier.
//!
//! Prompts for the case receipt number, Twilio credentials and phone numbers,
//! then writes each one as an encrypted parameter to AWS SSM Parameter Store
//! for the notification Lambda to read.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── setup         # Prompt and upload
//! │   ├── params        # List the fixed parameters
//! │   ├── status        # Check what the store holds
//! │   ├── show_config   # Show profile and region
//! │   ├── prompt        # Terminal prompts (dialoguer)
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # notifier.toml (packaged or on disk)
//!     ├── parameter     # Parameter records
//!     ├── prompt        # Questions, answers, Prompter trait
//!     ├── store/        # ParameterStore trait, SSM and dry-run backends
//!     └── upload        # Independent concurrent writes
//! ```

pub mod cli;
pub mod core;
pub mod error;

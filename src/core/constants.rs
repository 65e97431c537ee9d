//! Constants used throughout uscis-notifier.
//!
//! Centralizes the fixed parameter names and file names.

/// Configuration file looked up in the current directory (notifier.toml).
pub const CONFIG_FILE: &str = "notifier.toml";

/// Configuration shipped with the crate, used when no file is found on disk.
pub const PACKAGED_CONFIG: &str = include_str!("../../notifier.toml");

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "NOTIFIER_LOG";

/// Store display name used in operator messages.
pub const STORE_NAME: &str = "AWS SSM Parameter Store";

pub const TWILIO_ACCOUNT_SID: &str = "/twilio/account_sid";
pub const TWILIO_AUTH_TOKEN: &str = "/twilio/auth_token";
pub const TWILIO_PHONE_NUMBER: &str = "/twilio/phonenumber";
pub const USCIS_RECEIPT_NUMBER: &str = "/uscis/receipt_number";
pub const USCIS_RECIPIENT_NUMBER: &str = "/uscis/recipient_number";

/// Every parameter the setup command writes, in write order.
pub const PARAMETER_NAMES: &[&str] = &[
    TWILIO_ACCOUNT_SID,
    TWILIO_AUTH_TOKEN,
    TWILIO_PHONE_NUMBER,
    USCIS_RECEIPT_NUMBER,
    USCIS_RECIPIENT_NUMBER,
];

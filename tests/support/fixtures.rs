//! Test fixtures and constants.

/// Answers in prompt order: receipt, account SID, auth token, Twilio number,
/// recipient number.
pub const ANSWERS: &str = "IOE0912345678\nAC0123456789abcdef\ntw-auth-token-s3cret\n+15550001111\n+15550002222\n";

/// The auth token in [`ANSWERS`]; must never appear in output.
pub const AUTH_TOKEN: &str = "tw-auth-token-s3cret";

/// Every parameter name setup writes.
pub const PARAMETER_NAMES: &[&str] = &[
    "/twilio/account_sid",
    "/twilio/auth_token",
    "/twilio/phonenumber",
    "/uscis/receipt_number",
    "/uscis/recipient_number",
];

/// Every record description, as shown to the operator.
pub const DESCRIPTIONS: &[&str] = &[
    "Twilio Account SID",
    "Twilio Auth Token",
    "Twilio Phone Number",
    "USCIS Case Receipt Number",
    "Recipient's Number",
];

/// A config on disk whose profile does not exist anywhere.
pub const MISSING_PROFILE_CONFIG: &str = r#"
[project]
name = "notifier-under-test"

[aws]
profile = "uscis-notifier-test-missing"
region = "us-west-2"
"#;

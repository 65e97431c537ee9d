//! Operator questions and answers.
//!
//! The five questions are asked in a fixed order; their answers map onto the
//! five fixed parameter records. Where answers come from is abstracted by
//! [`Prompter`] so the same flow serves a terminal and piped stdin.

use std::io::BufRead;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::parameter::Parameter;
use crate::error::{PromptError, Result};

/// Which answer a question fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ReceiptNumber,
    AccountSid,
    AuthToken,
    TwilioNumber,
    RecipientNumber,
}

/// A single operator question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub field: Field,
    pub label: &'static str,
    /// Input is hidden while typing
    pub masked: bool,
}

/// Questions in the order they are asked.
pub const QUESTIONS: [Question; 5] = [
    Question {
        field: Field::ReceiptNumber,
        label: "USCIS Case Receipt Number",
        masked: false,
    },
    Question {
        field: Field::AccountSid,
        label: "Twilio Account SID",
        masked: false,
    },
    Question {
        field: Field::AuthToken,
        label: "Twilio Auth Token",
        masked: true,
    },
    Question {
        field: Field::TwilioNumber,
        label: "Twilio Phone Number (include country code)",
        masked: false,
    },
    Question {
        field: Field::RecipientNumber,
        label: "Recipient Number (include country code)",
        masked: false,
    },
];

/// Source of answers.
pub trait Prompter {
    /// Ask one question and return the raw answer.
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer could be read.
    fn ask(&mut self, question: &Question) -> Result<String>;
}

/// Answers to every question.
#[derive(Default)]
pub struct Answers {
    pub receipt_number: Zeroizing<String>,
    pub account_sid: Zeroizing<String>,
    pub auth_token: Zeroizing<String>,
    pub twilio_number: Zeroizing<String>,
    pub recipient_number: Zeroizing<String>,
}

impl Answers {
    fn slot(&mut self, field: Field) -> &mut Zeroizing<String> {
        match field {
            Field::ReceiptNumber => &mut self.receipt_number,
            Field::AccountSid => &mut self.account_sid,
            Field::AuthToken => &mut self.auth_token,
            Field::TwilioNumber => &mut self.twilio_number,
            Field::RecipientNumber => &mut self.recipient_number,
        }
    }

    /// Map answers onto the parameter records, in write order.
    pub fn into_parameters(self) -> Vec<Parameter> {
        vec![
            Parameter::secret(
                constants::TWILIO_ACCOUNT_SID,
                self.account_sid.as_str(),
                "Twilio Account SID",
            ),
            Parameter::secret(
                constants::TWILIO_AUTH_TOKEN,
                self.auth_token.as_str(),
                "Twilio Auth Token",
            ),
            Parameter::secret(
                constants::TWILIO_PHONE_NUMBER,
                self.twilio_number.as_str(),
                "Twilio Phone Number",
            ),
            Parameter::secret(
                constants::USCIS_RECEIPT_NUMBER,
                self.receipt_number.as_str(),
                "USCIS Case Receipt Number",
            ),
            Parameter::secret(
                constants::USCIS_RECIPIENT_NUMBER,
                self.recipient_number.as_str(),
                "Recipient's Number",
            ),
        ]
    }
}

/// Ask every question in order.
///
/// # Errors
///
/// Stops at the first question the prompter cannot answer.
pub fn collect(prompter: &mut dyn Prompter) -> Result<Answers> {
    let mut answers = Answers::default();
    for question in &QUESTIONS {
        let answer = prompter.ask(question)?;
        debug!(question = question.label, "answered");
        *answers.slot(question.field) = Zeroizing::new(answer);
    }
    Ok(answers)
}

/// Reads one answer per line, for piped stdin.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for Lines<R> {
    fn ask(&mut self, question: &Question) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::MissingAnswer(question.label).into());
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

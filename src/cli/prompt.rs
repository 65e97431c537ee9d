//! Terminal prompts.

use dialoguer::{Input, Password};
use std::io::{self, IsTerminal};

use crate::core::prompt::{Lines, Prompter, Question};
use crate::error::{PromptError, Result};

/// Interactive prompter; masked questions use hidden input.
pub struct Terminal;

impl Prompter for Terminal {
    fn ask(&mut self, question: &Question) -> Result<String> {
        let answer = if question.masked {
            Password::new()
                .with_prompt(question.label)
                .interact()
                .map_err(PromptError::from)?
        } else {
            Input::<String>::new()
                .with_prompt(question.label)
                .interact_text()
                .map_err(PromptError::from)?
        };
        Ok(answer)
    }
}

/// Prompt on the terminal, or read one answer per line when stdin is piped.
pub fn for_stdin() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(Terminal)
    } else {
        Box::new(Lines::new(io::stdin().lock()))
    }
}

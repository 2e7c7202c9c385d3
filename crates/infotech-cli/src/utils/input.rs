//! User input utilities for interactive command-line prompts.
//!
//! This module provides functions for collecting user input from stdin
//! and the [`StdinPrompter`] handlers use through the `Prompter` port.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use infotech_core::Prompter;

/// Prompts the user for a string input.
///
/// Displays a prompt message and waits for the user to enter text.
/// The input is read from stdin and returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if reading from stdin fails or stdin is closed.
pub fn prompt_string(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    if read == 0 {
        bail!("No input available (stdin is closed)");
    }

    Ok(input.trim().to_string())
}

/// Prompts the user for a string input with a default value.
///
/// If the user just presses Enter, the default value is returned.
pub fn prompt_string_with_default(prompt: &str, default: Option<&str>) -> Result<String> {
    let input = match default {
        Some(default_val) => prompt_string(&format!("{prompt} [{default_val}]"))?,
        None => prompt_string(prompt)?,
    };

    match default {
        Some(default_val) if input.is_empty() => Ok(default_val.to_string()),
        _ => Ok(input),
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

fn parse_confirmation(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// [`Prompter`] backed by the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub const fn new() -> Self {
        Self
    }
}

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        prompt_string_with_default(question, default)
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        prompt_confirmation(question)
    }
}

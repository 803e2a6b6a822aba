//! Line-based prompts on the controlling terminal.
//!
//! The user selector shows a 1-based numbered menu and reprompts on junk
//! input; that is the only locally-recovered error in the tool. Password
//! entry is hidden via `rpassword`.

use super::UIError;
use crate::store::HostRecord;
use rpassword::prompt_password;
use std::io::{Write, stdin, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Choice {
    Selected(usize),
    OutOfRange,
    NotANumber,
}

/// Classifies one line of selector input against a menu of `count` entries.
/// Returns a zero-based index on success.
pub(crate) fn parse_choice(input: &str, count: usize) -> Choice {
    let Ok(number) = input.trim().parse::<usize>() else {
        return Choice::NotANumber;
    };
    if (1..=count).contains(&number) {
        Choice::Selected(number - 1)
    } else {
        Choice::OutOfRange
    }
}

/// Asks the user to pick one of several records for `host`.
/// Loops until a valid number is entered; EOF cancels.
pub fn select_user(host: &str, candidates: &[HostRecord]) -> Result<HostRecord, UIError> {
    println!("\nHost '{}' has multiple users:\n", host);
    for (index, record) in candidates.iter().enumerate() {
        println!("  [{}] {}", index + 1, record.user);
    }

    loop {
        print!("\nSelect a user (enter number): ");
        stdout().flush()?;

        let line = read_line()?;
        match parse_choice(&line, candidates.len()) {
            Choice::Selected(index) => return Ok(candidates[index].clone()),
            Choice::OutOfRange => println!("Invalid number, enter a value between 1 and {}", candidates.len()),
            Choice::NotANumber => println!("Please enter a valid number"),
        }
    }
}

/// Double hidden password prompt for `add`. The entries must match and be
/// non-empty.
pub fn prompt_new_password() -> Result<String, UIError> {
    let password = prompt_password("Enter password: ")?;
    let confirm = prompt_password("Confirm password: ")?;

    if password != confirm {
        return Err(UIError::PasswordMismatch);
    }
    if password.is_empty() {
        return Err(UIError::EmptyPassword);
    }

    Ok(password)
}

fn read_line() -> Result<String, UIError> {
    let mut line = String::new();
    let bytes = stdin().read_line(&mut line)?;
    if bytes == 0 {
        // EOF on stdin ends the prompt loop as a cancellation.
        return Err(UIError::Cancelled);
    }
    Ok(line)
}

#[cfg(test)]
#[path = "../test/ui/prompt.rs"]
mod tests;

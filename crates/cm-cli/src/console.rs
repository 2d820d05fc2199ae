//! Console operator
//!
//! Presents each pending submission on the terminal and collects the
//! operator's decision. The prompt loop is generic over its input and
//! output streams so the re-prompt behavior is testable without a
//! terminal.

use cm_core::error::{ModError, Result};
use cm_core::submission::Submission;
use cm_core::triage::{Decision, Operator};
use colored::Colorize;
use console::Term;
use std::io::{self, BufRead, Write};

/// Read one decision, re-prompting until the input is `1`, `2` or `3`.
///
/// Invalid input never advances and never fails; only a closed input
/// stream is an error.
pub fn read_decision<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Decision> {
    loop {
        write!(output, "Please choose an option: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while awaiting a decision",
            ));
        }

        match Decision::parse(&line) {
            Some(decision) => return Ok(decision),
            None => writeln!(output, "Please enter a valid option (1, 2 or 3)")?,
        }
    }
}

/// Interactive terminal operator
pub struct ConsoleOperator {
    term: Term,
}

impl ConsoleOperator {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn print_summary(&self, submission: &Submission) {
        println!("{}", "Current Comment Submission".cyan().bold());
        println!("================");
        println!("Name: {}", submission.name);
        println!("Page: {}", submission.target_path.yellow());
        println!("Date: {}", submission.display_date());
        println!("Comment:");
        println!("{}", submission.body);
        println!();
        println!("----------------");
        println!("{}", "Select an Option".bold());
        println!("1. Skip comment");
        println!("2. Approve comment");
        println!("3. Remove comment ({})", "irreversible".red());
    }
}

impl Default for ConsoleOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl Operator for ConsoleOperator {
    fn review(&self, submission: &Submission) -> Result<Decision> {
        // Screen clearing is cosmetic; a dumb terminal just scrolls
        let _ = self.term.clear_screen();
        self.print_summary(submission);

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        read_decision(&mut input, &mut output).map_err(ModError::Io)
    }

    fn acknowledge(&self) -> Result<()> {
        println!();
        println!("{}", "Press Enter to continue".dimmed());
        self.term.read_line().map_err(ModError::Io)?;
        Ok(())
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_valid_decision_first_try() {
        let mut input = Cursor::new(b"2\n".to_vec());
        let mut output = Vec::new();
        let decision = read_decision(&mut input, &mut output).unwrap();
        assert_eq!(decision, Decision::Approve);
    }

    #[test]
    fn test_invalid_input_reprompts_until_valid() {
        let mut input = Cursor::new(b"x\n9\n\n3\n".to_vec());
        let mut output = Vec::new();
        let decision = read_decision(&mut input, &mut output).unwrap();
        assert_eq!(decision, Decision::Reject);

        let transcript = String::from_utf8(output).unwrap();
        // One error line per invalid attempt, none after the valid one
        assert_eq!(
            transcript.matches("Please enter a valid option").count(),
            3
        );
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let err = read_decision(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

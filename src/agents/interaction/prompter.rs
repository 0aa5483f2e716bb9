use crate::error::{MaintError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Source of operator answers.
///
/// Staging and commit logic only see answered lines, so they can be driven
/// without a terminal. An exhausted input stream is an interrupt.
pub trait Prompter {
    /// Show `question` and return the operator's trimmed answer
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers from any line-oriented input, stdin by default
pub struct TerminalPrompter<I: BufRead> {
    input: I,
}

impl TerminalPrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<I: BufRead> TerminalPrompter<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: BufRead> Prompter for TerminalPrompter<I> {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{} ", question.bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Err(MaintError::UserCancelled);
        }
        Ok(line.trim().to_string())
    }
}

/// `y` / `yes`, case-insensitive
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines() {
        let mut prompter = TerminalPrompter::new(Cursor::new("  yes \nFix deps\n"));
        assert_eq!(prompter.ask("Continue?").unwrap(), "yes");
        assert_eq!(prompter.ask("Message:").unwrap(), "Fix deps");
    }

    #[test]
    fn end_of_input_is_an_interrupt() {
        let mut prompter = TerminalPrompter::new(Cursor::new(""));
        let err = prompter.ask("Continue?").unwrap_err();
        assert!(matches!(err, MaintError::UserCancelled));
    }

    #[test]
    fn recognises_affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("YES"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("a"));
    }
}

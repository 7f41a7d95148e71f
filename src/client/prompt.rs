//! User interaction the client needs besides rendering: yes/no confirmation and
//! blocking alerts.

use std::io::{BufRead, Write};

pub trait Prompt {
    /// Asks a yes/no question. Only an explicit yes confirms.
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows a message the user has to see before continuing.
    fn alert(&mut self, message: &str);
}

/// Line-oriented prompt over any reader/writer pair (stdin/stderr in the CLI).
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answers every confirmation with yes without reading input.
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        // Write failures only lose the question text; the answer is still read.
        let _ = write!(self.output, "{} [y/N] ", message);
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.output, "! {}", message);
    }
}

// Console: the interactive surface the planning session talks to

use anyhow::{bail, Context, Result};
use crossterm::style::Stylize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line-oriented user interaction.
///
/// `ask` returns the user's reply with surrounding whitespace removed; the
/// other methods print one line each.
pub trait Console {
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Plain informational output
    fn say(&mut self, line: &str);

    /// Progress notices ("Generating ...")
    fn status(&mut self, line: &str);

    /// Localized error messages
    fn warn(&mut self, line: &str);

    /// Final success line
    fn success(&mut self, line: &str);
}

/// Terminal console backed by rustyline
pub struct TerminalConsole {
    editor: DefaultEditor,
}

impl TerminalConsole {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize line editor")?;
        Ok(Self { editor })
    }
}

impl Console for TerminalConsole {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        // rustyline redraws the prompt on one line, so anything before the
        // last newline is printed ahead of it
        let (preamble, inline) = split_prompt(prompt);
        if let Some(preamble) = preamble {
            println!("{}", preamble);
        }

        match self.editor.readline(inline) {
            Ok(line) => Ok(line.trim().to_string()),
            // Ctrl+D answers with an empty line
            Err(ReadlineError::Eof) => {
                println!();
                Ok(String::new())
            }
            Err(ReadlineError::Interrupted) => bail!("Interrupted"),
            Err(err) => Err(err).context("Failed to read input"),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn status(&mut self, line: &str) {
        println!("{}", line.cyan());
    }

    fn warn(&mut self, line: &str) {
        eprintln!("{}", line.red().bold());
    }

    fn success(&mut self, line: &str) {
        println!("{}", line.green().bold());
    }
}

/// Split a prompt into the lines printed up front and the inline remainder
fn split_prompt(prompt: &str) -> (Option<&str>, &str) {
    match prompt.rfind('\n') {
        Some(idx) => (Some(&prompt[..idx]), &prompt[idx + 1..]),
        None => (None, prompt),
    }
}

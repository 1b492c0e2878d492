//! Operator consoles
//!
//! The session talks to the operator through the [`Console`] trait:
//! - [`TerminalConsole`] - interactive prompts on a terminal (dialoguer)
//! - [`LineConsole`] - plain line-oriented input and output, for piped
//!   input and for driving sessions in tests

use ::console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{self, BufRead, Write};

/// Line-based operator interaction
pub trait Console {
    /// Show `prompt` and read one line of input, without the line ending
    ///
    /// # Errors
    ///
    /// Fails when input can no longer be read, including end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Show informational text
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Show an error or refusal message
    fn alert(&mut self, text: &str) -> io::Result<()>;
}

/// Interactive terminal console
pub struct TerminalConsole {
    theme: ColorfulTheme,
}

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        println!("{text}");
        Ok(())
    }

    fn alert(&mut self, text: &str) -> io::Result<()> {
        println!("{}", style(text).red().bold());
        Ok(())
    }
}

/// Console over any line reader and writer
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    /// Recover the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        // Keep the transcript readable when input is not echoed
        writeln!(self.output)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn alert(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

//! Line oriented text console used by [`ConsolePrompt`](super::prompt::ConsolePrompt).

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};
use log::warn;

/// Input/output surface of a text console.
pub trait Console {
    /// Write one line of text.
    fn println(&mut self, line: &str) -> Result<()>;

    /// Show `prompt` and block until the user picks one of `allowed`.
    ///
    /// Implementations own the read-validate-reprompt loop, the returned label
    /// is always one of `allowed`, and `default` is picked when the user
    /// enters nothing.
    fn prompt_selection(&mut self, prompt: &str, allowed: &[&str], default: &str)
        -> Result<String>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn println(&mut self, line: &str) -> Result<()> {
        (**self).println(line)
    }

    fn prompt_selection(
        &mut self,
        prompt: &str,
        allowed: &[&str],
        default: &str,
    ) -> Result<String> {
        (**self).prompt_selection(prompt, allowed, default)
    }
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl TextConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process' standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one line, `None` means the input reached its end.
    fn readline(&mut self) -> Result<Option<String>> {
        let mut input_buf = String::new();
        let read = self
            .input
            .read_line(&mut input_buf)
            .context("unable to read from standard input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input_buf.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn println(&mut self, line: &str) -> Result<()> {
        writeln!(&mut self.output, "{line}")?;
        Ok(())
    }

    fn prompt_selection(
        &mut self,
        prompt: &str,
        allowed: &[&str],
        default: &str,
    ) -> Result<String> {
        let default_badge = format!("[{}: {default}]", t!("default"));

        loop {
            writeln!(&mut self.output, "{} {default_badge}", prompt.trim_end())?;
            write!(&mut self.output, "> ")?;
            _ = self.output.flush();

            let Some(input) = self.readline()? else {
                // nothing more to read, there is no one to answer but the default
                writeln!(&mut self.output)?;
                return Ok(default.to_string());
            };

            if input.is_empty() {
                return Ok(default.to_string());
            }
            // labels coming from user catalogs may carry stray whitespace
            if let Some(label) = allowed
                .iter()
                .find(|l| l.trim().eq_ignore_ascii_case(&input))
            {
                return Ok(label.to_string());
            }
            warn!(
                "{}",
                t!(
                    "invalid_selection",
                    actual = input,
                    expect = allowed.join(", ")
                )
            );
        }
    }
}

use crate::application::{TextStyle, Theme};
use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub trait LineReader {
    /// Reads one line without its terminator. `None` means input is closed.
    fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait StyledWriter {
    fn write_styled(&mut self, text: &str, style: TextStyle) -> Result<()>;

    fn write(&mut self, text: &str) -> Result<()> {
        self.write_styled(text, TextStyle::Plain)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Everything a command handler needs to talk to the user.
pub trait Console: LineReader + StyledWriter {}

impl<T: LineReader + StyledWriter + ?Sized> Console for T {}

/// Line-oriented console over any reader/writer pair, stdin/stdout in practice.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    theme: Theme,
    color: bool,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio(theme: Theme) -> Self {
        let output = io::stdout();
        let color = output.is_tty();
        Self::new(io::stdin().lock(), output, theme, color)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, theme: Theme, color: bool) -> Self {
        Self {
            input,
            output,
            theme,
            color,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineReader for Terminal<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("Failed to flush console output")?;

        // Bytes that are not UTF-8 become U+FFFD rather than ending the session
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .context("Failed to read console input")?;
        if read == 0 {
            return Ok(None);
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl<R: BufRead, W: Write> StyledWriter for Terminal<R, W> {
    fn write_styled(&mut self, text: &str, style: TextStyle) -> Result<()> {
        let rendered = if self.color {
            self.theme.render(text, style)
        } else {
            text.to_string()
        };
        self.output
            .write_all(rendered.as_bytes())
            .context("Failed to write console output")
    }
}

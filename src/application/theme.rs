use crossterm::style::{Color, Stylize};

/// How a run of console text should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Highlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPair {
    pub fg: Color,
}

impl ColorPair {
    pub fn new(fg: Color) -> Self {
        Self { fg }
    }

    /// Wraps `text` in colour escapes; the colours are reset right after it.
    pub fn colorize(&self, text: &str) -> String {
        format!("{}", text.with(self.fg))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub highlight: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: ColorPair::new(Color::Red),
        }
    }
}

impl Theme {
    pub fn render(&self, text: &str, style: TextStyle) -> String {
        match style {
            TextStyle::Plain => text.to_string(),
            TextStyle::Highlight => self.highlight.colorize(text),
        }
    }
}

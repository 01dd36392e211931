//! Terminal styling and syntax highlighting for quire.
//!
//! [`Palette`] styles headers, labels and status messages, and collapses to plain text when
//! output is not a terminal or `NO_COLOR` is set. [`Highlighter`] colors post bodies
//! (Markdown) and configuration (TOML).

#![warn(missing_docs)]

use std::{
    env,
    io::{self, IsTerminal},
};

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// ANSI escape codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Magenta text (tags and categories).
    pub const MAGENTA: &str = "\x1b[35m";
    /// Green text (success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim text (secondary details).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Styles short pieces of terminal output, or passes them through when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whether escape codes are emitted.
    enabled: bool,
}

impl Palette {
    /// A palette that emits escape codes.
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    /// A palette that returns text unchanged.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Colors stdout only when it is a terminal and `NO_COLOR` is unset or empty.
    pub fn detect() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            enabled: !no_color && io::stdout().is_terminal(),
        }
    }

    /// Returns true if this palette emits escape codes.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in `codes` followed by a reset.
    fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let mut out = codes.concat();
        out.push_str(text);
        out.push_str(colors::RESET);
        out
    }

    /// Bold cyan, for section headers and post titles.
    pub fn header(&self, text: &str) -> String {
        self.paint(&[colors::BOLD, colors::CYAN], text)
    }

    /// Bold, for field labels.
    pub fn label(&self, text: &str) -> String {
        self.paint(&[colors::BOLD], text)
    }

    /// Dimmed, for secondary details such as dates and paths.
    pub fn dim(&self, text: &str) -> String {
        self.paint(&[colors::DIM], text)
    }

    /// Magenta `#tag` marker.
    pub fn tag(&self, text: &str) -> String {
        self.paint(&[colors::MAGENTA], &format!("#{text}"))
    }

    /// Magenta category name in brackets.
    pub fn category(&self, text: &str) -> String {
        self.paint(&[colors::MAGENTA], &format!("[{text}]"))
    }

    /// A one-letter badge, such as a post's title initial.
    pub fn badge(&self, letter: &str) -> String {
        self.paint(&[colors::BOLD, colors::MAGENTA], &format!("({letter})"))
    }

    /// Green, for success messages.
    pub fn success(&self, text: &str) -> String {
        self.paint(&[colors::GREEN], text)
    }

    /// Yellow, for warnings.
    pub fn warning(&self, text: &str) -> String {
        self.paint(&[colors::YELLOW], text)
    }

    /// Red, for errors.
    pub fn error(&self, text: &str) -> String {
        self.paint(&[colors::RED], text)
    }

    /// A dimmed horizontal rule.
    pub fn rule(&self, width: usize) -> String {
        self.dim(&"─".repeat(width))
    }
}

/// A syntax highlighter for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML from the two-face extras.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self::with_theme(EmbeddedThemeName::Dracula)
    }

    /// Creates a highlighter with the given embedded theme.
    pub fn with_theme(theme: EmbeddedThemeName) -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme,
        }
    }

    /// Highlights a post body.
    pub fn highlight_markdown(&self, content: &str) -> String {
        self.highlight(content, "md")
    }

    /// Highlights configuration.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights `content` using the syntax named by extension or name.
    ///
    /// Unknown syntaxes are highlighted as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));
        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_passes_text_through() {
        let p = Palette::plain();
        assert_eq!(p.header("Title"), "Title");
        assert_eq!(p.dim("2025-01-01"), "2025-01-01");
        assert_eq!(p.tag("rust"), "#rust");
        assert_eq!(p.category("Life"), "[Life]");
        assert_eq!(p.badge("H"), "(H)");
        assert_eq!(p.rule(3), "───");
        assert!(!p.is_enabled());
    }

    #[test]
    fn test_colored_palette_wraps_text() {
        let p = Palette::colored();
        let h = p.header("Title");
        assert!(h.starts_with(colors::BOLD));
        assert!(h.contains(colors::CYAN));
        assert!(h.ends_with(colors::RESET));
        assert!(h.contains("Title"));
        assert_eq!(p.error("x"), format!("{}x{}", colors::RED, colors::RESET));
    }

    #[test]
    fn test_highlight_markdown() {
        let output = Highlighter::new().highlight_markdown("# Header\n\nSome **bold** text.\n");
        assert!(output.contains("\x1b["));
        assert!(output.ends_with(colors::RESET));
    }

    #[test]
    fn test_highlight_toml() {
        let output = Highlighter::new().highlight_toml("[listing]\npage_size = 6\n");
        assert!(output.contains("\x1b["));
        assert!(output.contains("page_size"));
    }

    #[test]
    fn test_unknown_syntax_falls_back_to_plain_text() {
        let output = Highlighter::new().highlight("just words", "no-such-syntax");
        assert!(output.contains("just words"));
    }

    #[test]
    fn test_required_syntaxes_available() {
        let ss = extra_syntaxes();
        assert!(ss.find_syntax_by_extension("toml").is_some());
        assert!(ss.find_syntax_by_extension("md").is_some());
    }
}

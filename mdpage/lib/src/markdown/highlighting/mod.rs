//! Syntax highlighting for fenced code blocks.
//!
//! Grammars and themes come from two-face; tokens are emitted as `span`
//! elements with inline foreground colours so the page needs no extra CSS.

mod grammars;
mod themes;

pub use themes::CodeTheme;

use crate::markdown::{MarkdownError, MarkdownResult};
use syntect::easy::HighlightLines;
use syntect::highlighting::Theme as SyntectTheme;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Highlights code with a fixed theme.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::markdown::highlighting::{CodeHighlighter, CodeTheme};
///
/// let highlighter = CodeHighlighter::new(CodeTheme::Github);
/// let html = highlighter.highlight("let x = 1;\n", "rust").unwrap();
/// assert!(html.contains("<span style=\"color: #"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CodeHighlighter {
    syntax_set: &'static SyntaxSet,
    theme: &'static SyntectTheme,
    code_theme: CodeTheme,
}

impl CodeHighlighter {
    /// Creates a highlighter for the given theme.
    pub fn new(code_theme: CodeTheme) -> Self {
        Self {
            syntax_set: grammars::syntax_set(),
            theme: themes::load_theme(code_theme),
            code_theme,
        }
    }

    /// Returns a reference to the syntax set.
    pub fn syntax_set(&self) -> &SyntaxSet {
        self.syntax_set
    }

    /// Returns the code theme in use.
    pub fn code_theme(&self) -> CodeTheme {
        self.code_theme
    }

    /// Finds the grammar for a fence language, falling back to plain text.
    pub fn syntax_for(&self, language: &str) -> &SyntaxReference {
        if language.is_empty() {
            return self.syntax_set.find_syntax_plain_text();
        }

        self.syntax_set
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    /// Highlights `code` and returns one escaped HTML string per line.
    ///
    /// Line endings stay attached to their line.
    pub fn highlight_lines(&self, code: &str, language: &str) -> MarkdownResult<Vec<String>> {
        let mut hl = HighlightLines::new(self.syntax_for(language), self.theme);
        let mut lines = Vec::new();

        for line in LinesWithEndings::from(code) {
            let ranges = hl
                .highlight_line(line, self.syntax_set)
                .map_err(|e| MarkdownError::Highlight(e.to_string()))?;

            let mut rendered = String::new();
            for (style, text) in ranges {
                let text = text.trim_end_matches(['\r', '\n']);
                if text.is_empty() {
                    continue;
                }
                let fg = style.foreground;
                rendered.push_str(&format!(
                    r#"<span style="color: #{:02x}{:02x}{:02x};">{}</span>"#,
                    fg.r,
                    fg.g,
                    fg.b,
                    html_escape::encode_text(text)
                ));
            }
            if line.ends_with('\n') {
                rendered.push('\n');
            }
            lines.push(rendered);
        }

        Ok(lines)
    }

    /// Highlights `code` into a single HTML string.
    pub fn highlight(&self, code: &str, language: &str) -> MarkdownResult<String> {
        Ok(self.highlight_lines(code, language)?.concat())
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new(CodeTheme::default())
    }
}

//! # mdpage CLI
//!
//! Converts a markdown document into a standalone HTML page.
//!
//! ## Usage
//!
//! ```bash
//! # Print the page to stdout
//! mdpage notes.md > notes.html
//!
//! # Write the page to a file
//! mdpage notes.md -o notes.html
//!
//! # Pick a code theme and number code lines
//! mdpage notes.md --code-theme solarized-light --line-numbers
//!
//! # List available code themes
//! mdpage --list-themes
//!
//! # Verbose output for debugging
//! mdpage notes.md -v      # INFO level
//! mdpage notes.md -vv     # DEBUG level
//! mdpage notes.md -vvv    # TRACE level
//! ```
//!
//! ## Document format
//!
//! ```markdown
//! ---
//! tags: [shell, linux]
//! related: [permissions]
//! repo: https://example.com/ops
//! ---
//! # Disk usage
//!
//! > du -sh *
//! Shows the size of each entry.
//! ```
//!
//! `tags` and `related` become a metadata table, `repo` a link above the
//! content, and each `> command` line with the text after it a command box
//! with an explanation.
//!
//! The crate also ships `systools`, a small unrelated command stub; see
//! [`systools`].

pub mod systools;

pub use cli::Cli;

mod cli {
    use clap::{Parser, ValueHint};
    use mdpage_lib::convert::ConvertOptions;
    use mdpage_lib::markdown::highlighting::CodeTheme;
    use std::path::PathBuf;

    /// Command-line interface for the mdpage converter.
    ///
    /// Use `mdpage --help` to see all available options.
    #[derive(Parser, Debug)]
    #[command(
        name = "mdpage",
        about = "Convert markdown with frontmatter into a standalone HTML page",
        version
    )]
    pub struct Cli {
        /// Markdown file to convert
        #[arg(required_unless_present = "list_themes", value_hint = ValueHint::FilePath)]
        pub input: Option<PathBuf>,

        /// Write the page to FILE instead of stdout
        #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
        pub output: Option<PathBuf>,

        /// Page title
        #[arg(long, default_value = "Html")]
        pub title: String,

        /// Theme for highlighted code blocks (kebab-case name)
        #[arg(long, value_parser = super::parse_code_theme, default_value = "github")]
        pub code_theme: CodeTheme,

        /// Include line numbers in highlighted code blocks
        #[arg(long)]
        pub line_numbers: bool,

        /// List available code themes
        #[arg(long)]
        pub list_themes: bool,

        /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        pub verbose: u8,
    }

    impl Cli {
        /// Builds conversion options from the parsed flags.
        pub fn convert_options(&self) -> ConvertOptions {
            let mut options = ConvertOptions::default();
            options.body.code_theme = self.code_theme;
            options.body.include_line_numbers = self.line_numbers;
            options.page.title = self.title.clone();
            options
        }
    }
}

/// Parses a code theme name.
fn parse_code_theme(s: &str) -> Result<mdpage_lib::markdown::highlighting::CodeTheme, String> {
    mdpage_lib::markdown::highlighting::CodeTheme::try_from(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mdpage_lib::markdown::highlighting::CodeTheme;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mdpage", "doc.md"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("doc.md")));
        assert_eq!(cli.output, None);
        assert_eq!(cli.code_theme, CodeTheme::Github);
        assert_eq!(cli.verbose, 0);

        let options = cli.convert_options();
        assert_eq!(options.page.title, "Html");
        assert!(!options.body.include_line_numbers);
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "mdpage",
            "doc.md",
            "-o",
            "doc.html",
            "--title",
            "Runbook",
            "--code-theme",
            "nord",
            "--line-numbers",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let options = cli.convert_options();
        assert_eq!(options.page.title, "Runbook");
        assert_eq!(options.body.code_theme, CodeTheme::Nord);
        assert!(options.body.include_line_numbers);
    }

    #[test]
    fn test_input_required_without_list_themes() {
        assert!(Cli::try_parse_from(["mdpage"]).is_err());
        assert!(Cli::try_parse_from(["mdpage", "--list-themes"]).is_ok());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = Cli::try_parse_from(["mdpage", "doc.md", "--code-theme", "neon"]).unwrap_err();
        assert!(err.to_string().contains("neon"));
    }
}

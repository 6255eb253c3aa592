//! Markdown documents with frontmatter and command example blocks.
//!
//! This module provides a `Markdown` struct that represents a markdown document
//! with optional YAML frontmatter. It supports:
//!
//! - Splitting frontmatter from the body, recovering from malformed YAML
//! - Loading from strings and files
//! - Typed frontmatter accessors for `tags`, `related` and `repo`
//! - Rewriting `> command` blocks into HTML
//! - Rendering to a standalone HTML page
//!
//! ## Examples
//!
//! ```
//! use mdpage_lib::markdown::Markdown;
//!
//! let content = r#"---
//! tags: [shell]
//! repo: https://example.com/tools
//! ---
//! ## My Document
//!
//! > ls -la
//! List every file.
//! "#;
//!
//! let md: Markdown = content.into();
//! assert_eq!(md.frontmatter().tags(), vec!["shell".to_string()]);
//! assert!(md.content().starts_with("# My Document"));
//! ```

pub mod commands;
mod frontmatter;
pub mod highlighting;
pub mod output;
mod types;

pub use commands::{CommandBlock, CommandRewrite, rewrite_command_blocks};
pub use frontmatter::{Frontmatter, extract_frontmatter, parse_frontmatter};
pub use types::{FrontmatterMap, MarkdownError, MarkdownResult};

use std::path::Path;
use tracing::debug;

/// A markdown document with frontmatter support.
#[derive(Debug, Clone, PartialEq)]
pub struct Markdown {
    frontmatter: Frontmatter,
    content: String,
}

impl Markdown {
    /// Creates a markdown document with frontmatter.
    pub fn with_frontmatter(frontmatter: Frontmatter, content: String) -> Self {
        Self {
            frontmatter,
            content,
        }
    }

    /// Gets a typed value from frontmatter.
    pub fn fm_get<T: serde::de::DeserializeOwned>(&self, key: &str) -> MarkdownResult<Option<T>> {
        self.frontmatter.get(key)
    }

    /// Inserts a value into frontmatter.
    pub fn fm_insert<T: serde::Serialize>(&mut self, key: &str, value: T) -> MarkdownResult<()> {
        self.frontmatter.insert(key, value)
    }

    /// Returns a reference to the frontmatter.
    pub fn frontmatter(&self) -> &Frontmatter {
        &self.frontmatter
    }

    /// Returns a mutable reference to the frontmatter.
    pub fn frontmatter_mut(&mut self) -> &mut Frontmatter {
        &mut self.frontmatter
    }

    /// Returns a reference to the content (without frontmatter).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns a mutable reference to the content.
    pub fn content_mut(&mut self) -> &mut String {
        &mut self.content
    }

    /// Rewrites command blocks in the content into HTML fragments.
    ///
    /// Returns the blocks that were rewritten.
    ///
    /// ## Examples
    ///
    /// ```
    /// use mdpage_lib::markdown::Markdown;
    ///
    /// let mut md: Markdown = "> whoami\nprints the user\n".into();
    /// let blocks = md.rewrite_commands();
    /// assert_eq!(blocks[0].command, "whoami");
    /// assert!(md.content().starts_with("<div class=\"command\">whoami</div>"));
    /// ```
    pub fn rewrite_commands(&mut self) -> Vec<CommandBlock> {
        let rewrite = rewrite_command_blocks(&self.content);
        debug!(blocks = rewrite.blocks.len(), "rewrote command blocks");
        self.content = rewrite.content;
        rewrite.blocks
    }

    /// Renders the document as a standalone HTML page.
    ///
    /// Command blocks are rewritten first, then the body is rendered and
    /// wrapped in the page template together with the frontmatter metadata.
    ///
    /// ## Examples
    ///
    /// ```
    /// use mdpage_lib::markdown::Markdown;
    /// use mdpage_lib::markdown::output::{BodyOptions, PageOptions};
    ///
    /// let md: Markdown = "# Hello\n\nWorld".into();
    /// let html = md.as_page(&BodyOptions::default(), &PageOptions::default()).unwrap();
    /// assert!(html.contains("<h1>Hello</h1>"));
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if rendering a code block fails.
    pub fn as_page(
        &self,
        body_options: &output::BodyOptions,
        page_options: &output::PageOptions,
    ) -> MarkdownResult<String> {
        let rewrite = rewrite_command_blocks(&self.content);
        debug!(blocks = rewrite.blocks.len(), "rewrote command blocks");

        let body = output::render_body(&rewrite.content, body_options)?;
        Ok(output::compose_page(&body, &self.frontmatter, page_options))
    }
}

impl From<String> for Markdown {
    fn from(content: String) -> Self {
        let (frontmatter, body) = extract_frontmatter(&content);
        Self::with_frontmatter(frontmatter, body)
    }
}

impl From<&str> for Markdown {
    fn from(content: &str) -> Self {
        let (frontmatter, body) = extract_frontmatter(content);
        Self::with_frontmatter(frontmatter, body)
    }
}

impl TryFrom<&Path> for Markdown {
    type Error = MarkdownError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(content.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_markdown_from_string() {
        let content = r#"---
tags: [a]
---
# Hello"#;

        let md: Markdown = content.to_string().into();
        assert_eq!(md.frontmatter().tags(), vec!["a".to_string()]);
        assert_eq!(md.content(), "# Hello");
    }

    #[test]
    fn test_markdown_from_str() {
        let content = "# Plain content";
        let md: Markdown = content.into();
        assert!(md.frontmatter().is_empty());
        assert_eq!(md.content(), "# Plain content");
    }

    #[test]
    fn test_markdown_from_malformed_frontmatter() {
        let md: Markdown = "---\ntags: [a\n---\n# Hello".into();
        assert!(md.frontmatter().is_empty());
        assert_eq!(md.content(), "# Hello");
    }

    #[test]
    fn test_markdown_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "---").unwrap();
        writeln!(file, "repo: https://x.test").unwrap();
        writeln!(file, "---").unwrap();
        writeln!(file, "# Content").unwrap();

        let md = Markdown::try_from(file.path()).unwrap();
        assert_eq!(md.frontmatter().repo(), Some("https://x.test".to_string()));
        assert_eq!(md.content(), "# Content\n");
    }

    #[test]
    fn test_markdown_from_missing_path() {
        let result = Markdown::try_from(Path::new("/definitely/not/here.md"));
        assert!(matches!(result, Err(MarkdownError::FileLoad(_))));
    }

    #[test]
    fn test_markdown_content_access() {
        let mut md: Markdown = "---\nrepo: r\n---\n# Hello\nWorld".into();
        assert!(md.content().contains("# Hello"));

        *md.content_mut() = "New content".to_string();
        assert_eq!(md.content(), "New content");
    }

    #[test]
    fn test_markdown_frontmatter_mut() {
        let mut md: Markdown = "# No frontmatter".into();
        md.frontmatter_mut()
            .insert("tags", serde_json::json!(["added"]))
            .unwrap();
        assert_eq!(md.frontmatter().tags(), vec!["added".to_string()]);

        md.fm_insert("title", "T").unwrap();
        let title: Option<String> = md.fm_get("title").unwrap();
        assert_eq!(title, Some("T".to_string()));
    }

    #[test]
    fn test_rewrite_commands_mutates_content() {
        let mut md: Markdown = "> ls\nlist\n".into();
        let blocks = md.rewrite_commands();
        assert_eq!(blocks.len(), 1);
        assert!(!md.content().contains("> ls"));
        assert!(md.rewrite_commands().is_empty());
    }

    #[test]
    fn test_as_page_does_not_mutate() {
        let md: Markdown = "> ls\nlist\n".into();
        let html = md
            .as_page(&output::BodyOptions::default(), &output::PageOptions::default())
            .unwrap();
        assert!(html.contains(r#"<div class="command">ls</div>"#));
        assert_eq!(md.content(), "> ls\nlist\n");
    }
}

//! Type definitions for the markdown module.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Type alias for frontmatter data.
pub type FrontmatterMap = HashMap<String, serde_json::Value>;

/// Errors that can occur when converting Markdown documents.
#[derive(Error, Debug)]
pub enum MarkdownError {
    /// Failed to parse frontmatter YAML.
    #[error("Failed to parse frontmatter: {0}")]
    FrontmatterParse(#[from] serde_yaml::Error),

    /// The source document does not exist.
    #[error("File '{}' not found", .0.display())]
    SourceNotFound(PathBuf),

    /// Failed to load file.
    #[error("Failed to load file: {0}")]
    FileLoad(#[from] std::io::Error),

    /// Failed to write the rendered page.
    #[error("Failed to write '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax highlighting of a code block failed.
    #[error("Syntax highlighting failed: {0}")]
    Highlight(String),

    /// Unknown code theme name.
    #[error("Failed to load theme: {0}")]
    ThemeLoad(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for markdown operations.
pub type MarkdownResult<T> = Result<T, MarkdownError>;

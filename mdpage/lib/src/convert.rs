//! File-to-page conversion.
//!
//! [`convert`] runs the full pipeline on a file: read the source, split off
//! the frontmatter, rewrite command blocks, render the body and compose the
//! page. The page is either returned or written to a destination file.
//!
//! Failures are logged before they are handed back. A missing source file is
//! reported and then treated as a finished conversion with no output
//! ([`Conversion::SourceMissing`]); every other failure is returned as an error.

use crate::markdown::output::{BodyOptions, PageOptions};
use crate::markdown::{Markdown, MarkdownError, MarkdownResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Options for a conversion.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ConvertOptions {
    /// Body rendering options.
    pub body: BodyOptions,
    /// Page template options.
    pub page: PageOptions,
}

/// The outcome of converting a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// No destination was given; the rendered page.
    Html(String),
    /// The page was written to this path.
    Written(PathBuf),
    /// The source file does not exist; nothing was rendered.
    SourceMissing(PathBuf),
}

impl Conversion {
    /// Returns the rendered page, if it was kept in memory.
    pub fn into_html(self) -> Option<String> {
        match self {
            Conversion::Html(html) => Some(html),
            Conversion::Written(_) | Conversion::SourceMissing(_) => None,
        }
    }
}

/// Converts markdown text into a standalone HTML page.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::convert::{ConvertOptions, convert_str};
///
/// let html = convert_str("---\ntags: [a]\n---\n# Title\n", &ConvertOptions::default()).unwrap();
/// assert!(html.contains(r#"<div class="tag">a</div>"#));
/// assert!(html.contains("<h1>Title</h1>"));
/// ```
///
/// ## Errors
///
/// Returns an error if rendering a code block fails.
pub fn convert_str(content: &str, options: &ConvertOptions) -> MarkdownResult<String> {
    let md = Markdown::from(content);
    debug!(
        frontmatter_keys = md.frontmatter().len(),
        "split frontmatter from body"
    );
    md.as_page(&options.body, &options.page)
}

/// Converts the markdown file at `source` into a standalone HTML page.
///
/// With a `destination` the page is written there as UTF-8 and
/// [`Conversion::Written`] is returned; otherwise the page is returned as
/// [`Conversion::Html`].
///
/// ## Examples
///
/// ```
/// use mdpage_lib::convert::{Conversion, ConvertOptions, convert};
/// use std::path::Path;
///
/// let outcome = convert(Path::new("missing.md"), None, &ConvertOptions::default()).unwrap();
/// assert_eq!(outcome, Conversion::SourceMissing("missing.md".into()));
/// ```
///
/// ## Errors
///
/// Returns an error, after logging it, if the source cannot be read for a
/// reason other than not existing, if rendering fails, or if the destination
/// cannot be written.
pub fn convert(
    source: &Path,
    destination: Option<&Path>,
    options: &ConvertOptions,
) -> MarkdownResult<Conversion> {
    let content = match std::fs::read_to_string(source) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("{}", MarkdownError::SourceNotFound(source.to_path_buf()));
            return Ok(Conversion::SourceMissing(source.to_path_buf()));
        }
        Err(e) => return Err(report(MarkdownError::FileLoad(e))),
    };
    debug!(source = %source.display(), bytes = content.len(), "read markdown source");

    let html = convert_str(&content, options).map_err(report)?;

    let Some(destination) = destination else {
        return Ok(Conversion::Html(html));
    };

    std::fs::write(destination, &html).map_err(|e| {
        report(MarkdownError::FileWrite {
            path: destination.to_path_buf(),
            source: e,
        })
    })?;
    info!(destination = %destination.display(), "wrote HTML page");

    Ok(Conversion::Written(destination.to_path_buf()))
}

fn report(err: MarkdownError) -> MarkdownError {
    error!("Error occurred: {err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_str_end_to_end() {
        let html = convert_str(
            "---\ntags: [a]\nrepo: https://x.test\n---\n# Title\n> ls -la\ndescription text\n",
            &ConvertOptions::default(),
        )
        .unwrap();

        assert_eq!(html.matches(r#"<div class="tag">"#).count(), 1);
        assert!(html.contains(r#"<div class="tag">a</div>"#));
        assert!(html.contains(r#"<a href="https://x.test" target="_blank">"#));
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains(r#"<div class="command">ls -la</div>"#));
        assert!(html.contains(r#"<p class="explanation">description text</p>"#));
    }

    #[test]
    fn test_convert_returns_html_without_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("doc.md");
        fs::write(&source, "# Hello\n\nWorld").unwrap();

        let outcome = convert(&source, None, &ConvertOptions::default()).unwrap();
        let html = outcome.into_html().unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_convert_writes_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("doc.md");
        let destination = dir.path().join("doc.html");
        fs::write(&source, "# Hello").unwrap();

        let outcome = convert(&source, Some(destination.as_path()), &ConvertOptions::default()).unwrap();
        assert_eq!(outcome, Conversion::Written(destination.clone()));
        assert_eq!(outcome.into_html(), None);

        let written = fs::read_to_string(&destination).unwrap();
        assert!(written.contains("<h1>Hello</h1>"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_convert_missing_source_is_reported() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("absent.md");

        let outcome = convert(&source, None, &ConvertOptions::default()).unwrap();
        assert_eq!(outcome, Conversion::SourceMissing(source));
        assert!(logs_contain("not found"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_convert_write_failure_is_raised() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("doc.md");
        fs::write(&source, "# Hello").unwrap();
        let destination = dir.path().join("no-such-dir").join("doc.html");

        let result = convert(&source, Some(destination.as_path()), &ConvertOptions::default());
        assert!(matches!(result, Err(MarkdownError::FileWrite { .. })));
        assert!(logs_contain("Error occurred"));
    }

    #[test]
    fn test_convert_source_directory_is_raised() {
        let dir = TempDir::new().unwrap();
        let result = convert(dir.path(), None, &ConvertOptions::default());
        assert!(matches!(result, Err(MarkdownError::FileLoad(_))));
    }

    #[test]
    fn test_convert_is_deterministic() {
        let content = "---\ntags: [a, b]\nrelated: [c]\nrepo: https://x.test\n---\n# T\n\n```rust\nfn f() {}\n```\n";
        let first = convert_str(content, &ConvertOptions::default()).unwrap();
        let second = convert_str(content, &ConvertOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}

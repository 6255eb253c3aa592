//! Standalone HTML page composition.
//!
//! The page embeds its own style sheet and references no external assets.
//! Frontmatter `tags` and `related` lists become a two-column metadata table
//! above the content, and `repo` becomes a link at the top of the content.
//! Nothing in this module depends on time or environment, so equal inputs
//! always give byte-identical pages.

use crate::markdown::Frontmatter;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Options for page composition.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::markdown::output::PageOptions;
///
/// let mut options = PageOptions::default();
/// assert_eq!(options.title, "Html");
/// options.title = "Runbook".to_string();
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PageOptions {
    /// Contents of the `<title>` element.
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Html".to_string(),
        }
    }
}

const STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.5;
            max-width: 100%;
            margin: 0;
            padding: 0;
        }
        .metadata-table {
            width: 100%;
            border-collapse: collapse;
            margin-bottom: 20px;
        }
        .metadata-table th {
            text-align: center;
            font-size: 24px;
            padding: 10px;
            border: 1px solid #e0e0e0;
            font-weight: normal;
        }
        .tags-container, .related-container {
            display: flex;
            flex-wrap: wrap;
            padding: 10px;
        }
        .tag, .related-item {
            margin: 5px;
            padding: 10px 20px;
            border: 1px solid #e0e0e0;
            display: inline-block;
        }
        h1 {
            font-size: 48px;
            margin-top: 30px;
            margin-bottom: 20px;
            font-weight: normal;
        }
        hr {
            border: none;
            border-top: 1px solid #e0e0e0;
            margin: 20px 0;
        }
        .content {
            padding: 0 20px;
        }
        code {
            background-color: #f5f5f5;
            padding: 2px 4px;
            font-family: monospace;
            border-radius: 3px;
        }
        pre {
            background-color: #f5f5f5;
            padding: 10px;
            margin: 10px 0;
            font-family: monospace;
            border-left: 4px solid #e0e0e0;
            overflow-x: auto;
        }
        pre code {
            padding: 0;
        }
        .code-table {
            width: 100%;
            border-collapse: collapse;
            background-color: #f5f5f5;
            border-left: 4px solid #e0e0e0;
            margin: 10px 0;
        }
        .ln-gutter {
            padding: 0 0.5em;
            text-align: right;
            user-select: none;
            color: #8c8c8c;
            border-right: 1px solid #e0e0e0;
            width: 1%;
        }
        .code-content {
            padding: 0 1em;
            font-family: monospace;
            white-space: pre;
        }
        .command {
            background-color: #f5f5f5;
            padding: 10px;
            margin: 10px 0;
            font-family: monospace;
            border-left: 4px solid #e0e0e0;
            white-space: pre;
        }
        .explanation {
            margin: 10px 0 20px 0;
        }
        .emphasis {
            font-style: italic;
        }
        .repo-link {
            margin: 20px 0;
            padding: 10px;
            background-color: #f8f8f8;
            border-radius: 4px;
        }
        .repo-link a {
            color: #0366d6;
            text-decoration: none;
        }
        .repo-link a:hover {
            text-decoration: underline;
        }
"#;

/// Renders the metadata table, or nothing when there are no tags and no
/// related items.
fn metadata_table(tags: &[String], related: &[String]) -> String {
    if tags.is_empty() && related.is_empty() {
        return String::new();
    }

    let tag_divs: String = tags
        .iter()
        .map(|tag| format!("                    <div class=\"tag\">{}</div>\n", encode_text(tag)))
        .collect();
    let related_divs: String = related
        .iter()
        .map(|item| {
            format!(
                "                    <div class=\"related-item\">{}</div>\n",
                encode_text(item)
            )
        })
        .collect();

    format!(
        r#"    <table class="metadata-table">
        <tr>
            <th style="width: 50%">tags</th>
            <th style="width: 50%">related</th>
        </tr>
        <tr>
            <td>
                <div class="tags-container">
{tag_divs}                </div>
            </td>
            <td>
                <div class="related-container">
{related_divs}                </div>
            </td>
        </tr>
    </table>
"#
    )
}

/// Renders the repository link.
fn repo_link(url: &str) -> String {
    format!(
        "        <div class=\"repo-link\"><a href=\"{}\" target=\"_blank\">Repository: {}</a></div>\n",
        encode_double_quoted_attribute(url),
        encode_text(url)
    )
}

/// Wraps a rendered body fragment in a standalone HTML page.
///
/// The body is embedded verbatim. The metadata table is emitted only when
/// `tags` or `related` is non-empty, and the repository link only when
/// `repo` is set.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::markdown::Frontmatter;
/// use mdpage_lib::markdown::output::{PageOptions, compose_page};
/// use serde_json::json;
///
/// let mut fm = Frontmatter::new();
/// fm.insert("repo", json!("https://example.com/x")).unwrap();
///
/// let page = compose_page("<p>Hi</p>\n", &fm, &PageOptions::default());
/// assert!(page.contains(r#"<a href="https://example.com/x" target="_blank">"#));
/// assert!(!page.contains("metadata-table\">"));
/// ```
pub fn compose_page(body: &str, frontmatter: &Frontmatter, options: &PageOptions) -> String {
    let table = metadata_table(&frontmatter.tags(), &frontmatter.related());
    let repo = frontmatter.repo().map(|url| repo_link(&url)).unwrap_or_default();
    let title = encode_text(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
{table}    <div class="content">
{repo}{body}    </div>
</body>
</html>
"#
    )
}

//! Markdown body to HTML fragment rendering.
//!
//! The body is parsed with pulldown-cmark (tables, strikethrough, footnotes
//! and task lists enabled) and written with its HTML writer. Raw HTML, such
//! as rewritten command blocks, passes through untouched. Fenced code blocks
//! that name a language are replaced with syntect-highlighted markup.
//!
//! ## Examples
//!
//! ```
//! use mdpage_lib::markdown::output::{BodyOptions, render_body};
//!
//! let html = render_body("# Hello\n\nWorld", &BodyOptions::default()).unwrap();
//! assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
//! ```

use crate::markdown::MarkdownResult;
use crate::markdown::highlighting::{CodeHighlighter, CodeTheme};
use html_escape::encode_text;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use tracing::trace;

/// Options for body rendering with sensible defaults.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::markdown::highlighting::CodeTheme;
/// use mdpage_lib::markdown::output::BodyOptions;
///
/// let mut options = BodyOptions::default();
/// options.code_theme = CodeTheme::SolarizedLight;
/// options.include_line_numbers = true;
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BodyOptions {
    /// Theme for highlighted code blocks.
    pub code_theme: CodeTheme,
    /// Render a line-number gutter next to highlighted code blocks.
    pub include_line_numbers: bool,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            code_theme: CodeTheme::default(),
            include_line_numbers: false,
        }
    }
}

/// A fenced code block collected while walking the event stream.
struct FencedCode {
    language: String,
    source: String,
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Renders a markdown body to an HTML fragment.
///
/// ## Errors
///
/// Returns an error if syntax highlighting of a code block fails.
pub fn render_body(content: &str, options: &BodyOptions) -> MarkdownResult<String> {
    let highlighter = CodeHighlighter::new(options.code_theme);
    let parser = Parser::new_ext(content, parser_options());

    let mut events: Vec<Event> = Vec::new();
    let mut code: Option<FencedCode> = None;

    for event in parser {
        if let Some(block) = code.as_mut() {
            match event {
                Event::Text(text) => block.source.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = code.take() {
                        let html = highlight_code_block(&block, &highlighter, options)?;
                        events.push(Event::Html(CowStr::from(html)));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info)))
                if fence_language(info).is_some() =>
            {
                let language = fence_language(info).unwrap_or_default().to_string();
                trace!(%language, "highlighting fenced code block");
                code = Some(FencedCode {
                    language,
                    source: String::new(),
                });
            }
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(content.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut output, events.into_iter());
    Ok(output)
}

/// Returns the language token of a fence info string, e.g. `rust` for
/// `rust title="main.rs"`.
fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace()
        .next()
        .map(|token| token.trim_start_matches('{').trim_start_matches('.'))
        .map(|token| token.trim_end_matches('}'))
        .filter(|token| !token.is_empty())
}

/// Renders a highlighted code block with optional line numbers.
fn highlight_code_block(
    block: &FencedCode,
    highlighter: &CodeHighlighter,
    options: &BodyOptions,
) -> MarkdownResult<String> {
    let lines = highlighter.highlight_lines(&block.source, &block.language)?;
    let language = encode_text(&block.language);
    let mut output = String::new();

    output.push_str(r#"<div class="code-block">"#);
    output.push('\n');

    if options.include_line_numbers {
        output.push_str(r#"<table class="code-table"><tbody>"#);
        output.push('\n');
        for (idx, line) in lines.iter().enumerate() {
            output.push_str(&format!(
                r#"<tr><td class="ln-gutter"><span class="ln">{}</span></td><td class="code-content"><code class="language-{}">{}</code></td></tr>"#,
                idx + 1,
                language,
                line.trim_end_matches('\n')
            ));
            output.push('\n');
        }
        output.push_str("</tbody></table>\n");
    } else {
        output.push_str(&format!(r#"<pre><code class="language-{}">"#, language));
        for line in &lines {
            output.push_str(line);
        }
        output.push_str("</code></pre>\n");
    }

    output.push_str("</div>\n");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &str) -> String {
        render_body(content, &BodyOptions::default()).unwrap()
    }

    #[test]
    fn test_body_options_default() {
        let options = BodyOptions::default();
        assert_eq!(options.code_theme, CodeTheme::Github);
        assert!(!options.include_line_numbers);
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(render("# Hello\n\nWorld"), "<h1>Hello</h1>\n<p>World</p>\n");
    }

    #[test]
    fn test_table() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_strikethrough() {
        assert!(render("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render("<div class=\"command\">ls</div>\n<p class=\"explanation\">list</p>\n\nAfter");
        assert!(html.contains("<div class=\"command\">ls</div>"));
        assert!(html.contains("<p class=\"explanation\">list</p>"));
        assert!(html.contains("<p>After</p>"));
    }

    #[test]
    fn test_fenced_code_with_language_is_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains(r#"<div class="code-block">"#));
        assert!(html.contains(r#"<pre><code class="language-rust">"#));
        assert!(html.contains("<span style=\"color: #"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_fenced_code_without_language_is_plain() {
        let html = render("```\n<tag>\n```\n");
        assert_eq!(html, "<pre><code>&lt;tag&gt;\n</code></pre>\n");
    }

    #[test]
    fn test_indented_code_is_plain() {
        let html = render("    let x = 1;\n");
        assert_eq!(html, "<pre><code>let x = 1;\n</code></pre>\n");
    }

    #[test]
    fn test_unknown_language_still_renders() {
        let html = render("```nosuchlang\nhello\n```\n");
        assert!(html.contains(r#"class="language-nosuchlang""#));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_line_numbers() {
        let mut options = BodyOptions::default();
        options.include_line_numbers = true;
        let html = render_body("```sh\necho a\necho b\n```\n", &options).unwrap();
        assert!(html.contains(r#"<table class="code-table">"#));
        assert!(html.contains(r#"<span class="ln">1</span>"#));
        assert!(html.contains(r#"<span class="ln">2</span>"#));
        assert!(!html.contains(r#"<span class="ln">3</span>"#));
    }

    #[test]
    fn test_fence_language_parsing() {
        assert_eq!(fence_language("rust"), Some("rust"));
        assert_eq!(fence_language("rust title=\"x\""), Some("rust"));
        assert_eq!(fence_language("{.python}"), Some("python"));
        assert_eq!(fence_language(""), None);
        assert_eq!(fence_language("   "), None);
    }

    #[test]
    fn test_render_is_deterministic() {
        let content = "# T\n\n```python\nprint('x')\n```\n\n| a |\n|---|\n| b |\n";
        assert_eq!(render(content), render(content));
    }
}

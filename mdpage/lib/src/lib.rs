//! # mdpage
//!
//! Converts markdown documents into standalone HTML pages.
//!
//! A document may start with a YAML frontmatter block. The `tags`, `related`
//! and `repo` keys are lifted out of it and rendered as a metadata table and a
//! repository link above the body. Lines starting with `> ` are treated as
//! command examples and become a command box followed by an explanation
//! paragraph.
//!
//! ## Examples
//!
//! ```
//! use mdpage_lib::convert::{convert_str, ConvertOptions};
//!
//! let html = convert_str("# Hello\n\n> ls -la\nlist everything\n", &ConvertOptions::default()).unwrap();
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains(r#"<div class="command">ls -la</div>"#));
//! ```

pub mod convert;
pub mod markdown;

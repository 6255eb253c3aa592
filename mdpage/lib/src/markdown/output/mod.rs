//! Output formatting for Markdown documents.
//!
//! Rendering happens in two steps:
//! - [`render_body`] turns the markdown body into an HTML fragment
//! - [`compose_page`] wraps a fragment and the document's frontmatter in a
//!   standalone HTML page
//!
//! ## Examples
//!
//! ```
//! use mdpage_lib::markdown::Frontmatter;
//! use mdpage_lib::markdown::output::{BodyOptions, PageOptions, compose_page, render_body};
//!
//! let body = render_body("# Document", &BodyOptions::default()).unwrap();
//! let page = compose_page(&body, &Frontmatter::new(), &PageOptions::default());
//! assert!(page.starts_with("<!DOCTYPE html>"));
//! assert!(page.contains("<h1>Document</h1>"));
//! ```

pub mod html;
pub mod page;

pub use html::{BodyOptions, render_body};
pub use page::{PageOptions, compose_page};

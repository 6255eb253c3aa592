//! Grammar loading for syntax highlighting.
//!
//! Uses the extended grammar set from two-face, which adds the bat project's
//! languages (TypeScript, TOML, Dockerfile, ...) to syntect's defaults.

use lazy_static::lazy_static;
use syntect::parsing::SyntaxSet;
use two_face::syntax::extra_newlines as extra_syntax_set;

lazy_static! {
    static ref SYNTAX_SET: SyntaxSet = extra_syntax_set();
}

/// Returns the lazily loaded syntax set.
pub(super) fn syntax_set() -> &'static SyntaxSet {
    &SYNTAX_SET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_set_not_empty() {
        assert!(!syntax_set().syntaxes().is_empty());
    }

    #[test]
    fn test_find_rust_syntax() {
        let syntax = syntax_set().find_syntax_by_token("rust");
        assert_eq!(syntax.map(|s| s.name.as_str()), Some("Rust"));
    }

    #[test]
    fn test_find_shell_syntax() {
        assert!(syntax_set().find_syntax_by_token("sh").is_some());
        assert!(syntax_set().find_syntax_by_token("bash").is_some());
    }

    #[test]
    fn test_find_toml_syntax() {
        assert!(syntax_set().find_syntax_by_extension("toml").is_some());
    }
}

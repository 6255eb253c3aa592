//! Frontmatter parsing and typed metadata accessors.

use super::types::{FrontmatterMap, MarkdownResult};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

lazy_static! {
    /// A `---` line at the very start of the input, the YAML body, and the
    /// first closing `---` line (terminated by a newline or end of input).
    static ref FRONTMATTER: Regex =
        Regex::new(r"(?ms)\A---[ \t]*\r?\n(.*?)^---[ \t]*(?:\r?\n|\z)")
            .expect("frontmatter pattern is valid");
}

/// Wrapper type for frontmatter with typed accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter(FrontmatterMap);

impl Frontmatter {
    /// Creates a new empty frontmatter.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Creates frontmatter from a map.
    pub fn from_map(map: FrontmatterMap) -> Self {
        Self(map)
    }

    /// Gets a typed value from frontmatter.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use mdpage_lib::markdown::Frontmatter;
    /// # use serde_json::json;
    /// let mut fm = Frontmatter::new();
    /// fm.insert("title", json!("Hello")).unwrap();
    /// let title: Option<String> = fm.get("title").unwrap();
    /// assert_eq!(title, Some("Hello".to_string()));
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> MarkdownResult<Option<T>> {
        match self.0.get(key) {
            Some(value) => {
                let result = serde_json::from_value(value.clone())?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Inserts a value into frontmatter.
    pub fn insert<T: Serialize>(&mut self, key: &str, value: T) -> MarkdownResult<()> {
        let json_value = serde_json::to_value(value)?;
        self.0.insert(key.to_string(), json_value);
        Ok(())
    }

    /// The `tags` list.
    ///
    /// A YAML sequence yields one entry per scalar item; a lone string is a
    /// single tag. Anything else yields an empty list.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use mdpage_lib::markdown::Frontmatter;
    /// # use serde_json::json;
    /// let mut fm = Frontmatter::new();
    /// fm.insert("tags", json!(["rust", 2024])).unwrap();
    /// assert_eq!(fm.tags(), vec!["rust".to_string(), "2024".to_string()]);
    /// ```
    pub fn tags(&self) -> Vec<String> {
        self.string_list("tags")
    }

    /// The `related` list, read the same way as [`Frontmatter::tags`].
    pub fn related(&self) -> Vec<String> {
        self.string_list("related")
    }

    /// The `repo` URL, if it is a non-blank string.
    pub fn repo(&self) -> Option<String> {
        match self.0.get("repo") {
            Some(Value::String(url)) if !url.trim().is_empty() => Some(url.trim().to_string()),
            _ => None,
        }
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(Value::String(item)) => vec![item.clone()],
            _ => Vec::new(),
        }
    }

    /// Returns true if frontmatter is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of frontmatter fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self::new()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Locates a frontmatter block at the start of `content`.
///
/// Returns the YAML text between the delimiters and the remaining body.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let captures = FRONTMATTER.captures(content)?;
    let whole = captures.get(0)?;
    let yaml = captures.get(1).map_or("", |m| m.as_str());
    Some((yaml, &content[whole.end()..]))
}

/// Converts YAML text into a frontmatter map.
///
/// Documents that are empty or are not a mapping produce an empty map.
fn yaml_to_map(yaml: &str) -> MarkdownResult<FrontmatterMap> {
    if yaml.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;

    let serde_yaml::Value::Mapping(mapping) = value else {
        debug!("frontmatter is not a mapping, ignoring it");
        return Ok(HashMap::new());
    };

    let mut map = HashMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match key {
            serde_yaml::Value::String(key) => key,
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::Bool(b) => b.to_string(),
            other => {
                debug!(?other, "skipping frontmatter entry with a non-scalar key");
                continue;
            }
        };
        match serde_json::to_value(value) {
            Ok(value) => {
                map.insert(key, value);
            }
            Err(e) => debug!(%key, "skipping frontmatter entry that has no JSON form: {e}"),
        }
    }

    Ok(map)
}

/// Parses frontmatter from markdown content, failing on malformed YAML.
///
/// Frontmatter must start at the first character of the document, between
/// `---` delimiters that sit on their own lines. When no block is present the
/// content is returned unchanged with empty frontmatter.
pub fn parse_frontmatter(content: &str) -> MarkdownResult<(Frontmatter, String)> {
    let Some((yaml, body)) = split_frontmatter(content) else {
        return Ok((Frontmatter::new(), content.to_string()));
    };

    let map = yaml_to_map(yaml)?;
    Ok((Frontmatter::from_map(map), body.to_string()))
}

/// Extracts frontmatter from markdown content, recovering from malformed YAML.
///
/// A block whose YAML cannot be parsed is still removed from the body; a
/// warning is logged and empty frontmatter is returned in its place.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::markdown::extract_frontmatter;
///
/// let (fm, body) = extract_frontmatter("---\ntags: [a, b]\n---\n# Title\n");
/// assert_eq!(fm.tags(), vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(body, "# Title\n");
///
/// let (fm, body) = extract_frontmatter("---\ntags: [a\n---\n# Title\n");
/// assert!(fm.is_empty());
/// assert_eq!(body, "# Title\n");
/// ```
pub fn extract_frontmatter(content: &str) -> (Frontmatter, String) {
    let Some((yaml, body)) = split_frontmatter(content) else {
        return (Frontmatter::new(), content.to_string());
    };

    match yaml_to_map(yaml) {
        Ok(map) => (Frontmatter::from_map(map), body.to_string()),
        Err(e) => {
            warn!("Failed to parse YAML frontmatter: {e}");
            (Frontmatter::new(), body.to_string())
        }
    }
}

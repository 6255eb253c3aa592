//! Code themes available for highlighted code blocks.
//!
//! The page template uses a light background for `pre` blocks, so the
//! default is a light theme.

use lazy_static::lazy_static;
use syntect::highlighting::Theme as SyntectTheme;
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes};

use crate::markdown::MarkdownError;

/// A syntect theme used to colour code block tokens.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::markdown::highlighting::CodeTheme;
///
/// let theme = CodeTheme::try_from("solarized-light").unwrap();
/// assert_eq!(theme, CodeTheme::SolarizedLight);
/// assert_eq!(theme.kebab_name(), "solarized-light");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CodeTheme {
    /// GitHub-inspired light theme.
    #[default]
    Github,
    /// Base16 Ocean, light variant.
    Base16OceanLight,
    /// Gruvbox, light variant.
    GruvboxLight,
    /// OneHalf, light variant.
    OneHalfLight,
    /// Solarized, light variant.
    SolarizedLight,
    /// Base16 Ocean, dark variant.
    Base16OceanDark,
    /// Dracula.
    Dracula,
    /// Monokai Extended.
    Monokai,
    /// Nord.
    Nord,
}

impl CodeTheme {
    /// Returns all available code themes.
    pub fn all() -> &'static [CodeTheme] {
        &[
            CodeTheme::Github,
            CodeTheme::Base16OceanLight,
            CodeTheme::GruvboxLight,
            CodeTheme::OneHalfLight,
            CodeTheme::SolarizedLight,
            CodeTheme::Base16OceanDark,
            CodeTheme::Dracula,
            CodeTheme::Monokai,
            CodeTheme::Nord,
        ]
    }

    /// Returns the kebab-case name used on the command line.
    pub const fn kebab_name(self) -> &'static str {
        match self {
            CodeTheme::Github => "github",
            CodeTheme::Base16OceanLight => "base16-ocean-light",
            CodeTheme::GruvboxLight => "gruvbox-light",
            CodeTheme::OneHalfLight => "one-half-light",
            CodeTheme::SolarizedLight => "solarized-light",
            CodeTheme::Base16OceanDark => "base16-ocean-dark",
            CodeTheme::Dracula => "dracula",
            CodeTheme::Monokai => "monokai",
            CodeTheme::Nord => "nord",
        }
    }

    /// Returns a short human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            CodeTheme::Github => "GitHub's light theme - clean and minimal",
            CodeTheme::Base16OceanLight => "Base16 Ocean light - soft blue-green palette",
            CodeTheme::GruvboxLight => "Gruvbox light - retro groove with cream backgrounds",
            CodeTheme::OneHalfLight => "OneHalf light - soft colors on light backgrounds",
            CodeTheme::SolarizedLight => "Solarized light - precision colors on light backgrounds",
            CodeTheme::Base16OceanDark => "Base16 Ocean dark - blue-green palette with high contrast",
            CodeTheme::Dracula => "Dracula - vibrant purple and pink accents",
            CodeTheme::Monokai => "Monokai Extended - classic editor theme",
            CodeTheme::Nord => "Nord - arctic, north-bluish color palette",
        }
    }

    fn to_embedded_name(self) -> EmbeddedThemeName {
        match self {
            CodeTheme::Github => EmbeddedThemeName::InspiredGithub,
            CodeTheme::Base16OceanLight => EmbeddedThemeName::Base16OceanLight,
            CodeTheme::GruvboxLight => EmbeddedThemeName::GruvboxLight,
            CodeTheme::OneHalfLight => EmbeddedThemeName::OneHalfLight,
            CodeTheme::SolarizedLight => EmbeddedThemeName::SolarizedLight,
            CodeTheme::Base16OceanDark => EmbeddedThemeName::Base16OceanDark,
            CodeTheme::Dracula => EmbeddedThemeName::Dracula,
            CodeTheme::Monokai => EmbeddedThemeName::MonokaiExtended,
            CodeTheme::Nord => EmbeddedThemeName::Nord,
        }
    }
}

impl TryFrom<&str> for CodeTheme {
    type Error = MarkdownError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        let wanted = name.trim().to_ascii_lowercase();
        CodeTheme::all()
            .iter()
            .copied()
            .find(|theme| theme.kebab_name() == wanted)
            .ok_or_else(|| MarkdownError::ThemeLoad(format!("unknown code theme '{name}'")))
    }
}

impl std::fmt::Display for CodeTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kebab_name())
    }
}

lazy_static! {
    static ref THEME_SET: EmbeddedLazyThemeSet = extra_themes();
}

/// Loads the syntect theme for `theme`.
pub(super) fn load_theme(theme: CodeTheme) -> &'static SyntectTheme {
    THEME_SET.get(theme.to_embedded_name())
}

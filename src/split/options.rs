//! Segmentation strategy selection and options.

use crate::error::{Error, Result};
use std::env;
use std::fmt;

/// Default space advance as a fraction of the font size.
pub const DEFAULT_SPACE_RATIO: f32 = 0.25;

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Segmentation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitMode {
    /// One node per character, free line breaking (`zh`, `th`).
    Ungrouped,
    /// Characters grouped into space-delimited words.
    #[default]
    Latin,
    /// Kinsoku Shori line-break avoidance (`ja`, `cn`).
    Kinsoku,
    /// Korean line breaking (`ko`).
    Korean,
}

impl SplitMode {
    /// Select the strategy for an interface language code.
    ///
    /// Codes are matched exactly; anything unrecognized is [`SplitMode::Latin`].
    #[must_use]
    pub fn for_language(code: &str) -> Self {
        match code {
            "ja" | "cn" => Self::Kinsoku,
            "ko" => Self::Korean,
            "zh" | "th" => Self::Ungrouped,
            _ => Self::Latin,
        }
    }

    /// Parse a mode name (`ungrouped`, `latin`, `kinsoku`, `korean`) or its
    /// number (`1` to `4`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "1" | "ungrouped" | "none" => Ok(Self::Ungrouped),
            "2" | "latin" | "word" | "words" => Ok(Self::Latin),
            "3" | "kinsoku" | "cjk" => Ok(Self::Kinsoku),
            "4" | "korean" | "hangul" => Ok(Self::Korean),
            _ => Err(Error::UnknownMode(name.to_string())),
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ungrouped => "ungrouped",
            Self::Latin => "latin",
            Self::Kinsoku => "kinsoku",
            Self::Korean => "korean",
        }
    }

    /// Numeric mode (1 to 4) as used by host settings.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Ungrouped => 1,
            Self::Latin => 2,
            Self::Kinsoku => 3,
            Self::Korean => 4,
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What one character node wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitUnit {
    /// One Unicode scalar value per node.
    #[default]
    Char,
    /// One extended grapheme cluster per node.
    Grapheme,
}

impl SplitUnit {
    /// Parse `char` or `grapheme`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "char" | "chars" | "scalar" => Ok(Self::Char),
            "grapheme" | "graphemes" | "cluster" => Ok(Self::Grapheme),
            other => Err(Error::InvalidArgument(format!(
                "unknown split unit: {other} (valid: char, grapheme)"
            ))),
        }
    }
}

/// Options for one segmentation call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitOptions {
    /// Segmentation strategy.
    pub mode: SplitMode,
    /// Character or grapheme granularity.
    pub unit: SplitUnit,
    /// Node height, normally the container font size in pixels.
    pub font_size: f32,
    /// Space advance as a fraction of `font_size`.
    pub space_ratio: f32,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            mode: SplitMode::default(),
            unit: SplitUnit::default(),
            font_size: 0.0,
            space_ratio: DEFAULT_SPACE_RATIO,
        }
    }
}

impl SplitOptions {
    /// Options for an explicit mode.
    #[must_use]
    pub fn new(mode: SplitMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Options for an interface language code.
    #[must_use]
    pub fn for_language(code: &str) -> Self {
        Self::new(SplitMode::for_language(code))
    }

    /// Set the node granularity.
    #[must_use]
    pub fn with_unit(mut self, unit: SplitUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the font size in pixels.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = if font_size.is_finite() && font_size >= 0.0 {
            font_size
        } else {
            0.0
        };
        self
    }

    /// Set the space advance ratio.
    #[must_use]
    pub fn with_space_ratio(mut self, ratio: f32) -> Self {
        if ratio.is_finite() && ratio >= 0.0 {
            self.space_ratio = ratio;
        }
        self
    }

    /// Advance width of a space node.
    #[must_use]
    pub fn space_width(&self) -> f32 {
        self.font_size * self.space_ratio
    }

    /// Read options from the environment.
    ///
    /// - `THEATRE_LANG`, else the language of `LC_ALL` / `LANG`, selects the mode
    /// - `THEATRE_SPLIT_MODE` overrides the mode by name
    /// - `THEATRE_SPLIT_UNIT` selects `char` or `grapheme`
    pub fn from_env() -> Result<Self> {
        let mut options = Self::for_language(&env_language());
        if let Some(mode) = non_empty_var("THEATRE_SPLIT_MODE") {
            options.mode = SplitMode::from_name(&mode)?;
        }
        if let Some(unit) = non_empty_var("THEATRE_SPLIT_UNIT") {
            options.unit = SplitUnit::from_name(&unit)?;
        }
        Ok(options)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Interface language from the environment, `"en"` when unset.
#[must_use]
pub fn env_language() -> String {
    if let Some(lang) = non_empty_var("THEATRE_LANG") {
        return lang.trim().to_string();
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|key| non_empty_var(key))
        .find_map(|locale| language_from_locale(&locale))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Extract the language code from a POSIX locale (`ja_JP.UTF-8` is `ja`).
///
/// Returns `None` for the `C` / `POSIX` locales.
#[must_use]
pub fn language_from_locale(locale: &str) -> Option<String> {
    let lang = locale
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match lang.as_str() {
        "" | "c" | "posix" => None,
        _ => Some(lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_table() {
        assert_eq!(SplitMode::for_language("ja"), SplitMode::Kinsoku);
        assert_eq!(SplitMode::for_language("cn"), SplitMode::Kinsoku);
        assert_eq!(SplitMode::for_language("ko"), SplitMode::Korean);
        assert_eq!(SplitMode::for_language("zh"), SplitMode::Ungrouped);
        assert_eq!(SplitMode::for_language("th"), SplitMode::Ungrouped);
        assert_eq!(SplitMode::for_language("en"), SplitMode::Latin);
        assert_eq!(SplitMode::for_language("fr"), SplitMode::Latin);
        assert_eq!(SplitMode::for_language(""), SplitMode::Latin);
    }

    #[test]
    fn test_language_match_is_exact() {
        assert_eq!(SplitMode::for_language("ja-JP"), SplitMode::Latin);
        assert_eq!(SplitMode::for_language("JA"), SplitMode::Latin);
    }

    #[test]
    fn test_mode_names() {
        for mode in [
            SplitMode::Ungrouped,
            SplitMode::Latin,
            SplitMode::Kinsoku,
            SplitMode::Korean,
        ] {
            assert_eq!(SplitMode::from_name(mode.name()).ok(), Some(mode));
            assert_eq!(SplitMode::from_name(&mode.number().to_string()).ok(), Some(mode));
        }
        assert!(matches!(
            SplitMode::from_name("vertical"),
            Err(Error::UnknownMode(_))
        ));
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(SplitUnit::from_name("Grapheme").ok(), Some(SplitUnit::Grapheme));
        assert_eq!(SplitUnit::from_name("char").ok(), Some(SplitUnit::Char));
        assert!(SplitUnit::from_name("word").is_err());
    }

    #[test]
    fn test_space_width() {
        let options = SplitOptions::default().with_font_size(24.0);
        assert_eq!(options.space_width(), 6.0);
        let options = options.with_space_ratio(0.5);
        assert_eq!(options.space_width(), 12.0);
        let options = options.with_space_ratio(f32::NAN);
        assert_eq!(options.space_width(), 12.0);
    }

    #[test]
    fn test_invalid_font_size_is_zero() {
        assert_eq!(SplitOptions::default().with_font_size(-3.0).font_size, 0.0);
        assert_eq!(SplitOptions::default().with_font_size(f32::INFINITY).font_size, 0.0);
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("ja_JP.UTF-8").as_deref(), Some("ja"));
        assert_eq!(language_from_locale("ko-KR").as_deref(), Some("ko"));
        assert_eq!(language_from_locale("en"), Some("en".to_string()));
        assert_eq!(language_from_locale("C.UTF-8"), None);
        assert_eq!(language_from_locale("POSIX"), None);
        assert_eq!(language_from_locale(""), None);
    }
}

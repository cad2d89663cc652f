//! UI preference resolution: stored value, else system default.

use serde::Serialize;

/// Base root font size in pixels before the multiplier.
pub const BASE_FONT_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "small" => Some(FontSize::Small),
            "medium" => Some(FontSize::Medium),
            "large" => Some(FontSize::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            FontSize::Small => 0.875,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.125,
        }
    }

    pub fn root_px(&self) -> f64 {
        self.multiplier() * BASE_FONT_PX
    }
}

/// Preferences ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UiPreferences {
    pub theme: Theme,
    pub font_size: FontSize,
    pub root_font_px: f64,
}

impl UiPreferences {
    /// Resolve stored values. An absent or unrecognised theme (including
    /// `"system"`) follows the system preference; an absent or unrecognised
    /// font size is medium.
    pub fn resolve(
        stored_theme: Option<&str>,
        stored_font_size: Option<&str>,
        system_prefers_dark: bool,
    ) -> Self {
        let theme = stored_theme
            .and_then(Theme::from_stored)
            .unwrap_or_else(|| Theme::system(system_prefers_dark));
        let font_size = stored_font_size
            .and_then(FontSize::from_stored)
            .unwrap_or_default();
        Self {
            theme,
            font_size,
            root_font_px: font_size.root_px(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stored_theme_wins_over_system() {
        let prefs = UiPreferences::resolve(Some("light"), None, true);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_missing_or_invalid_theme_follows_system() {
        assert_eq!(UiPreferences::resolve(None, None, true).theme, Theme::Dark);
        assert_eq!(UiPreferences::resolve(Some("system"), None, false).theme, Theme::Light);
        assert_eq!(UiPreferences::resolve(Some("Dark"), None, false).theme, Theme::Light);
    }

    #[test]
    fn test_font_size_resolution() {
        assert_eq!(UiPreferences::resolve(None, Some("small"), false).root_font_px, 14.0);
        assert_eq!(UiPreferences::resolve(None, Some("large"), false).root_font_px, 18.0);
        let fallback = UiPreferences::resolve(None, Some("huge"), false);
        assert_eq!(fallback.font_size, FontSize::Medium);
        assert_eq!(fallback.root_font_px, 16.0);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}

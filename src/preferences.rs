use crate::color::DisplayMode;

/// Color theme of the viewer page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Text scale of the viewer page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontScale {
    #[default]
    Normal,
    Large,
    Larger,
}

/// Display preferences the viewer pages persist between visits.
///
/// All fields are optional in stored form; missing ones take their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ViewerPreferences {
    pub theme: Theme,
    pub font_size: FontScale,
    pub high_contrast: bool,
}

impl ViewerPreferences {
    /// Parse preferences from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse preferences from the JSON the pages keep in local storage.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    #[cfg(feature = "json")]
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Flags used to pick a series palette.
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::new(self.theme == Theme::Dark, self.high_contrast)
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    /// Step to the next text size, wrapping from `Larger` back to `Normal`.
    pub fn cycle_font_size(&mut self) {
        self.font_size = match self.font_size {
            FontScale::Normal => FontScale::Large,
            FontScale::Large => FontScale::Larger,
            FontScale::Larger => FontScale::Normal,
        };
    }

    pub fn toggle_high_contrast(&mut self) {
        self.high_contrast = !self.high_contrast;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences() {
        let prefs = ViewerPreferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.font_size, FontScale::Normal);
        assert!(!prefs.high_contrast);
        assert_eq!(prefs.display_mode(), DisplayMode::new(false, false));
    }

    #[test]
    fn toggles() {
        let mut prefs = ViewerPreferences::default();
        prefs.toggle_theme();
        prefs.toggle_high_contrast();
        assert_eq!(prefs.display_mode(), DisplayMode::new(true, true));
        prefs.toggle_theme();
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn font_size_cycles() {
        let mut prefs = ViewerPreferences::default();
        prefs.cycle_font_size();
        assert_eq!(prefs.font_size, FontScale::Large);
        prefs.cycle_font_size();
        assert_eq!(prefs.font_size, FontScale::Larger);
        prefs.cycle_font_size();
        assert_eq!(prefs.font_size, FontScale::Normal);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn from_toml() {
        let prefs = ViewerPreferences::from_toml_str("theme = \"dark\"\nfontSize = \"larger\"\n").unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.font_size, FontScale::Larger);
        assert!(!prefs.high_contrast);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_storage_format() {
        let prefs = ViewerPreferences::from_json_str(
            r#"{"theme":"dark","fontSize":"large","highContrast":true}"#,
        )
        .unwrap();
        assert_eq!(
            prefs,
            ViewerPreferences {
                theme: Theme::Dark,
                font_size: FontScale::Large,
                high_contrast: true,
            }
        );
        assert_eq!(
            prefs.to_json_string().unwrap(),
            r#"{"theme":"dark","fontSize":"large","highContrast":true}"#
        );
        assert_eq!(ViewerPreferences::from_json_str("{}").unwrap(), ViewerPreferences::default());
    }
}

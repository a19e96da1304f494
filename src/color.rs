//! Series palettes for light, dark and high-contrast display.

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Returns a CSS `rgba(r, g, b, a)` string.
    pub fn rgba_css(self, alpha: f64) -> String {
        let Rgb(r, g, b) = self;
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

/// Number of entries in every palette.
pub const PALETTE_LEN: usize = 8;

const LIGHT: [Rgb; PALETTE_LEN] = [
    Rgb(75, 192, 192),
    Rgb(54, 162, 235),
    Rgb(255, 99, 132),
    Rgb(255, 159, 64),
    Rgb(153, 102, 255),
    Rgb(255, 205, 86),
    Rgb(201, 203, 207),
    Rgb(54, 162, 235),
];

// Brighter tones for dark backgrounds
const DARK: [Rgb; PALETTE_LEN] = [
    Rgb(100, 149, 237), // cornflower blue
    Rgb(144, 238, 144), // light green
    Rgb(255, 182, 193), // light pink
    Rgb(221, 160, 221), // plum
    Rgb(255, 215, 0),   // gold
    Rgb(70, 130, 180),  // steel blue
    Rgb(240, 128, 128), // light coral
    Rgb(152, 251, 152), // pale green
];

const HIGH_CONTRAST: [Rgb; PALETTE_LEN] = [
    Rgb(255, 255, 0),
    Rgb(0, 255, 255),
    Rgb(255, 0, 255),
    Rgb(0, 255, 0),
    Rgb(0, 0, 255),
    Rgb(255, 165, 0),
    Rgb(255, 0, 0),
    Rgb(128, 0, 128),
];

/// The two display flags that drive palette choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DisplayMode {
    pub dark: bool,
    pub high_contrast: bool,
}

impl DisplayMode {
    pub fn new(dark: bool, high_contrast: bool) -> Self {
        Self { dark, high_contrast }
    }

    /// Palette for this mode. High contrast wins over dark.
    pub fn palette(self) -> Palette {
        if self.high_contrast {
            Palette::HighContrast
        } else if self.dark {
            Palette::Dark
        } else {
            Palette::Light
        }
    }
}

/// One of the fixed series palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    Light,
    Dark,
    HighContrast,
}

impl Palette {
    pub fn colors(self) -> &'static [Rgb; PALETTE_LEN] {
        match self {
            Palette::Light => &LIGHT,
            Palette::Dark => &DARK,
            Palette::HighContrast => &HIGH_CONTRAST,
        }
    }

    /// Color for the given index, wrapping around the palette.
    #[inline]
    pub fn color(self, index: usize) -> Rgb {
        self.colors()[index % PALETTE_LEN]
    }
}

/// Fill and stroke colors for one series or slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesColor {
    pub rgb: Rgb,
}

impl SeriesColor {
    pub const BACKGROUND_ALPHA: f64 = 0.7;
    pub const BORDER_ALPHA: f64 = 1.0;

    /// Translucent fill, e.g. `rgba(75, 192, 192, 0.7)`.
    pub fn background_css(&self) -> String {
        self.rgb.rgba_css(Self::BACKGROUND_ALPHA)
    }

    /// Opaque border, e.g. `rgba(75, 192, 192, 1)`.
    pub fn border_css(&self) -> String {
        self.rgb.rgba_css(Self::BORDER_ALPHA)
    }
}

/// Color for the series at `index` under the given display mode.
///
/// ## Example
///
/// ```rust
/// use csv_chart_core::{series_color, DisplayMode};
///
/// let mode = DisplayMode::default();
/// assert_eq!(series_color(0, mode), series_color(8, mode));
/// assert_eq!(series_color(0, mode).border_css(), "rgba(75, 192, 192, 1)");
/// ```
pub fn series_color(index: usize, mode: DisplayMode) -> SeriesColor {
    SeriesColor {
        rgb: mode.palette().color(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_by_palette_length() {
        for mode in [
            DisplayMode::new(false, false),
            DisplayMode::new(true, false),
            DisplayMode::new(false, true),
            DisplayMode::new(true, true),
        ] {
            assert_eq!(series_color(0, mode), series_color(8, mode));
            assert_eq!(series_color(3, mode), series_color(19, mode));
        }
    }

    #[test]
    fn palette_selection() {
        assert_eq!(DisplayMode::new(false, false).palette(), Palette::Light);
        assert_eq!(DisplayMode::new(true, false).palette(), Palette::Dark);
        assert_eq!(DisplayMode::new(false, true).palette(), Palette::HighContrast);
        assert_eq!(DisplayMode::new(true, true).palette(), Palette::HighContrast);
    }

    #[test]
    fn first_colors() {
        assert_eq!(series_color(0, DisplayMode::new(false, false)).rgb, Rgb(75, 192, 192));
        assert_eq!(series_color(0, DisplayMode::new(true, false)).rgb, Rgb(100, 149, 237));
        assert_eq!(series_color(1, DisplayMode::new(false, true)).rgb, Rgb(0, 255, 255));
    }

    #[test]
    fn stable_across_calls() {
        let mode = DisplayMode::new(true, false);
        let first: Vec<SeriesColor> = (0..20).map(|i| series_color(i, mode)).collect();
        let second: Vec<SeriesColor> = (0..20).map(|i| series_color(i, mode)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn css_strings() {
        let color = SeriesColor { rgb: Rgb(54, 162, 235) };
        assert_eq!(color.background_css(), "rgba(54, 162, 235, 0.7)");
        assert_eq!(color.border_css(), "rgba(54, 162, 235, 1)");
    }
}

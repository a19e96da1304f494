//! Chart kinds offered by the viewer.

use std::str::FromStr;

use crate::projection::ProjectionError;

/// Visual presentation chosen by the user.
///
/// Identifiers match the host chart library (`bar`, `horizontalBar`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ChartKind {
    #[default]
    Bar,
    /// Bar chart with the category axis drawn vertically
    HorizontalBar,
    Line,
    Pie,
    Doughnut,
    PolarArea,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Bar,
        ChartKind::HorizontalBar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Doughnut,
        ChartKind::PolarArea,
        ChartKind::Radar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::HorizontalBar => "horizontalBar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::PolarArea => "polarArea",
            ChartKind::Radar => "radar",
        }
    }

    /// Chart type to instantiate in the host library.
    ///
    /// A horizontal bar chart is a plain bar chart with a swapped index axis.
    pub fn base_kind(self) -> ChartKind {
        match self {
            ChartKind::HorizontalBar => ChartKind::Bar,
            other => other,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self == ChartKind::HorizontalBar
    }

    /// Circular charts show one series and have no cartesian axes.
    #[inline]
    pub fn is_circular(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut | ChartKind::PolarArea)
    }

    /// Inner cutout in percent for pie-style charts.
    pub fn cutout_percent(self) -> Option<u8> {
        match self {
            ChartKind::Pie => Some(0),
            ChartKind::Doughnut => Some(60),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ProjectionError;

    /// Parse a host library identifier. `donut` and `horizontal-bar` are
    /// accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "bar" => ChartKind::Bar,
            "horizontalBar" | "horizontal-bar" => ChartKind::HorizontalBar,
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            "doughnut" | "donut" => ChartKind::Doughnut,
            "polarArea" | "polar-area" => ChartKind::PolarArea,
            "radar" => ChartKind::Radar,
            other => return Err(ProjectionError::UnknownChartKind(other.to_string())),
        };
        Ok(kind)
    }
}

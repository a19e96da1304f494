//! Projection of a parsed table into chart-ready series.

use thiserror::Error;
use tracing::debug;

use crate::color::{series_color, DisplayMode, SeriesColor};
use crate::error::ErrorKind;
use crate::{ChartKind, Dataset};

/// Error type for projection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// No category field or no value field selected
    #[error("Select a category (X) field and at least one value (Y) field")]
    MissingAxisSelection,
    /// Chart kind identifier not supported
    #[error("Unknown chart kind: {0:?}")]
    UnknownChartKind(String),
}

impl ProjectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectionError::MissingAxisSelection => ErrorKind::MissingAxisSelection,
            ProjectionError::UnknownChartKind(_) => ErrorKind::UnknownChartKind,
        }
    }
}

/// Fields picked for the category (X) axis and the value (Y) series.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSelection {
    pub category: String,
    pub values: Vec<String>,
}

impl AxisSelection {
    pub fn new(category: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            category: category.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Selection applied right after a parse: first column as category, every
    /// other column as a value series.
    ///
    /// Returns `None` when there are fewer than two headers.
    pub fn default_for(headers: &[String]) -> Option<Self> {
        match headers {
            [category, values @ ..] if !values.is_empty() => Some(Self {
                category: category.clone(),
                values: values.to_vec(),
            }),
            _ => None,
        }
    }

    /// Value fields with blank entries removed.
    fn value_fields(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Check if both a category and at least one value field are set.
    pub fn is_complete(&self) -> bool {
        !self.category.is_empty() && self.value_fields().next().is_some()
    }
}

/// One numeric series, aligned with [`ChartSeries::labels`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Series {
    /// Source column name
    pub label: String,
    pub values: Vec<f64>,
    pub color: SeriesColor,
}

/// Chart payload for the rendering collaborator.
///
/// Carries data and colors only; titles, fonts and animation belong to the
/// host chart library configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub category_field: String,
    /// Category axis values, one per row
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    /// Per-slice colors for circular charts, empty otherwise
    pub slice_colors: Vec<SeriesColor>,
    /// Value fields dropped because the chart kind shows one series
    pub ignored_fields: Vec<String>,
}

/// Project a dataset into chart series.
///
/// Category values are used verbatim. Value cells go through
/// [`coerce_number`], so malformed numbers become `0.0` instead of failing.
/// Circular kinds (pie, doughnut, polar area) keep only the first value field
/// and list the rest in [`ChartSeries::ignored_fields`].
///
/// The result depends only on the arguments.
///
/// ## Example
///
/// ```rust
/// use csv_chart_core::{parse_csv, project, AxisSelection, ChartKind, DisplayMode};
///
/// let dataset = parse_csv("month,sales\nJan,10\nFeb,x").unwrap();
/// let selection = AxisSelection::new("month", ["sales"]);
/// let chart = project(&dataset, &selection, ChartKind::Bar, DisplayMode::default()).unwrap();
///
/// assert_eq!(chart.labels, vec!["Jan", "Feb"]);
/// assert_eq!(chart.series[0].values, vec![10.0, 0.0]);
/// ```
pub fn project(
    dataset: &Dataset,
    selection: &AxisSelection,
    kind: ChartKind,
    mode: DisplayMode,
) -> Result<ChartSeries, ProjectionError> {
    if !selection.is_complete() {
        return Err(ProjectionError::MissingAxisSelection);
    }

    let labels: Vec<String> = dataset
        .column(&selection.category)
        .map(str::to_string)
        .collect();

    let mut fields = selection.value_fields();
    let mut ignored_fields = Vec::new();
    let plotted: Vec<&str> = if kind.is_circular() {
        let first = fields.next().into_iter().collect();
        ignored_fields = fields.map(str::to_string).collect();
        if !ignored_fields.is_empty() {
            debug!(kind = %kind, ignored = ?ignored_fields, "circular chart keeps only the first series");
        }
        first
    } else {
        fields.collect()
    };

    let series: Vec<Series> = plotted
        .iter()
        .enumerate()
        .map(|(index, field)| Series {
            label: field.to_string(),
            values: dataset.column(field).map(coerce_number).collect(),
            color: series_color(index, mode),
        })
        .collect();

    let slice_colors = if kind.is_circular() {
        (0..labels.len()).map(|i| series_color(i, mode)).collect()
    } else {
        Vec::new()
    };

    debug!(
        kind = %kind,
        rows = labels.len(),
        series = series.len(),
        "projected chart series"
    );

    Ok(ChartSeries {
        kind,
        category_field: selection.category.clone(),
        labels,
        series,
        slice_colors,
        ignored_fields,
    })
}

/// Read a cell as a number the way a browser's `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12kg"` reads as `12`. Cells without a numeric prefix read as `0.0`.
///
/// ## Example
///
/// ```rust
/// use csv_chart_core::coerce_number;
///
/// assert_eq!(coerce_number("3.5"), 3.5);
/// assert_eq!(coerce_number(" -2e3 units"), -2000.0);
/// assert_eq!(coerce_number("n/a"), 0.0);
/// ```
pub fn coerce_number(cell: &str) -> f64 {
    numeric_prefix(cell.trim_start())
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let inf = f64::INFINITY;
        return Some(if s.starts_with('-') { -inf } else { inf });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

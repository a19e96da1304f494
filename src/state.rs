//! Owned viewer state driving repeated parse and projection calls.
//!
//! The shell keeps one [`ViewerState`] and feeds it user actions:
//! 1. `load` with freshly read CSV text
//! 2. `select` / `set_chart_kind` / `set_preferences` as controls change
//! 3. `chart` whenever the chart needs redrawing

use tracing::info;

use crate::error::ViewerError;
use crate::projection::{project, AxisSelection, ChartSeries};
use crate::{parse_csv, ChartKind, Dataset, ViewerPreferences};

/// Current dataset, axis selection, chart kind and display preferences.
#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    dataset: Option<Dataset>,
    selection: AxisSelection,
    kind: ChartKind,
    preferences: ViewerPreferences,
}

impl ViewerState {
    /// Create an empty state with default chart kind and preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty state with restored preferences.
    pub fn with_preferences(preferences: ViewerPreferences) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    /// Parse `text` and replace the current dataset.
    ///
    /// On success the axis selection resets to the default for the new
    /// headers. On failure the previous dataset and selection are kept.
    pub fn load(&mut self, text: &str) -> Result<&Dataset, ViewerError> {
        let dataset = parse_csv(text)?;
        info!(
            rows = dataset.len(),
            columns = dataset.headers().len(),
            skipped = dataset.skipped_lines().len(),
            "loaded dataset"
        );
        self.selection = AxisSelection::default_for(dataset.headers()).unwrap_or_default();
        Ok(self.dataset.insert(dataset))
    }

    /// Drop the dataset and selection. Chart kind and preferences survive.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.selection = AxisSelection::default();
    }

    pub fn select(&mut self, selection: AxisSelection) {
        self.selection = selection;
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.kind = kind;
    }

    pub fn set_preferences(&mut self, preferences: ViewerPreferences) {
        self.preferences = preferences;
    }

    #[inline]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    #[inline]
    pub fn selection(&self) -> &AxisSelection {
        &self.selection
    }

    #[inline]
    pub fn chart_kind(&self) -> ChartKind {
        self.kind
    }

    #[inline]
    pub fn preferences(&self) -> &ViewerPreferences {
        &self.preferences
    }

    /// Mutable access for the preference toggles.
    pub fn preferences_mut(&mut self) -> &mut ViewerPreferences {
        &mut self.preferences
    }

    /// Check if a dataset is loaded and the selection can be charted.
    pub fn can_chart(&self) -> bool {
        self.dataset.is_some() && self.selection.is_complete()
    }

    /// Project the current dataset with the current selection, kind and
    /// display mode.
    pub fn chart(&self) -> Result<ChartSeries, ViewerError> {
        let dataset = self.dataset.as_ref().ok_or(ViewerError::NoDataset)?;
        let series = project(
            dataset,
            &self.selection,
            self.kind,
            self.preferences.display_mode(),
        )?;
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::{series_color, DisplayMode};

    #[test]
    fn test_load_sets_default_selection() {
        let mut state = ViewerState::new();
        assert!(!state.can_chart());

        state.load("month,sales,cost\nJan,10,2\nFeb,12,3").unwrap();
        assert_eq!(state.selection(), &AxisSelection::new("month", ["sales", "cost"]));
        assert!(state.can_chart());

        let chart = state.chart().unwrap();
        assert_eq!(chart.labels, vec!["Jan", "Feb"]);
        assert_eq!(chart.series.len(), 2);
    }

    #[test]
    fn test_reload_replaces_dataset() {
        let mut state = ViewerState::new();
        state.load("a,b\n1,2\n3,4\n5,6").unwrap();
        state.load("x,y\nq,9").unwrap();

        let dataset = state.dataset().unwrap();
        assert_eq!(dataset.headers(), ["x", "y"]);
        assert_eq!(dataset.len(), 1);

        let chart = state.chart().unwrap();
        assert_eq!(chart.labels, vec!["q"]);
        assert_eq!(chart.series[0].values, vec![9.0]);
    }

    #[test]
    fn test_failed_load_keeps_previous_dataset() {
        let mut state = ViewerState::new();
        state.load("a,b\n1,2").unwrap();
        let err = state.load("only-header").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientRows);
        assert_eq!(state.dataset().unwrap().headers(), ["a", "b"]);
        assert_eq!(state.selection(), &AxisSelection::new("a", ["b"]));
    }

    #[test]
    fn test_clear() {
        let mut state = ViewerState::new();
        state.set_chart_kind(ChartKind::Line);
        state.load("a,b\n1,2").unwrap();
        state.clear();

        assert!(state.dataset().is_none());
        assert_eq!(state.chart_kind(), ChartKind::Line);
        assert_eq!(state.chart().unwrap_err(), ViewerError::NoDataset);
    }

    #[test]
    fn test_single_column_needs_selection() {
        let mut state = ViewerState::new();
        state.load("only\nvalue").unwrap();
        assert_eq!(
            state.chart().unwrap_err().kind(),
            ErrorKind::MissingAxisSelection
        );

        state.select(AxisSelection::new("only", ["only"]));
        assert_eq!(state.chart().unwrap().series[0].values, vec![0.0]);
    }

    #[test]
    fn test_preferences_drive_colors() {
        let mut state = ViewerState::new();
        state.load("k,v\na,1").unwrap();
        state.preferences_mut().toggle_high_contrast();

        let chart = state.chart().unwrap();
        assert_eq!(chart.series[0].color, series_color(0, DisplayMode::new(false, true)));
    }

    #[test]
    fn test_same_state_same_chart() {
        let mut state = ViewerState::new();
        state.load("k,v,w\na,1,2\nb,3,x").unwrap();
        state.set_chart_kind(ChartKind::Doughnut);
        assert_eq!(state.chart().unwrap(), state.chart().unwrap());
        assert_eq!(state.chart().unwrap().ignored_fields, vec!["w"]);
    }
}

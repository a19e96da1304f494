//! WASM bindings for the viewer pages.
//!
//! Results are plain JS objects shaped for the page scripts; errors are
//! `{ kind, message }` objects where `kind` is an [`ErrorKind`] code.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::error::ErrorKind;
use crate::projection::ChartSeries;
use crate::{AxisSelection, ChartKind, Dataset, Theme, ViewerState};

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value)?;
    Ok(())
}

fn error_object(kind: ErrorKind, message: &str) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set(&obj, "kind", &JsValue::from_str(kind.code()))?;
    set(&obj, "message", &JsValue::from_str(message))?;
    Ok(obj.into())
}

/// `{ kind, message }`, or the bare message if the object can't be built.
fn error_value(kind: ErrorKind, message: String) -> JsValue {
    error_object(kind, &message).unwrap_or_else(|_| JsValue::from_str(&message))
}

fn string_array<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Array {
    let array = Array::new();
    for item in items {
        array.push(&JsValue::from_str(item.as_ref()));
    }
    array
}

fn dataset_to_js(dataset: &Dataset) -> Result<JsValue, JsValue> {
    let rows = Array::new();
    for record in dataset.records() {
        let row = Object::new();
        for (header, value) in record.iter() {
            set(&row, header, &JsValue::from_str(value))?;
        }
        rows.push(&row);
    }

    let skipped = Array::new();
    for line in dataset.skipped_lines() {
        skipped.push(&JsValue::from_f64(*line as f64));
    }

    let obj = Object::new();
    set(&obj, "headers", &string_array(dataset.headers()))?;
    set(&obj, "rows", &rows)?;
    set(&obj, "skippedRows", &skipped)?;
    Ok(obj.into())
}

fn chart_to_js(chart: &ChartSeries) -> Result<JsValue, JsValue> {
    let datasets = Array::new();
    for series in &chart.series {
        let data = Array::new();
        for value in &series.values {
            data.push(&JsValue::from_f64(*value));
        }

        let entry = Object::new();
        set(&entry, "label", &JsValue::from_str(&series.label))?;
        set(&entry, "data", &data)?;
        if chart.kind.is_circular() {
            // One color per slice.
            let backgrounds = string_array(chart.slice_colors.iter().map(|c| c.background_css()));
            let borders = string_array(chart.slice_colors.iter().map(|c| c.border_css()));
            set(&entry, "backgroundColor", &backgrounds)?;
            set(&entry, "borderColor", &borders)?;
        } else {
            set(&entry, "backgroundColor", &JsValue::from_str(&series.color.background_css()))?;
            set(&entry, "borderColor", &JsValue::from_str(&series.color.border_css()))?;
        }
        datasets.push(&entry);
    }

    let obj = Object::new();
    set(&obj, "type", &JsValue::from_str(chart.kind.base_kind().as_str()))?;
    set(&obj, "kind", &JsValue::from_str(chart.kind.as_str()))?;
    set(&obj, "horizontal", &JsValue::from_bool(chart.kind.is_horizontal()))?;
    if let Some(cutout) = chart.kind.cutout_percent() {
        set(&obj, "cutout", &JsValue::from_str(&format!("{cutout}%")))?;
    }
    set(&obj, "categoryField", &JsValue::from_str(&chart.category_field))?;
    set(&obj, "labels", &string_array(&chart.labels))?;
    set(&obj, "datasets", &datasets)?;
    set(&obj, "ignored", &string_array(&chart.ignored_fields))?;
    Ok(obj.into())
}

/// Parse CSV text into `{ headers, rows, skippedRows }`.
#[wasm_bindgen(js_name = parseCsv)]
pub fn parse_csv_js(text: &str) -> Result<JsValue, JsValue> {
    let dataset = crate::parse_csv(text).map_err(|e| error_value(e.kind(), e.to_string()))?;
    dataset_to_js(&dataset)
}

/// Viewer state handle owned by a page.
#[wasm_bindgen]
#[derive(Default)]
pub struct CsvViewer {
    state: ViewerState,
}

#[wasm_bindgen]
impl CsvViewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CsvViewer {
        CsvViewer::default()
    }

    /// Replace the dataset; returns the parsed table.
    pub fn load(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let dataset = self
            .state
            .load(text)
            .map_err(|e| error_value(e.kind(), e.to_string()))?;
        dataset_to_js(dataset)
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Select the category field and an array of value field names.
    pub fn select(&mut self, category: &str, values: &Array) {
        let values: Vec<String> = values.iter().filter_map(|v| v.as_string()).collect();
        self.state.select(AxisSelection::new(category, values));
    }

    #[wasm_bindgen(js_name = setChartKind)]
    pub fn set_chart_kind(&mut self, kind: &str) -> Result<(), JsValue> {
        let kind = kind
            .parse::<ChartKind>()
            .map_err(|e| error_value(e.kind(), e.to_string()))?;
        self.state.set_chart_kind(kind);
        Ok(())
    }

    #[wasm_bindgen(js_name = setDisplayMode)]
    pub fn set_display_mode(&mut self, dark: bool, high_contrast: bool) {
        let prefs = self.state.preferences_mut();
        prefs.theme = if dark { Theme::Dark } else { Theme::Light };
        prefs.high_contrast = high_contrast;
    }

    /// Chart payload for the current state.
    pub fn chart(&self) -> Result<JsValue, JsValue> {
        let chart = self
            .state
            .chart()
            .map_err(|e| error_value(e.kind(), e.to_string()))?;
        chart_to_js(&chart)
    }
}

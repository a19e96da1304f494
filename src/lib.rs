//! # csv-chart-core
//!
//! Core CSV parsing and chart series projection for browser data viewers.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Parsing pasted or uploaded CSV text into a header/row table
//! - Projecting table columns into chart-ready numeric series
//! - Assigning series colors for light, dark and high-contrast display
//! - Holding viewer state between user actions
//!
//! Table and chart rendering stay with the caller.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load viewer preferences from TOML
//! - `json` - Load and store viewer preferences as JSON
//! - `web` - Enable web/WASM bindings for the viewer pages
//!
//! ## Example
//!
//! ```rust
//! use csv_chart_core::{AxisSelection, ChartKind, ViewerState};
//!
//! let mut state = ViewerState::new();
//! state.load("month,sales\nJan,10\nFeb,12\n").unwrap();
//!
//! state.select(AxisSelection::new("month", ["sales"]));
//! state.set_chart_kind(ChartKind::Line);
//!
//! let chart = state.chart().unwrap();
//! assert_eq!(chart.labels, vec!["Jan", "Feb"]);
//! assert_eq!(chart.series[0].values, vec![10.0, 12.0]);
//! ```

mod chart;
mod color;
mod data;
mod error;
mod parser;
mod preferences;
pub mod projection;
mod state;

#[cfg(feature = "web")]
pub mod web;

pub use chart::ChartKind;
pub use color::{series_color, DisplayMode, Palette, Rgb, SeriesColor, PALETTE_LEN};
pub use data::{Dataset, Record};
pub use error::{ErrorKind, ViewerError};
pub use parser::{parse_csv, split_csv_line, ParseError};
pub use preferences::{FontScale, Theme, ViewerPreferences};
pub use projection::{coerce_number, project, AxisSelection, ChartSeries, ProjectionError, Series};
pub use state::ViewerState;

// File: crates/tally-core/src/lib.rs
// Summary: Core library entry point; entry model, aggregation and chart rendering.

pub mod aggregate;
pub mod axis;
pub mod chart;
pub mod domain;
pub mod entry;
pub mod error;
mod frame;
pub mod grid;
pub mod pipeline;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use aggregate::{aggregate_all, by_day, by_label, by_month, Aggregates};
pub use axis::{Axis, Ticks};
pub use chart::{Chart, ChartKind, Marks, RenderOptions};
pub use domain::Domain;
pub use entry::{Entry, EntryForm, DEFAULT_LABEL};
pub use error::TallyError;
pub use pipeline::{build_chart, render_chart};
pub use series::{CountSeries, KeyCounts, LabelCounts};
pub use theme::Theme;
pub use text::TextShaper;

/// PNG file signature; every rendered chart starts with these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

pub use uuid::Uuid;

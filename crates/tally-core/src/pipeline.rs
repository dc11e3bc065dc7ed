// File: crates/tally-core/src/pipeline.rs
// Summary: Entries -> aggregation -> chart -> PNG, running only the aggregation a chart needs.

use crate::aggregate::{by_day, by_label, by_month};
use crate::chart::{Chart, ChartKind, RenderOptions};
use crate::domain::Domain;
use crate::entry::Entry;
use crate::error::Result;

/// Aggregate `entries` for `kind` and build the chart. Fails on a malformed
/// date for the day/month charts; label charts never look at dates.
pub fn build_chart(kind: ChartKind, entries: &[Entry], domain: &Domain) -> Result<Chart> {
    Ok(match kind {
        ChartKind::Pie => Chart::pie(&by_label(entries)),
        ChartKind::LabelHistogram => Chart::label_histogram(&by_label(entries), domain),
        ChartKind::DayHistogram => Chart::day_histogram(&by_day(entries)?, domain),
        ChartKind::MonthHistogram => Chart::month_histogram(&by_month(entries)?, domain),
    })
}

pub fn render_chart(
    kind: ChartKind,
    entries: &[Entry],
    domain: &Domain,
    opts: &RenderOptions,
) -> Result<Vec<u8>> {
    build_chart(kind, entries, domain)?.render_to_png_bytes(opts)
}

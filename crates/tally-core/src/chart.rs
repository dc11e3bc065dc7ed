// File: crates/tally-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::time::Instant;

use skia_safe as skia;

use crate::axis::Axis;
use crate::domain::Domain;
use crate::error::Result;
use crate::frame::Frame;
use crate::series::{KeyCounts, LabelCounts};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};

/// Fraction of a unit each bar occupies on the x axis.
const BAR_WIDTH: f64 = 0.8;
const TITLE_SIZE: f32 = 15.0;
const AXIS_TITLE_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 4.0;

/// The four charts served for a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Share of entries per label.
    Pie,
    /// Bar per label, in first-seen order.
    LabelHistogram,
    /// Bars over days 1..=31.
    DayHistogram,
    /// Bars over months 1..=12.
    MonthHistogram,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Pie,
        ChartKind::LabelHistogram,
        ChartKind::DayHistogram,
        ChartKind::MonthHistogram,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::LabelHistogram => "label-histogram",
            ChartKind::DayHistogram => "day-histogram",
            ChartKind::MonthHistogram => "month-histogram",
        }
    }

    /// HTTP path serving this chart.
    pub fn route(&self) -> &'static str {
        match self {
            ChartKind::Pie => "/entries_count_chart",
            ChartKind::LabelHistogram => "/entry_histogram",
            ChartKind::DayHistogram => "/entry_date",
            ChartKind::MonthHistogram => "/entry_month",
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw titles, tick labels and slice labels. Off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// What gets drawn inside the plot area.
#[derive(Clone, Debug, PartialEq)]
pub enum Marks {
    /// (label, count) per slice.
    Slices(Vec<(String, u64)>),
    /// (x position, height) per bar.
    Bars(Vec<(f64, u64)>),
}

pub struct Chart {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub marks: Marks,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn pie(counts: &LabelCounts) -> Self {
        Self {
            kind: ChartKind::Pie,
            title: None,
            marks: Marks::Slices(counts.iter().map(|(l, c)| (l.clone(), c)).collect()),
            x_axis: Axis::new("", -1.0, 1.0),
            y_axis: Axis::new("", -1.0, 1.0),
        }
    }

    pub fn label_histogram(counts: &LabelCounts, domain: &Domain) -> Self {
        let names: Vec<String> = counts.keys().cloned().collect();
        Self {
            kind: ChartKind::LabelHistogram,
            title: Some(domain.label_chart_title()),
            marks: Marks::Bars(counts.counts().enumerate().map(|(i, c)| (i as f64, c)).collect()),
            x_axis: Axis::categories(domain.label_title, names),
            y_axis: Axis::counts(domain.count_title(), counts.max_count()),
        }
    }

    pub fn day_histogram(counts: &KeyCounts, domain: &Domain) -> Self {
        Self::unit_histogram(
            ChartKind::DayHistogram,
            counts,
            domain.day_chart_title(),
            Axis::units("Day of the Month", 1, 31),
            domain,
        )
    }

    pub fn month_histogram(counts: &KeyCounts, domain: &Domain) -> Self {
        Self::unit_histogram(
            ChartKind::MonthHistogram,
            counts,
            domain.month_chart_title(),
            Axis::units("Month", 1, 12),
            domain,
        )
    }

    fn unit_histogram(kind: ChartKind, counts: &KeyCounts, title: String, x_axis: Axis, domain: &Domain) -> Self {
        Self {
            kind,
            title: Some(title),
            marks: Marks::Bars(counts.iter().map(|(k, c)| (*k as f64, c)).collect()),
            x_axis,
            y_axis: Axis::counts(domain.count_title(), counts.max_count()),
        }
    }

    /// Render into a fresh PNG buffer. Each call owns its surface for its whole
    /// lifetime; nothing is shared with concurrent renders.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let started = Instant::now();
        let mut frame = Frame::acquire(opts.width, opts.height, opts.draw_labels)?;
        {
            let (canvas, text) = frame.parts();
            let theme = &opts.theme;
            canvas.clear(theme.background);

            match &self.marks {
                Marks::Slices(slices) => {
                    draw_pie(canvas, text, opts.width, opts.height, slices, theme);
                }
                Marks::Bars(bars) => {
                    let plot = PlotRect::inset(opts.width, opts.height, &opts.insets);
                    draw_grid(canvas, &plot, &self.y_axis, theme);
                    draw_bars(canvas, &plot, &self.x_axis, &self.y_axis, bars, theme);
                    draw_axes(canvas, text, &plot, &self.x_axis, &self.y_axis, theme);
                }
            }

            if let (Some(title), Some(text)) = (&self.title, text) {
                let x = opts.width as f32 * 0.5;
                let y = (opts.insets.top as f32 * 0.5).max(TITLE_SIZE);
                text.draw(canvas, title, (x, y), Anchor::Center, TITLE_SIZE, theme.title);
            }
        }
        let bytes = frame.encode_png()?;
        tracing::debug!(
            kind = self.kind.name(),
            bytes = bytes.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "chart rendered"
        );
        Ok(bytes)
    }
}

// ---- helpers ----------------------------------------------------------------

struct Mapping {
    plot: PlotRect,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Mapping {
    fn new(plot: &PlotRect, x: &Axis, y: &Axis) -> Self {
        Self { plot: *plot, x_min: x.min, x_span: x.span(), y_min: y.min, y_span: y.span() }
    }
    fn sx(&self, x: f64) -> f32 {
        self.plot.left + ((x - self.x_min) / self.x_span) as f32 * self.plot.width()
    }
    fn sy(&self, y: f64) -> f32 {
        self.plot.bottom - ((y - self.y_min) / self.y_span) as f32 * self.plot.height()
    }
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, y_axis: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let span = y_axis.span();
    for (v, _) in y_axis.tick_marks() {
        let y = plot.bottom - ((v - y_axis.min) / span) as f32 * plot.height();
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_bars(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    bars: &[(f64, u64)],
    theme: &Theme,
) {
    if bars.is_empty() {
        return;
    }
    let map = Mapping::new(plot, x_axis, y_axis);
    let half = (BAR_WIDTH * 0.5 / map.x_span) as f32 * plot.width();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.bar);

    // Bars at the range edges (day 1, day 31) are cut in half by the plot border.
    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
        skia::ClipOp::Intersect,
        true,
    );
    for &(x, count) in bars {
        let cx = map.sx(x);
        let top = map.sy(count as f64);
        let bottom = map.sy(0.0);
        canvas.draw_rect(skia::Rect::from_ltrb(cx - half, top, cx + half, bottom), &fill);
    }
    canvas.restore();
}

fn draw_axes(
    canvas: &skia::Canvas,
    text: Option<&TextShaper>,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);

    canvas.draw_rect(
        skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
        &axis_paint,
    );

    let map = Mapping::new(plot, x_axis, y_axis);
    let x_ticks = x_axis.tick_marks();
    let y_ticks = y_axis.tick_marks();

    for (v, _) in &x_ticks {
        let x = map.sx(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &axis_paint);
    }
    for (v, _) in &y_ticks {
        let y = map.sy(*v);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &axis_paint);
    }

    // Labels
    let Some(text) = text else { return };
    for (v, label) in &x_ticks {
        let pos = (map.sx(*v), plot.bottom + TICK_LEN + TICK_SIZE);
        text.draw(canvas, label, pos, Anchor::Center, TICK_SIZE, theme.tick);
    }
    for (v, label) in &y_ticks {
        let pos = (plot.left - TICK_LEN - 4.0, map.sy(*v));
        text.draw(canvas, label, pos, Anchor::Right, TICK_SIZE, theme.tick);
    }

    let (cx, cy) = plot.center();
    if !x_axis.label.is_empty() {
        let pos = (cx, plot.bottom + TICK_LEN + TICK_SIZE + AXIS_TITLE_SIZE * 2.0);
        text.draw(canvas, &x_axis.label, pos, Anchor::Center, AXIS_TITLE_SIZE, theme.axis_label);
    }
    if !y_axis.label.is_empty() {
        let x = (plot.left - 56.0).max(AXIS_TITLE_SIZE);
        text.draw_vertical(canvas, &y_axis.label, (x, cy), AXIS_TITLE_SIZE, theme.axis_label);
    }
}

/// Circular pie centered on the surface. Slices start at 3 o'clock and run
/// counter-clockwise; each carries its share as a one-decimal percentage.
fn draw_pie(
    canvas: &skia::Canvas,
    text: Option<&TextShaper>,
    width: i32,
    height: i32,
    slices: &[(String, u64)],
    theme: &Theme,
) {
    let total: u64 = slices.iter().map(|(_, c)| *c).sum();
    if total == 0 {
        return;
    }
    let (cx, cy) = (width as f32 * 0.5, height as f32 * 0.5);
    let radius = width.min(height) as f32 * 0.5 * 0.72;
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(theme.slice_edge);

    // Angles in degrees, counter-clockwise from 3 o'clock.
    let mut start = 0.0f32;
    let mut placements = Vec::with_capacity(slices.len());
    for (i, (label, count)) in slices.iter().enumerate() {
        let frac = *count as f32 / total as f32;
        let sweep = frac * 360.0;
        fill.set_color(theme.slice_color(i));
        if slices.len() == 1 {
            canvas.draw_oval(oval, &fill);
        } else {
            // Skia measures angles clockwise, hence the sign flip.
            canvas.draw_arc(oval, -start, -sweep, true, &fill);
            canvas.draw_arc(oval, -start, -sweep, true, &edge);
        }
        placements.push((label.as_str(), *count, start + sweep * 0.5));
        start += sweep;
    }

    let Some(text) = text else { return };
    for (label, count, mid) in placements {
        let (sin, cos) = mid.to_radians().sin_cos();
        let at = |r: f32| (cx + r * radius * cos, cy - r * radius * sin);

        let pct = percent_label(count, total);
        text.draw(canvas, &pct, at(0.6), Anchor::Center, TICK_SIZE, theme.slice_text);

        let anchor = if cos >= 0.0 { Anchor::Left } else { Anchor::Right };
        text.draw(canvas, label, at(1.1), anchor, AXIS_TITLE_SIZE, theme.axis_label);
    }
}

/// Share of `total` as a one-decimal percentage, e.g. `"66.7%"`.
fn percent_label(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{by_day, by_label};
    use crate::entry::Entry;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("lunch", 10.0, "food", Some("2024-01-05".into())),
            Entry::new("dinner", 5.0, "food", Some("2024-01-20".into())),
            Entry::new("flat", 900.0, "rent", Some("2024-02-01".into())),
        ]
    }

    #[test]
    fn label_histogram_keeps_label_order() {
        let chart = Chart::label_histogram(&by_label(&entries()), &Domain::FINANCE);
        assert_eq!(chart.marks, Marks::Bars(vec![(0.0, 2), (1.0, 1)]));
        assert_eq!(chart.title.as_deref(), Some("Number of Entries in Each Category"));
        assert_eq!(chart.x_axis.label, "Category");
        assert_eq!(chart.y_axis.label, "Number of Entries");
    }

    #[test]
    fn day_histogram_has_fixed_range() {
        let chart = Chart::day_histogram(&by_day(&entries()).unwrap(), &Domain::FITNESS);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (1.0, 31.0));
        assert_eq!(chart.marks, Marks::Bars(vec![(1.0, 1), (5.0, 1), (20.0, 1)]));
        assert_eq!(chart.title.as_deref(), Some("Number of Exercises by Day of the Month"));
    }

    #[test]
    fn month_histogram_has_fixed_range() {
        let chart = Chart::month_histogram(&KeyCounts::new(), &Domain::FINANCE);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (1.0, 12.0));
        assert_eq!(chart.x_axis.tick_marks().len(), 12);
    }

    #[test]
    fn pie_has_one_slice_per_label() {
        let chart = Chart::pie(&by_label(&entries()));
        assert_eq!(
            chart.marks,
            Marks::Slices(vec![("food".to_string(), 2), ("rent".to_string(), 1)])
        );
        assert!(chart.title.is_none());
    }

    #[test]
    fn percent_label_has_one_decimal() {
        assert_eq!(percent_label(2, 3), "66.7%");
        assert_eq!(percent_label(1, 3), "33.3%");
        assert_eq!(percent_label(1, 1), "100.0%");
        assert_eq!(percent_label(1, 8), "12.5%");
    }

    #[test]
    fn routes_are_distinct() {
        let mut routes: Vec<&str> = ChartKind::ALL.iter().map(|k| k.route()).collect();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), 4);
    }
}

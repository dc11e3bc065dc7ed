// File: crates/tally-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub bar: skia::Color,
    pub slice_text: skia::Color,
    pub slice_edge: skia::Color,
    /// Pie slice colors, cycled in label order.
    pub palette: [skia::Color; 10],
}

// Category-10 palette (blue, orange, green, red, purple, brown, pink, gray, olive, cyan).
const TAB10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 232, 232, 236),
            axis_line: skia::Color::from_argb(255, 20, 20, 20),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            title: skia::Color::from_argb(255, 0, 0, 0),
            bar: TAB10[0],
            slice_text: skia::Color::from_argb(255, 20, 20, 30),
            slice_edge: skia::Color::from_argb(255, 255, 255, 255),
            palette: TAB10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            bar: skia::Color::from_argb(255, 96, 156, 255),
            slice_text: skia::Color::from_argb(255, 235, 235, 245),
            slice_edge: skia::Color::from_argb(255, 18, 18, 20),
            palette: TAB10,
        }
    }

    pub fn slice_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Look up a preset by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_ignores_case() {
        assert_eq!(by_name("DARK").map(|t| t.name), Some("dark"));
        assert_eq!(by_name("Light").map(|t| t.name), Some("light"));
        assert!(by_name("no-such-theme").is_none());
    }

    #[test]
    fn palette_cycles() {
        let t = Theme::light();
        assert_eq!(t.slice_color(0), t.slice_color(10));
        assert_ne!(t.slice_color(0), t.slice_color(1));
    }
}

// File: crates/tally-core/src/grid.rs
// Summary: Tick layout helpers (unit ticks, integer-only "nice" steps).

/// Smallest step from {1, 2, 5} x 10^k covering `span` in at most `max_intervals`.
pub fn integer_step(span: f64, max_intervals: usize) -> i64 {
    let intervals = max_intervals.max(1) as f64;
    if !span.is_finite() || span <= intervals {
        return 1;
    }
    let mut magnitude = 1i64;
    loop {
        for m in [1, 2, 5] {
            let step = m * magnitude;
            if span / step as f64 <= intervals {
                return step;
            }
        }
        magnitude *= 10;
    }
}

/// Integer ticks inside `[min, max]` using `integer_step`.
pub fn integer_ticks(min: f64, max: f64, max_intervals: usize) -> Vec<i64> {
    if !(max > min) { return vec![min.ceil() as i64]; }
    let step = integer_step(max - min, max_intervals);
    let first = (min / step as f64).ceil() as i64 * step;
    let mut out = Vec::new();
    let mut v = first;
    while v as f64 <= max + 1e-9 {
        out.push(v);
        v += step;
    }
    out
}

/// Every integer in `[lo, hi]`.
pub fn unit_ticks(lo: i64, hi: i64) -> Vec<i64> {
    (lo..=hi).collect()
}

// File: crates/tally-core/src/aggregate.rs
// Summary: Group-by-count over entries: by label, by day of month, by month.

use std::collections::{BTreeMap, HashMap};

use crate::entry::Entry;
use crate::error::{Result, TallyError};
use crate::series::{KeyCounts, LabelCounts};

/// The three series behind the four charts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aggregates {
    pub by_label: LabelCounts,
    pub by_day: KeyCounts,
    pub by_month: KeyCounts,
}

/// Compute every series, failing on the first malformed date.
pub fn aggregate_all(entries: &[Entry]) -> Result<Aggregates> {
    Ok(Aggregates {
        by_label: by_label(entries),
        by_day: by_day(entries)?,
        by_month: by_month(entries)?,
    })
}

/// Count entries per label. Labels keep first-seen order; grouping is exact
/// (no case folding, no trimming).
pub fn by_label(entries: &[Entry]) -> LabelCounts {
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut points: Vec<(String, u64)> = Vec::new();
    for e in entries {
        match slot.get(e.label.as_str()) {
            Some(&i) => points[i].1 += 1,
            None => {
                slot.insert(e.label.as_str(), points.len());
                points.push((e.label.clone(), 1));
            }
        }
    }
    LabelCounts::from_points(points)
}

/// Count entries per day of month (1..=31), ascending by day.
pub fn by_day(entries: &[Entry]) -> Result<KeyCounts> {
    count_by(entries, day_of)
}

/// Count entries per month (1..=12), ascending by month.
pub fn by_month(entries: &[Entry]) -> Result<KeyCounts> {
    count_by(entries, month_of)
}

fn count_by(entries: &[Entry], key: fn(&str) -> Result<u32>) -> Result<KeyCounts> {
    let mut buckets: BTreeMap<u32, u64> = BTreeMap::new();
    for e in entries {
        let k = key(e.date_str())?;
        *buckets.entry(k).or_insert(0) += 1;
    }
    Ok(KeyCounts::from_points(buckets.into_iter().collect()))
}

/// Day-of-month token (third `-`-separated field) of a `YYYY-MM-DD` date.
pub fn day_of(date: &str) -> Result<u32> {
    DatePart::Day.parse(date)
}

/// Month token (second `-`-separated field) of a `YYYY-MM-DD` date.
pub fn month_of(date: &str) -> Result<u32> {
    DatePart::Month.parse(date)
}

#[derive(Clone, Copy)]
enum DatePart {
    Month,
    Day,
}

impl DatePart {
    fn parse(self, date: &str) -> Result<u32> {
        if date.is_empty() {
            return Err(TallyError::malformed(date, "missing date"));
        }
        let (index, max, not_number, out_of_range) = match self {
            DatePart::Month => (1, 12, "month is not a number", "month out of range 1-12"),
            DatePart::Day => (2, 31, "day is not a number", "day out of range 1-31"),
        };
        // Fewer than two separators means the token is simply absent.
        let raw = date
            .split('-')
            .nth(index)
            .filter(|_| date.matches('-').count() >= 2)
            .ok_or_else(|| TallyError::malformed(date, "expected YYYY-MM-DD"))?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TallyError::malformed(date, not_number));
        }
        match raw.parse::<u32>() {
            Ok(v) if (1..=max).contains(&v) => Ok(v),
            _ => Err(TallyError::malformed(date, out_of_range)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_with_leading_zeros() {
        assert_eq!(day_of("2024-02-01").unwrap(), 1);
        assert_eq!(month_of("2024-02-01").unwrap(), 2);
        assert_eq!(day_of("1999-12-31").unwrap(), 31);
    }

    #[test]
    fn extra_tokens_are_ignored() {
        assert_eq!(day_of("2024-01-05-x").unwrap(), 5);
    }

    #[test]
    fn bad_tokens_are_rejected() {
        for bad in ["", "2024", "2024-13", "2024-01-xx", "2024-01-", "2024-00-10", "2024-01-32", "2024-1a-03"] {
            let err = if bad == "2024-00-10" || bad == "2024-1a-03" { month_of(bad) } else { day_of(bad) };
            assert!(
                matches!(err, Err(TallyError::MalformedDate { .. })),
                "{bad:?} should be malformed"
            );
        }
    }
}

// File: crates/tally-core/src/series.rs
// Summary: Count series model: ordered (key, count) pairs produced by aggregation.
// Notes:
// - Order is part of the contract. Label series keep first-seen order,
//   day/month series are sorted ascending by key.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountSeries<K> {
    points: Vec<(K, u64)>,
}

/// Counts per label, in first-seen order.
pub type LabelCounts = CountSeries<String>;
/// Counts per day-of-month or month number, ascending by key.
pub type KeyCounts = CountSeries<u32>;

impl<K> CountSeries<K> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub(crate) fn from_points(points: Vec<(K, u64)>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Sum of all counts; equals the number of aggregated entries.
    pub fn total(&self) -> u64 {
        self.points.iter().map(|(_, c)| *c).sum()
    }

    /// Largest single count, 0 when empty.
    pub fn max_count(&self) -> u64 {
        self.points.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.points.iter().map(|(k, c)| (k, *c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.points.iter().map(|(k, _)| k)
    }

    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|(_, c)| *c)
    }

    pub fn as_slice(&self) -> &[(K, u64)] { &self.points }
}

impl<K> CountSeries<K> {
    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.points
            .iter()
            .find(|(k, _)| <K as std::borrow::Borrow<Q>>::borrow(k) == key)
            .map(|(_, c)| *c)
    }
}

impl<K> Default for CountSeries<K> {
    fn default() -> Self { Self::new() }
}

impl<K> IntoIterator for CountSeries<K> {
    type Item = (K, u64);
    type IntoIter = std::vec::IntoIter<(K, u64)>;

    fn into_iter(self) -> Self::IntoIter { self.points.into_iter() }
}

// File: crates/tally-core/src/entry.rs
// Summary: Entry record and the creation policy applied to submitted forms.

use uuid::Uuid;

/// Label stored when a submission leaves the label blank.
pub const DEFAULT_LABEL: &str = "default";

/// One recorded data point: a transaction or an exercise set.
/// Contract: `value` is finite and `label` is never empty for entries built via `new`.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    pub value: f64,
    pub label: String,
    /// Free text, expected as `YYYY-MM-DD` but never validated on the way in.
    pub date: Option<String>,
}

impl Entry {
    /// Build a fresh entry with a new v4 id, applying the label default.
    pub fn new(
        name: impl Into<String>,
        value: f64,
        label: impl Into<String>,
        date: Option<String>,
    ) -> Self {
        let mut label = label.into();
        if label.is_empty() {
            label = DEFAULT_LABEL.to_string();
        }
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value,
            label,
            date: date.filter(|d| !d.is_empty()),
        }
    }

    pub fn date_str(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}

/// Raw text fields of an add submission, keyed independently of the domain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub name: String,
    pub value: String,
    pub label: String,
    pub date: String,
}

impl EntryForm {
    /// Apply the soft-validation policy.
    ///
    /// Returns `None` when the submission must be dropped: blank name, blank
    /// value, or a value that is not a finite decimal. A dropped submission is
    /// not an error for the caller.
    pub fn into_entry(self) -> Option<Entry> {
        let name = self.name.trim();
        let raw_value = self.value.trim();
        if name.is_empty() || raw_value.is_empty() {
            tracing::debug!(name, value = raw_value, "submission skipped: blank required field");
            return None;
        }
        let value = match raw_value.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                tracing::warn!(value = raw_value, "submission skipped: value is not a finite decimal");
                return None;
            }
        };
        let date = Some(self.date.trim().to_string());
        Some(Entry::new(name, value, self.label, date))
    }
}

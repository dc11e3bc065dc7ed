// File: crates/tally-core/src/domain.rs
// Summary: Domain profiles (finance, fitness) naming fields, tables and chart titles.

use std::fmt;
use std::str::FromStr;

/// Field names and display strings for one tracker variant.
///
/// Both variants share the aggregation and rendering code; only the
/// strings below differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    /// Short identifier used in configuration (`finance`, `fitness`).
    pub key: &'static str,
    /// Backing table name.
    pub table: &'static str,
    /// Form/column name of the free-text entry name.
    pub name_field: &'static str,
    /// Form/column name of the numeric value.
    pub value_field: &'static str,
    /// Form/column/query name of the categorical label.
    pub label_field: &'static str,
    pub name_title: &'static str,
    pub value_title: &'static str,
    pub label_title: &'static str,
    /// Plural noun for the things being counted ("Entries", "Exercises").
    pub noun: &'static str,
    /// Page heading.
    pub app_title: &'static str,
}

impl Domain {
    pub const FINANCE: Domain = Domain {
        key: "finance",
        table: "finance_entries",
        name_field: "entry_type",
        value_field: "amount",
        label_field: "category",
        name_title: "Entry Type",
        value_title: "Amount",
        label_title: "Category",
        noun: "Entries",
        app_title: "Finance Tracker",
    };

    pub const FITNESS: Domain = Domain {
        key: "fitness",
        table: "fitness_entries",
        name_field: "exercise",
        value_field: "repetitions",
        label_field: "muscle",
        name_title: "Exercise",
        value_title: "Repetitions",
        label_title: "Muscle",
        noun: "Exercises",
        app_title: "Fitness Tracker",
    };

    pub fn all() -> [Domain; 2] {
        [Self::FINANCE, Self::FITNESS]
    }

    pub fn count_title(&self) -> String {
        format!("Number of {}", self.noun)
    }

    pub fn label_chart_title(&self) -> String {
        format!("Number of {} in Each {}", self.noun, self.label_title)
    }

    pub fn day_chart_title(&self) -> String {
        format!("Number of {} by Day of the Month", self.noun)
    }

    pub fn month_chart_title(&self) -> String {
        format!("Number of {} by Month", self.noun)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::FINANCE
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domain {0:?} (expected `finance` or `fitness`)")]
pub struct UnknownDomain(pub String);

impl FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Domain::all()
            .into_iter()
            .find(|d| d.key.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}

// File: crates/tally-core/src/error.rs
// Summary: Error type shared by aggregation and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    /// A stored date does not follow the `YYYY-MM-DD` token layout.
    #[error("malformed date {date:?}: {reason}")]
    MalformedDate { date: String, reason: &'static str },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,
}

impl TallyError {
    pub(crate) fn malformed(date: &str, reason: &'static str) -> Self {
        Self::MalformedDate { date: date.to_string(), reason }
    }
}

pub type Result<T, E = TallyError> = std::result::Result<T, E>;

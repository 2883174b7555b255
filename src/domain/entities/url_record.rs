//! URL record entity representing a short code mapping.

/// A short code bound to its destination URL, with hit telemetry.
///
/// Timestamps are Unix seconds. `hits` and `last_hit` are the only fields
/// that change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub code: String,
    pub url: String,
    pub created_at: i64,
    pub created_by: String,
    pub hits: i64,
    pub last_hit: Option<i64>,
}

impl UrlRecord {
    /// Returns true if the code has never been looked up.
    pub fn is_unvisited(&self) -> bool {
        self.last_hit.is_none()
    }
}

/// Input data for binding a new code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub code: String,
    pub url: String,
    pub created_by: String,
}

impl NewUrl {
    pub fn new(
        code: impl Into<String>,
        url: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
            created_by: created_by.into(),
        }
    }
}

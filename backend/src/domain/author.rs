//! Author aggregate.

/// Stored author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub full_name: String,
}

/// Writable author fields used for creation and full-record updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDraft {
    pub full_name: String,
}

impl AuthorDraft {
    /// Build a draft, trimming surrounding whitespace.
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name: full_name.trim().to_owned(),
        }
    }
}

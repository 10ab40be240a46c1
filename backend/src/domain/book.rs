//! Book aggregate.

/// Stored book together with its author's name when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Publication year as entered; not constrained to digits.
    pub publication_year: String,
    pub author_id: i64,
    pub author_name: Option<String>,
}

/// Writable book fields used for creation and full-record updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub publication_year: String,
    pub author_id: i64,
}

impl BookDraft {
    /// Build a draft, trimming the text fields.
    pub fn new(title: &str, publication_year: &str, author_id: i64) -> Self {
        Self {
            title: title.trim().to_owned(),
            publication_year: publication_year.trim().to_owned(),
            author_id,
        }
    }
}

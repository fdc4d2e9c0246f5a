//! Author and book records

/// A book listed on an author page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    /// Absolute URL of the book page
    pub url: String,
}

/// An author with the books shown on their profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Source identifier, as requested by the caller
    pub id: String,
    pub name: String,
    pub short_description: String,
    /// Canonical profile URL
    pub url: String,
    /// Books in on-page order (most recent first)
    pub books: Vec<Book>,
}

//! lubimyczytac.pl author pages
//!
//! Fetches an author's profile page and extracts the author record and the
//! list of books shown on it.

mod client;
mod error;
mod page;
mod types;

pub use client::{default_base_url, Client, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use page::AuthorPage;
pub use types::{Author, Book};

//! Client error types

use thiserror::Error;

/// Failures while fetching or reading an author page
#[derive(Debug, Error)]
pub enum ClientError {
    /// The source answered 404
    #[error("author not found")]
    AuthorNotFound,

    /// The source answered something other than 200 or 404
    #[error("unexpected http status {0} was returned by lubimyczytac.pl")]
    UnexpectedStatus(u16),

    /// The request could not be built, sent or read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body could not be turned into a usable document
    #[error("malformed author page: {0}")]
    MalformedPage(String),
}

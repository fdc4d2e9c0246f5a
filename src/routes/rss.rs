//! Author RSS feed routes

use std::time::Duration;

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::rss::{serialize_rss, RssDocument, RssResponse};
use crate::state::AppState;

/// Create the RSS router
pub fn router() -> Router<AppState> {
    Router::new().route("/author/:author_id", get(author_feed))
}

/// RSS feed of the books listed on an author's page
///
/// The whole pipeline runs under the configured request timeout; when it
/// elapses the in-flight fetch is dropped.
async fn author_feed(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<RssResponse> {
    tracing::info!(author_id = %author_id, "Building author feed");

    let secs = state.config().server.request_timeout_secs;
    let (xml, books) = tokio::time::timeout(
        Duration::from_secs(secs),
        build_feed(&state, &author_id),
    )
    .await
    .map_err(|_| AppError::Timeout(secs))??;

    tracing::info!(author_id = %author_id, books, "Author feed ready");
    Ok(RssResponse(xml))
}

/// Fetch, extract and serialize; returns the XML and the number of items.
async fn build_feed(state: &AppState, author_id: &str) -> Result<(String, usize)> {
    let author = state.client().get_author(author_id).await?;
    let xml = serialize_rss(&RssDocument::from_author(&author))?;
    Ok((xml, author.books.len()))
}

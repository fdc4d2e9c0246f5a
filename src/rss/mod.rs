//! RSS 2.0 feed generation
//!
//! Maps an author record into an RSS document and renders it as XML.

mod feed;
mod xml;

pub use feed::{mime, RssChannel, RssDocument, RssItem, RssResponse, LANGUAGE, VERSION};
pub use xml::serialize_rss;

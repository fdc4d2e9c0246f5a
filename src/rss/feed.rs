//! RSS document model

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::lubimyczytac::{Author, Book};

/// RSS version written on the root element
pub const VERSION: &str = "2.0";

/// Channel language; lubimyczytac.pl is published in Polish only
pub const LANGUAGE: &str = "pl";

/// MIME types for RSS responses
pub mod mime {
    pub const RSS_XML: &str = "text/xml; charset=utf-8";
}

/// Root `<rss>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RssDocument {
    pub version: &'static str,
    pub channel: RssChannel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RssChannel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub items: Vec<RssItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    /// Book URL; the source has no other stable identifier
    pub guid: String,
    pub description: String,
}

impl RssDocument {
    /// Build the feed for an author, one item per book in page order.
    pub fn from_author(author: &Author) -> Self {
        Self {
            version: VERSION,
            channel: RssChannel::from_author(author),
        }
    }
}

impl RssChannel {
    pub fn from_author(author: &Author) -> Self {
        Self {
            title: author.name.clone(),
            link: author.url.clone(),
            description: author.short_description.clone(),
            language: LANGUAGE.to_string(),
            items: author.books.iter().map(RssItem::from_book).collect(),
        }
    }
}

impl RssItem {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            link: book.url.clone(),
            guid: book.url.clone(),
            description: String::new(),
        }
    }
}

/// Response with RSS XML content type
pub struct RssResponse(pub String);

impl IntoResponse for RssResponse {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, mime::RSS_XML)], self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(books: Vec<Book>) -> Author {
        Author {
            id: "82094".to_string(),
            name: "Remigiusz Mróz".to_string(),
            short_description: "Polski pisarz".to_string(),
            url: "https://lubimyczytac.pl/autor/82094/remigiusz-mroz".to_string(),
            books,
        }
    }

    #[test]
    fn test_channel_from_author() {
        let doc = RssDocument::from_author(&author(vec![]));

        assert_eq!(doc.version, "2.0");
        assert_eq!(doc.channel.title, "Remigiusz Mróz");
        assert_eq!(
            doc.channel.link,
            "https://lubimyczytac.pl/autor/82094/remigiusz-mroz"
        );
        assert_eq!(doc.channel.description, "Polski pisarz");
        assert_eq!(doc.channel.language, "pl");
        assert!(doc.channel.items.is_empty());
    }

    #[test]
    fn test_items_keep_book_order() {
        let doc = RssDocument::from_author(&author(vec![
            Book {
                title: "Skazanie".to_string(),
                url: "https://lubimyczytac.pl/ksiazka/5009453/skazanie".to_string(),
            },
            Book {
                title: "Behawiorysta".to_string(),
                url: "https://lubimyczytac.pl/ksiazka/5006528/behawiorysta".to_string(),
            },
        ]));

        let items = &doc.channel.items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Skazanie");
        assert_eq!(items[0].link, items[0].guid);
        assert_eq!(items[0].description, "");
        assert_eq!(
            items[1].guid,
            "https://lubimyczytac.pl/ksiazka/5006528/behawiorysta"
        );
    }
}

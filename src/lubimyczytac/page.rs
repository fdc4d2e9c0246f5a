//! Author page extraction
//!
//! The page is parsed once into an immutable document tree; every field is
//! then read with a fixed selector. Missing elements give empty values, only a
//! document that cannot be read at all is an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::error::ClientError;
use super::types::{Author, Book};

static BASE: LazyLock<Selector> = LazyLock::new(|| selector("head base[href]"));
static NAME: LazyLock<Selector> =
    LazyLock::new(|| selector("#author-info .title-container"));
static OG_URL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[property="og:url"]"#));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static BOOK_CARD: LazyLock<Selector> =
    LazyLock::new(|| selector("#authorBooks .authorAllBooks__single"));
static BOOK_TITLE: LazyLock<Selector> =
    LazyLock::new(|| selector(".authorAllBooks__singleTextTitle"));

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// A parsed author profile page
pub struct AuthorPage {
    document: Html,
    /// Scheme, host and port that relative book links resolve against
    origin: Url,
}

impl AuthorPage {
    /// Parse a fetched page.
    ///
    /// `default_origin` is used when the page declares no `<base href>`.
    pub fn parse(body: &[u8], default_origin: &Url) -> Result<Self, ClientError> {
        let html = std::str::from_utf8(body)
            .map_err(|e| ClientError::MalformedPage(format!("body is not valid UTF-8: {}", e)))?;
        let document = Html::parse_document(html);

        let base = match document
            .select(&BASE)
            .next()
            .and_then(|el| el.value().attr("href"))
        {
            Some(href) => default_origin.join(href.trim()).map_err(|e| {
                ClientError::MalformedPage(format!("invalid <base href=\"{}\">: {}", href, e))
            })?,
            None => default_origin.clone(),
        };
        let origin = origin_of(&base)?;

        Ok(Self { document, origin })
    }

    pub fn name(&self) -> String {
        self.document
            .select(&NAME)
            .next()
            .map(|el| trimmed_text(&el))
            .unwrap_or_default()
    }

    /// Canonical profile URL from `og:url`
    pub fn url(&self) -> String {
        self.meta_content(&OG_URL)
    }

    pub fn short_description(&self) -> String {
        self.meta_content(&DESCRIPTION)
    }

    /// Book cards in document order
    pub fn books(&self) -> Vec<Book> {
        self.document
            .select(&BOOK_CARD)
            .map(|card| {
                let link = card.select(&BOOK_TITLE).next();
                let title = link.map(|el| trimmed_text(&el)).unwrap_or_default();
                let href = link
                    .and_then(|el| el.value().attr("href"))
                    .unwrap_or_default()
                    .trim();

                Book {
                    title,
                    url: self.resolve(href),
                }
            })
            .collect()
    }

    pub fn into_author(self, id: impl Into<String>) -> Author {
        Author {
            id: id.into(),
            name: self.name(),
            short_description: self.short_description(),
            url: self.url(),
            books: self.books(),
        }
    }

    fn meta_content(&self, selector: &Selector) -> String {
        self.document
            .select(selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|content| content.trim().to_string())
            .unwrap_or_default()
    }

    /// Book links always point at the page origin; only the path and query
    /// of the href are kept.
    fn resolve(&self, href: &str) -> String {
        let mut url = self.origin.clone();
        match self.origin.join(href) {
            Ok(joined) => {
                url.set_path(joined.path());
                url.set_query(joined.query());
            }
            // An href the URL parser rejects still belongs under the page origin
            Err(_) => url.set_path(href),
        }
        url.to_string()
    }
}

fn trimmed_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Reduce a URL to scheme, host and port.
fn origin_of(url: &Url) -> Result<Url, ClientError> {
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ClientError::MalformedPage(format!(
            "page base {} is not an http(s) origin",
            url
        )));
    }

    let mut origin = url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    // Only fails for URLs without a host, ruled out above
    let _ = origin.set_username("");
    let _ = origin.set_password(None);
    Ok(origin)
}

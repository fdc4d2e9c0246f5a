//! RSS XML serialization

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::io::Cursor;

use super::feed::{RssChannel, RssDocument, RssItem};
use crate::error::Result;

/// Serialize an RSS document to XML
pub fn serialize_rss(doc: &RssDocument) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", doc.version));
    writer.write_event(Event::Start(rss))?;

    write_channel(&mut writer, &doc.channel)?;

    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

fn write_simple_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_channel<W: std::io::Write>(writer: &mut Writer<W>, channel: &RssChannel) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_simple_element(writer, "title", &channel.title)?;
    write_simple_element(writer, "link", &channel.link)?;
    write_simple_element(writer, "description", &channel.description)?;
    write_simple_element(writer, "language", &channel.language)?;

    for item in &channel.items {
        write_item(writer, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    Ok(())
}

fn write_item<W: std::io::Write>(writer: &mut Writer<W>, item: &RssItem) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_simple_element(writer, "title", &item.title)?;
    write_simple_element(writer, "link", &item.link)?;
    write_simple_element(writer, "guid", &item.guid)?;
    write_simple_element(writer, "description", &item.description)?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lubimyczytac::{Author, Book};

    fn author(books: Vec<Book>) -> Author {
        Author {
            id: "19013".to_string(),
            name: "John Flanagan".to_string(),
            short_description: "Australian author".to_string(),
            url: "https://lubimyczytac.pl/autor/19013/john-flanagan".to_string(),
            books,
        }
    }

    #[test]
    fn test_empty_channel() {
        let xml = serialize_rss(&RssDocument::from_author(&author(vec![]))).unwrap();

        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rss version=\"2.0\"><channel>\
             <title>John Flanagan</title>\
             <link>https://lubimyczytac.pl/autor/19013/john-flanagan</link>\
             <description>Australian author</description>\
             <language>pl</language>\
             </channel></rss>"
        );
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_items() {
        let xml = serialize_rss(&RssDocument::from_author(&author(vec![Book {
            title: "Morska pogoń".to_string(),
            url: "https://lubimyczytac.pl/ksiazka/5016250/morska-pogon".to_string(),
        }])))
        .unwrap();

        assert!(xml.contains(
            "<item><title>Morska pogoń</title>\
             <link>https://lubimyczytac.pl/ksiazka/5016250/morska-pogon</link>\
             <guid>https://lubimyczytac.pl/ksiazka/5016250/morska-pogon</guid>\
             <description></description></item>"
        ));
        assert_eq!(xml.matches("<item>").count(), 1);
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = serialize_rss(&RssDocument::from_author(&author(vec![Book {
            title: "Tom & Jerry <1>".to_string(),
            url: "https://lubimyczytac.pl/ksiazka/1/x?a=1&b=2".to_string(),
        }])))
        .unwrap();

        assert!(xml.contains("<title>Tom &amp; Jerry &lt;1&gt;</title>"));
        assert!(xml.contains("<guid>https://lubimyczytac.pl/ksiazka/1/x?a=1&amp;b=2</guid>"));
    }
}

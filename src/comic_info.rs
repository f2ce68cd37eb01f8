//! `ComicInfo.xml` rendering.
//!
//! The layout is consumed by Komga/Tachiyomi-family readers and is kept
//! byte-for-byte stable:
//!
//! ```text
//! <?xml version='1.0' encoding='UTF-8'?>
//! <ComicInfo xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
//!   <Series/> <Summary/> <Writer/> <Penciller/> <Genre/>
//!   <ty:PublishingStatusTachiyomi xmlns:ty="http://www.w3.org/2001/XMLSchema">Completed</ty:PublishingStatusTachiyomi>
//! </ComicInfo>
//! ```
//!
//! (shown indented; the file itself has no whitespace between elements and
//! no trailing newline).

use crate::metadata::ComicMetadata;
use std::fs;
use std::path::Path;

pub const XML_SCHEMA: &str = "http://www.w3.org/2001/XMLSchema";
pub const XML_SCHEMA_INSTANCE: &str = "http://www.w3.org/2001/XMLSchema-instance";

const DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>\n";
const STATUS_ELEMENT: &str = "ty:PublishingStatusTachiyomi";

/// Escape character data for use as element text.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_element(xml: &mut String, name: &str, text: &str) {
    xml.push_str(&format!("<{name}>{}</{name}>", escape_text(text)));
}

/// Render metadata as a complete `ComicInfo.xml` document.
pub fn render_comic_info(metadata: &ComicMetadata) -> String {
    let mut xml = String::from(DECLARATION);
    xml.push_str(&format!(
        "<ComicInfo xmlns:xsd=\"{XML_SCHEMA}\" xmlns:xsi=\"{XML_SCHEMA_INSTANCE}\">"
    ));

    for (name, value) in [
        ("Series", &metadata.series),
        ("Summary", &metadata.summary),
        ("Writer", &metadata.writer),
        ("Penciller", &metadata.penciller),
        ("Genre", &metadata.genre),
    ] {
        push_element(&mut xml, name, value);
    }

    xml.push_str(&format!(
        "<{STATUS_ELEMENT} xmlns:ty=\"{XML_SCHEMA}\">{}</{STATUS_ELEMENT}>",
        escape_text(metadata.status.label())
    ));
    xml.push_str("</ComicInfo>");
    xml
}

/// Render and write metadata to `destination` as UTF-8.
pub fn write_comic_info(metadata: &ComicMetadata, destination: &Path) -> std::io::Result<()> {
    fs::write(destination, render_comic_info(metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::PublishingStatus;
    use tempfile::TempDir;

    #[test]
    fn default_metadata_document() {
        let xml = render_comic_info(&ComicMetadata::default());
        assert_eq!(
            xml,
            "<?xml version='1.0' encoding='UTF-8'?>\n\
             <ComicInfo xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
             <Series>Unknown</Series>\
             <Summary>Unknown</Summary>\
             <Writer>Unknown</Writer>\
             <Penciller>Unknown</Penciller>\
             <Genre>Unknown</Genre>\
             <ty:PublishingStatusTachiyomi xmlns:ty=\"http://www.w3.org/2001/XMLSchema\">\
             Completed</ty:PublishingStatusTachiyomi>\
             </ComicInfo>"
        );
    }

    #[test]
    fn fields_in_fixed_order() {
        let metadata = ComicMetadata {
            series: "S".into(),
            writer: "W".into(),
            penciller: "W".into(),
            genre: "G1, G2".into(),
            ..ComicMetadata::default()
        };
        let xml = render_comic_info(&metadata);
        let order: Vec<usize> = ["<Series>", "<Summary>", "<Writer>", "<Penciller>", "<Genre>", "<ty:"]
            .iter()
            .map(|tag| xml.find(tag).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(xml.contains("<Genre>G1, G2</Genre>"));
    }

    #[test]
    fn status_label_rendered() {
        let metadata = ComicMetadata {
            status: PublishingStatus::OnHiatus,
            ..ComicMetadata::default()
        };
        assert!(render_comic_info(&metadata).contains(">On hiatus</ty:PublishingStatusTachiyomi>"));
    }

    #[test]
    fn text_is_escaped() {
        let metadata = ComicMetadata {
            series: "Tom & Jerry <Special>".into(),
            ..ComicMetadata::default()
        };
        let xml = render_comic_info(&metadata);
        assert!(xml.contains("<Series>Tom &amp; Jerry &lt;Special&gt;</Series>"));
    }

    #[test]
    fn quotes_and_non_ascii_pass_through() {
        assert_eq!(escape_text("\"它\" 'x'"), "\"它\" 'x'");
    }

    #[test]
    fn written_file_is_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ComicInfo.xml");
        let metadata = ComicMetadata {
            series: "漫画".into(),
            ..ComicMetadata::default()
        };

        write_comic_info(&metadata, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml version='1.0' encoding='UTF-8'?>"));
        assert!(content.contains("<Series>漫画</Series>"));
    }
}

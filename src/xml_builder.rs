/*!
 * XML document generation.
 *
 * Produces the transcript document:
 *
 * ```xml
 * <?xml version="1.0" encoding="UTF-8"?>
 * <transcript video_title="" video_published="" video_duration="" video_url="">
 *   <chapters>
 *     <chapter title="Introduction to Cows" start_time="0:02">
 *       0:02
 *       Welcome to this talk about erm.. er
 *     </chapter>
 *   </chapters>
 * </transcript>
 * ```
 *
 * Characters XML 1.0 cannot carry are replaced with U+FFFD. Attribute values
 * are fully escaped and keep tab, LF and CR as character references so they
 * survive attribute-value normalization. Chapter bodies escape `&`, `<`, `>`
 * and CR.
 */

use std::borrow::Cow;

use log::debug;
use quick_xml::Writer;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::errors::DocumentError;
use crate::metadata::VideoMetadata;
use crate::transcript::{Chapter, TranscriptDocument};

const INDENT_SIZE: usize = 2;

// Chapter bodies sit three levels deep, their closing tag two levels deep
const CONTENT_INDENT: &str = "      ";
const CLOSING_INDENT: &str = "    ";

/// Build the XML document for a list of chapters.
///
/// Output is deterministic: the same chapters and metadata always produce
/// byte-identical text. Writing goes to an in-memory buffer, so errors are
/// not expected for any chapter list.
pub fn build_document(chapters: &[Chapter], metadata: &VideoMetadata) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("transcript");
    push_attribute(&mut root, "video_title", &metadata.title);
    push_attribute(&mut root, "video_published", &metadata.display_published());
    push_attribute(&mut root, "video_duration", &metadata.display_duration());
    push_attribute(&mut root, "video_url", &metadata.url);
    emit(&mut writer, Event::Start(root))?;

    if chapters.is_empty() {
        emit(&mut writer, Event::Empty(BytesStart::new("chapters")))?;
    } else {
        emit(&mut writer, Event::Start(BytesStart::new("chapters")))?;
        for chapter in chapters {
            write_chapter(&mut writer, chapter)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("chapters")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("transcript")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');

    debug!("Built XML document with {} chapters ({} bytes)", chapters.len(), xml.len());
    Ok(xml)
}

/// Build the XML document for a complete transcript document
pub fn transcript_to_xml(document: &TranscriptDocument) -> Result<String, DocumentError> {
    build_document(&document.chapters, &document.metadata)
}

fn write_chapter(writer: &mut Writer<Vec<u8>>, chapter: &Chapter) -> Result<(), DocumentError> {
    let mut element = BytesStart::new("chapter");
    push_attribute(&mut element, "title", &chapter.title);
    push_attribute(&mut element, "start_time", &chapter.start_time.to_string());

    if chapter.content_lines.is_empty() {
        return emit(writer, Event::Empty(element));
    }

    let body = chapter_body(chapter);
    emit(writer, Event::Start(element))?;
    emit(writer, Event::Text(BytesText::from_escaped(body)))?;
    emit(writer, Event::End(BytesEnd::new("chapter")))
}

/// One content line per row, indented under the chapter element
fn chapter_body(chapter: &Chapter) -> String {
    let rows: Vec<String> = chapter
        .content_lines
        .iter()
        .map(|line| format!("{}{}", CONTENT_INDENT, escape_text(&line.to_string())))
        .collect();
    format!("\n{}\n{}", rows.join("\n"), CLOSING_INDENT)
}

/// Whether XML 1.0 allows the character anywhere in a document
fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Replace characters XML cannot represent with U+FFFD
pub fn replace_invalid_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|ch| if is_xml_char(ch) { ch } else { char::REPLACEMENT_CHARACTER })
            .collect(),
    )
}

fn escape_text(text: &str) -> String {
    partial_escape(&replace_invalid_chars(text)).replace('\r', "&#13;")
}

fn escape_attribute(value: &str) -> String {
    escape(&replace_invalid_chars(value))
        .replace('\t', "&#9;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
}

fn push_attribute(element: &mut BytesStart<'_>, key: &str, value: &str) {
    let escaped = escape_attribute(value);
    element.push_attribute(Attribute::from((key.as_bytes(), escaped.as_bytes())));
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Write(e.to_string()))
}

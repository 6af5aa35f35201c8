/*!
 * End-to-end tests: raw transcript text to XML document
 */

use youtube_to_xml::transcript::parse_transcript_with;
use youtube_to_xml::transcript::validator::ParserOptions;
use youtube_to_xml::{build_document, validate_and_segment, TranscriptError, VideoMetadata};

use crate::common::{chapter_nodes, chapter_rows, parse_xml, COWS_TRANSCRIPT};

fn convert(raw: &str) -> Result<String, TranscriptError> {
    let chapters = validate_and_segment(raw)?;
    Ok(build_document(&chapters, &VideoMetadata::default()).expect("document builds"))
}

#[test]
fn test_convert_withCowsTranscript_shouldProduceTwoChapterDocument() {
    let xml = convert(COWS_TRANSCRIPT).unwrap();
    let doc = parse_xml(&xml);

    let nodes = chapter_nodes(&doc);
    assert_eq!(nodes.len(), 2);

    assert_eq!(nodes[0].attribute("title"), Some("Introduction to Cows"));
    assert_eq!(nodes[0].attribute("start_time"), Some("0:02"));
    assert_eq!(
        chapter_rows(&nodes[0]),
        vec!["0:02", "Welcome to this talk about erm.. er", "2:30", "Let's start with the fundamentals"]
    );

    assert_eq!(nodes[1].attribute("title"), Some("Washing the cow"));
    assert_eq!(nodes[1].attribute("start_time"), Some("15:45"));
    assert_eq!(chapter_rows(&nodes[1]), vec!["15:45", "First, we'll start with the patches"]);
}

#[test]
fn test_convert_withWindowsLineEndingsAndPadding_shouldMatchCleanInput() {
    let messy = format!("\r\n\r\n{}\r\n\r\n", COWS_TRANSCRIPT.replace('\n', "  \r\n  "));
    assert_eq!(convert(&messy).unwrap(), convert(COWS_TRANSCRIPT).unwrap());
}

#[test]
fn test_convert_withBadInputs_shouldNeverProducePartialOutput() {
    assert_eq!(convert(""), Err(TranscriptError::EmptyInput));
    assert!(matches!(convert("0:05\nHello"), Err(TranscriptError::InvalidFormat(_))));
    assert_eq!(convert("Title\nNo timestamps here"), Err(TranscriptError::MissingTimestamp));
}

#[test]
fn test_convert_withEscapingInLongTranscript_shouldRoundTripEveryLine() {
    let raw = "Tom & Jerry <intro>\n0:00\nCat \"chases\" mouse\n0:30\n<b>bold</b> & more\n\"Part 2\" & friends\n1:00\nThe end >_<";
    let chapters = validate_and_segment(raw).unwrap();
    let xml = build_document(&chapters, &VideoMetadata::default()).unwrap();
    let doc = parse_xml(&xml);

    let nodes = chapter_nodes(&doc);
    assert_eq!(nodes.len(), chapters.len());

    for (node, chapter) in nodes.iter().zip(&chapters) {
        assert_eq!(node.attribute("title"), Some(chapter.title.as_str()));
        let expected: Vec<String> = chapter.content_lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(chapter_rows(node), expected);
    }
    assert_eq!(nodes[1].attribute("title"), Some("\"Part 2\" & friends"));
}

#[test]
fn test_convert_withStrictOptionsOnCows_shouldMatchDefault() {
    let strict = parse_transcript_with(COWS_TRANSCRIPT, &ParserOptions::strict()).unwrap();
    let lenient = validate_and_segment(COWS_TRANSCRIPT).unwrap();
    assert_eq!(strict, lenient);
}

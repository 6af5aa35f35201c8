/*!
 * Tests for transcript validation
 */

use youtube_to_xml::transcript::validator::{validate_transcript, validate_transcript_with, ParserOptions};
use youtube_to_xml::transcript::{parse_transcript_with, validate_and_segment, TranscriptLine};
use youtube_to_xml::TranscriptError;

/// Test the three input boundary failures
#[test]
fn test_validateAndSegment_withEmptyInput_shouldReturnEmptyInput() {
    assert_eq!(validate_and_segment(""), Err(TranscriptError::EmptyInput));
    assert_eq!(validate_and_segment("   \n\t\n  "), Err(TranscriptError::EmptyInput));
}

#[test]
fn test_validateAndSegment_withTimestampFirst_shouldReturnInvalidFormat() {
    let result = validate_and_segment("0:05\nHello");
    assert!(matches!(result, Err(TranscriptError::InvalidFormat(_))));
}

#[test]
fn test_validateAndSegment_withLeadingBlankLinesThenTimestamp_shouldReturnInvalidFormat() {
    let result = validate_and_segment("\n\n  0:05\nHello");
    assert!(matches!(result, Err(TranscriptError::InvalidFormat(_))));
}

#[test]
fn test_validateAndSegment_withNoTimestamps_shouldReturnMissingTimestamp() {
    assert_eq!(
        validate_and_segment("Title\nNo timestamps here"),
        Err(TranscriptError::MissingTimestamp)
    );
}

#[test]
fn test_validateTranscript_withValidInput_shouldDropBlankLinesAndTrim() {
    let lines = validate_transcript("  Title  \n\n0:01\n   hello   \n").unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], TranscriptLine::Text("Title".to_string()));
    assert!(lines[1].is_timestamp());
    assert_eq!(lines[2].as_text(), Some("hello"));
}

#[test]
fn test_validateTranscript_withTextBeforeFirstTimestamp_shouldAcceptByDefault() {
    assert!(validate_transcript("Title\nsome preamble\n0:01\nmore").is_ok());
}

/// Test strict layout rules
#[test]
fn test_validateTranscriptWith_strictAndTooFewLines_shouldReject() {
    let result = validate_transcript_with("Title\n0:01", &ParserOptions::strict());
    assert!(matches!(result, Err(TranscriptError::InvalidFormat(_))));

    // The same input is fine without strict mode
    assert!(validate_transcript("Title\n0:01").is_ok());
}

#[test]
fn test_validateTranscriptWith_strictAndSecondLineText_shouldReject() {
    let result = validate_transcript_with("Title\nnot a time\n0:01\nx", &ParserOptions::strict());
    match result {
        Err(TranscriptError::InvalidFormat(reason)) => assert!(reason.contains("second line")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_validateTranscriptWith_strictAndThirdLineTimestamp_shouldReject() {
    let result = validate_transcript_with("Title\n0:01\n0:02\nx", &ParserOptions::strict());
    match result {
        Err(TranscriptError::InvalidFormat(reason)) => assert!(reason.contains("third line")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_validateTranscriptWith_strictAndDecreasingChapterStarts_shouldReject() {
    let raw = "A\n0:10\nx\nB\n0:05\nz";

    let strict = parse_transcript_with(raw, &ParserOptions::strict());
    assert!(matches!(strict, Err(TranscriptError::InvalidFormat(_))));

    let lenient = parse_transcript_with(raw, &ParserOptions::default()).unwrap();
    assert_eq!(lenient.len(), 2);
}

#[test]
fn test_validateTranscriptWith_strictAndWellFormedInput_shouldAccept() {
    let raw = "Introduction\n0:00\nHello\n0:30\nwrap up\nNext\n1:00\nMore";
    let chapters = parse_transcript_with(raw, &ParserOptions::strict()).unwrap();
    assert_eq!(chapters.len(), 2);
}

#[test]
fn test_errorOrder_withEmptyAndStrict_shouldReportEmptyFirst() {
    assert_eq!(
        validate_transcript_with("", &ParserOptions::strict()),
        Err(TranscriptError::EmptyInput)
    );
    assert_eq!(
        validate_transcript_with("Title\nno time\nstill none", &ParserOptions::strict()),
        Err(TranscriptError::MissingTimestamp)
    );
}

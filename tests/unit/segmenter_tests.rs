/*!
 * Tests for chapter segmentation
 */

use youtube_to_xml::timestamp::Timestamp;
use youtube_to_xml::transcript::model::classify_lines;
use youtube_to_xml::transcript::segmenter::{chapter_title_indices, segment};
use youtube_to_xml::transcript::{validate_and_segment, TranscriptLine};

use crate::common::COWS_TRANSCRIPT;

fn texts(lines: &[TranscriptLine]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Test the two-chapter transcript from the documentation
#[test]
fn test_segment_withCowsTranscript_shouldFindTwoChapters() {
    let chapters = validate_and_segment(COWS_TRANSCRIPT).unwrap();

    assert_eq!(chapters.len(), 2);

    assert_eq!(chapters[0].title, "Introduction to Cows");
    assert_eq!(chapters[0].start_time.to_string(), "0:02");
    assert_eq!(
        texts(&chapters[0].content_lines),
        vec!["0:02", "Welcome to this talk about erm.. er", "2:30", "Let's start with the fundamentals"]
    );

    assert_eq!(chapters[1].title, "Washing the cow");
    assert_eq!(chapters[1].start_time.to_string(), "15:45");
    assert_eq!(
        texts(&chapters[1].content_lines),
        vec!["15:45", "First, we'll start with the patches"]
    );
}

#[test]
fn test_segment_withCowsTranscript_shouldLinkEndTimes() {
    let chapters = validate_and_segment(COWS_TRANSCRIPT).unwrap();

    assert_eq!(chapters[0].end_time, Timestamp::parse("15:45"));
    assert_eq!(chapters[0].duration_secs(), Some(943));
    assert_eq!(chapters[1].end_time, None);
    assert_eq!(chapters[1].duration_secs(), None);
    assert_eq!(chapters[0].timestamp_count(), 2);
}

/// Test that a single chapter keeps every line after the title
#[test]
fn test_segment_withNoBoundary_shouldKeepWholeTail() {
    let raw = "Title\n0:00\nfirst\n0:10\nsecond\n0:20\nthird";
    let chapters = validate_and_segment(raw).unwrap();

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, "Title");
    assert_eq!(chapters[0].content_lines, classify_lines(raw)[1..].to_vec());
}

/// Test that only a gap of exactly two lines starts a chapter
#[test]
fn test_segment_withThreeLineGap_shouldNotSplit() {
    let raw = "Title\n0:00\none\ntwo\nthree\n0:10\nfour";
    let chapters = validate_and_segment(raw).unwrap();

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].content_lines.len(), 6);
}

#[test]
fn test_segment_withAdjacentTimestamps_shouldNotSplit() {
    let raw = "Title\n0:00\n0:05\nspoken\n0:10\nmore";
    let chapters = validate_and_segment(raw).unwrap();

    assert_eq!(chapters.len(), 1);
    assert_eq!(texts(&chapters[0].content_lines), vec!["0:00", "0:05", "spoken", "0:10", "more"]);
}

#[test]
fn test_segment_withTwoLineGap_shouldMoveSecondLineToNextTitle() {
    let raw = "First\n0:00\nlast words\nSecond\n1:00\nopening";
    let chapters = validate_and_segment(raw).unwrap();

    assert_eq!(chapters.len(), 2);
    assert_eq!(texts(&chapters[0].content_lines), vec!["0:00", "last words"]);
    assert_eq!(chapters[1].title, "Second");
    assert!(!texts(&chapters[1].content_lines).contains(&"Second".to_string()));
}

#[test]
fn test_segment_withManyChapters_shouldPartitionAllLines() {
    let raw = "A\n0:00\na1\nB\n1:00\nb1\n1:30\nb2\nC\n2:00\nc1";
    let lines = classify_lines(raw);
    let chapters = validate_and_segment(raw).unwrap();

    let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);

    // Titles plus content account for every line exactly once
    let total: usize = chapters.iter().map(|c| c.content_lines.len() + 1).sum();
    assert_eq!(total, lines.len());

    for pair in chapters.windows(2) {
        assert!(pair[0].start_time < pair[1].start_time);
    }
}

/// Test text between the title and the first timestamp
#[test]
fn test_segment_withPreambleBeforeFirstTimestamp_shouldKeepItAsContent() {
    let chapters = validate_and_segment("Title\nsome text\n0:01\nmore").unwrap();

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].start_time.to_string(), "0:01");
    assert_eq!(texts(&chapters[0].content_lines), vec!["some text", "0:01", "more"]);
}

/// Test a chapter title that is itself shaped like a timestamp
#[test]
fn test_segment_withTimestampShapedTitle_shouldTreatItAsTimestamp() {
    let raw = "Intro\n0:01\nhello\nbye\n5:00\n6:00\ntext";
    let chapters = validate_and_segment(raw).unwrap();

    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[1].title, "bye");
    assert_eq!(chapters[1].start_time.to_string(), "5:00");
    assert_eq!(texts(&chapters[1].content_lines), vec!["5:00", "6:00", "text"]);
}

#[test]
fn test_chapterTitleIndices_withBoundaries_shouldIncludeFirstLine() {
    let lines = classify_lines("A\n0:00\na1\nB\n1:00\nb1");
    assert_eq!(chapter_title_indices(&lines), vec![0, 3]);
}

#[test]
fn test_segment_withChapterMissingTimestamp_shouldSkipIt() {
    // Built by hand: validation keeps timestamp-free input away from the segmenter
    let lines = vec![TranscriptLine::classify("Orphan"), TranscriptLine::classify("no time here")];
    assert!(segment(&lines).is_empty());
}

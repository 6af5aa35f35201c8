/*!
 * Structural validation of raw transcripts.
 *
 * Checks run once, in a fixed order, before any segmentation:
 * - the input is not empty or whitespace-only
 * - the first non-blank line is a title, not a timestamp
 * - at least one line is a timestamp
 *
 * Strict mode adds the layout rules of a pasted YouTube transcript (title,
 * timestamp, content) and requires chapter start times to increase.
 */

use log::debug;

use crate::errors::TranscriptError;

use super::model::{TranscriptLine, classify_lines};
use super::segmenter::chapter_title_indices;

/// Minimum non-blank lines in strict mode: title, timestamp, content
pub const MINIMUM_LINES_REQUIRED: usize = 3;

/// Options controlling how strictly a transcript is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Enforce the title / timestamp / content opening and increasing chapter starts
    pub strict_layout: bool,
}

impl ParserOptions {
    pub fn strict() -> Self {
        Self { strict_layout: true }
    }
}

/// Validate a raw transcript with default options
pub fn validate_transcript(raw: &str) -> Result<Vec<TranscriptLine>, TranscriptError> {
    validate_transcript_with(raw, &ParserOptions::default())
}

/// Validate a raw transcript and return its classified non-blank lines
pub fn validate_transcript_with(
    raw: &str,
    options: &ParserOptions,
) -> Result<Vec<TranscriptLine>, TranscriptError> {
    if raw.trim().is_empty() {
        return Err(TranscriptError::EmptyInput);
    }

    let lines = classify_lines(raw);

    if lines.first().is_some_and(TranscriptLine::is_timestamp) {
        return Err(TranscriptError::InvalidFormat(
            "transcript must start with a chapter title, not a timestamp".to_string(),
        ));
    }

    if !lines.iter().any(TranscriptLine::is_timestamp) {
        return Err(TranscriptError::MissingTimestamp);
    }

    if options.strict_layout {
        check_strict_layout(&lines)?;
    }

    debug!("Transcript passed validation with {} lines", lines.len());
    Ok(lines)
}

fn check_strict_layout(lines: &[TranscriptLine]) -> Result<(), TranscriptError> {
    if lines.len() < MINIMUM_LINES_REQUIRED {
        return Err(TranscriptError::InvalidFormat(
            "transcript must have at least 3 lines: chapter title, timestamp, content".to_string(),
        ));
    }

    if !lines[1].is_timestamp() {
        return Err(TranscriptError::InvalidFormat(
            "second line must be a timestamp".to_string(),
        ));
    }

    if lines[2].is_timestamp() {
        return Err(TranscriptError::InvalidFormat(
            "third line must be content, not a timestamp".to_string(),
        ));
    }

    // A boundary title is always followed by the chapter's first timestamp
    let starts: Vec<u64> = chapter_title_indices(lines)
        .iter()
        .filter_map(|&title| lines.get(title + 1).and_then(TranscriptLine::as_timestamp))
        .map(|ts| ts.seconds())
        .collect();

    if starts.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(TranscriptError::InvalidFormat(
            "chapter start times must be strictly increasing".to_string(),
        ));
    }

    Ok(())
}

/*!
 * Transcript parsing for pasted YouTube transcripts.
 *
 * This module turns plain timestamped text into chapters:
 * - Validation of the structural preconditions (fail fast, typed errors)
 * - Line classification into timestamps and text
 * - Chapter segmentation using the two-line gap rule
 *
 * # Architecture
 *
 * - `model`: Line, chapter and document types
 * - `validator`: Structural checks run before segmentation
 * - `segmenter`: Gap scan that infers chapter boundaries
 */

pub mod model;
pub mod segmenter;
pub mod validator;

// Re-export main types
pub use model::{Chapter, TranscriptDocument, TranscriptLine};
pub use segmenter::{GapKind, LINES_FOR_CHAPTER_BOUNDARY};
pub use validator::ParserOptions;

use crate::errors::TranscriptError;

/// Validate a raw transcript and split it into chapters.
///
/// Never returns a partial result: either every check passes and all
/// chapters are produced, or the first failing check is reported.
pub fn validate_and_segment(raw: &str) -> Result<Vec<Chapter>, TranscriptError> {
    parse_transcript_with(raw, &ParserOptions::default())
}

/// Same as [`validate_and_segment`] with explicit parser options
pub fn parse_transcript_with(raw: &str, options: &ParserOptions) -> Result<Vec<Chapter>, TranscriptError> {
    let lines = validator::validate_transcript_with(raw, options)?;
    Ok(segmenter::segment(&lines))
}

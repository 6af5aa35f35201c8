/*!
 * Transcript model types.
 *
 * Lines are classified once into timestamps and spoken text, then grouped
 * into chapters by the segmenter.
 */

use std::fmt;

use crate::metadata::VideoMetadata;
use crate::timestamp::Timestamp;

/// One non-blank line of a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    /// A line that is exactly a timestamp
    Timestamp(Timestamp),
    /// Spoken text or a chapter title
    Text(String),
}

impl TranscriptLine {
    /// Classify a line; surrounding whitespace is trimmed
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        match Timestamp::parse(trimmed) {
            Some(ts) => Self::Timestamp(ts),
            None => Self::Text(trimmed.to_string()),
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp(_))
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Timestamp(_) => None,
        }
    }
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(ts) => write!(f, "{}", ts),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Split raw text into classified lines, dropping blank ones
pub fn classify_lines(raw: &str) -> Vec<TranscriptLine> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(TranscriptLine::classify)
        .collect()
}

/// A named, time-bounded segment of a transcript.
///
/// The title is never part of `content_lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Chapter title
    pub title: String,

    /// First timestamp of the chapter
    pub start_time: Timestamp,

    /// Start of the following chapter, `None` for the last one
    pub end_time: Option<Timestamp>,

    /// Timestamp and text lines in their original order
    pub content_lines: Vec<TranscriptLine>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, start_time: Timestamp, content_lines: Vec<TranscriptLine>) -> Self {
        Self {
            title: title.into(),
            start_time,
            end_time: None,
            content_lines,
        }
    }

    /// Set the end of the chapter
    pub fn with_end_time(mut self, end_time: Timestamp) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Length in seconds, `None` when the chapter runs to the end of the video
    pub fn duration_secs(&self) -> Option<u64> {
        self.end_time
            .map(|end| end.seconds().saturating_sub(self.start_time.seconds()))
    }

    /// Number of timestamp lines in the chapter
    pub fn timestamp_count(&self) -> usize {
        self.content_lines.iter().filter(|line| line.is_timestamp()).count()
    }
}

/// Chapters plus the metadata of the video they came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptDocument {
    pub metadata: VideoMetadata,
    pub chapters: Vec<Chapter>,
}

impl TranscriptDocument {
    pub fn new(metadata: VideoMetadata, chapters: Vec<Chapter>) -> Self {
        Self { metadata, chapters }
    }
}

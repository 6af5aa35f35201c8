/*!
 * Chapter segmentation.
 *
 * Chapter titles are not marked in a pasted transcript. They are inferred from
 * the number of text lines between two consecutive timestamps:
 *
 * ```text
 * 0:02              <- timestamp i
 * Welcome ...          content of the current chapter
 * 2:30              <- timestamp j, gap 1: plain content
 * Let's start ...      last content line of the current chapter
 * Washing the cow      title of the next chapter
 * 15:45             <- timestamp k, gap 2: chapter boundary
 * ```
 *
 * Any other gap (0, or more than 2) keeps every line as content of the
 * current chapter. The first line of the transcript always titles the first
 * chapter.
 */

use log::{debug, warn};

use super::model::{Chapter, TranscriptLine};

/// Text lines between two timestamps that mark a chapter boundary
pub const LINES_FOR_CHAPTER_BOUNDARY: usize = 2;

/// How the lines between two consecutive timestamps are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKind {
    /// Two timestamps in a row
    Adjacent,
    /// One text line, spoken content
    Content,
    /// Trailing content of the current chapter, then the next chapter's title
    Boundary,
    /// More than two text lines, all kept as content
    Overflow,
}

/// Classify a gap by its number of text lines
pub fn classify_gap(lines_between: usize) -> GapKind {
    match lines_between {
        0 => GapKind::Adjacent,
        1 => GapKind::Content,
        LINES_FOR_CHAPTER_BOUNDARY => GapKind::Boundary,
        _ => GapKind::Overflow,
    }
}

/// The stretch between two consecutive timestamp lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    /// Index of the earlier timestamp
    pub from: usize,
    /// Index of the later timestamp
    pub to: usize,
    pub kind: GapKind,
}

impl Gap {
    fn between(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            kind: classify_gap(to - from - 1),
        }
    }

    /// Number of text lines strictly between the two timestamps
    pub fn lines_between(&self) -> usize {
        self.to - self.from - 1
    }

    /// Index of the inferred chapter title, for boundary gaps
    pub fn title_index(&self) -> Option<usize> {
        match self.kind {
            GapKind::Boundary => Some(self.to - 1),
            _ => None,
        }
    }
}

/// Indices of all timestamp lines
pub fn find_timestamps(lines: &[TranscriptLine]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_timestamp())
        .map(|(i, _)| i)
        .collect()
}

/// Classify every pair of consecutive timestamps
pub fn scan_gaps(lines: &[TranscriptLine]) -> Vec<Gap> {
    find_timestamps(lines)
        .windows(2)
        .map(|pair| Gap::between(pair[0], pair[1]))
        .collect()
}

/// Indices of the lines that title a chapter, in order.
///
/// The first line always titles the first chapter.
pub fn chapter_title_indices(lines: &[TranscriptLine]) -> Vec<usize> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut titles = vec![0];
    titles.extend(scan_gaps(lines).iter().filter_map(Gap::title_index));
    titles
}

/// Group classified lines into chapters.
///
/// Expects input that already passed validation: a text first line and at
/// least one timestamp. A chapter that would end up without any timestamp is
/// dropped with a warning rather than failing.
pub fn segment(lines: &[TranscriptLine]) -> Vec<Chapter> {
    let title_indices = chapter_title_indices(lines);
    let mut chapters: Vec<Chapter> = Vec::with_capacity(title_indices.len());

    for (position, &title_index) in title_indices.iter().enumerate() {
        let content_end = title_indices
            .get(position + 1)
            .copied()
            .unwrap_or(lines.len());
        let content_lines = lines[title_index + 1..content_end].to_vec();
        let title = lines[title_index].to_string();

        let Some(start_time) = content_lines.iter().find_map(TranscriptLine::as_timestamp) else {
            warn!("Skipping chapter '{}' with no timestamp", title);
            continue;
        };

        if let Some(previous) = chapters.last_mut() {
            previous.end_time = Some(start_time);
        }

        debug!(
            "Chapter {}: '{}' at {} ({} lines)",
            chapters.len() + 1,
            title,
            start_time,
            content_lines.len()
        );
        chapters.push(Chapter::new(title, start_time, content_lines));
    }

    chapters
}

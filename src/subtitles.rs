/*!
 * Conversion of downloaded YouTube subtitle data.
 *
 * Works on files already fetched by yt-dlp:
 * - the `json3` subtitle track (timed caption events)
 * - the `.info.json` metadata (title, upload date, duration, URL, chapters)
 *
 * Caption lines are assigned to platform chapters by start time.
 */

use log::{debug, warn};
use serde::Deserialize;

use crate::errors::SubtitleError;
use crate::metadata::VideoMetadata;
use crate::timestamp::Timestamp;
use crate::transcript::{Chapter, TranscriptLine};

/// A caption line with its start offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedLine {
    pub start_ms: u64,
    pub text: String,
}

impl TimedLine {
    pub fn new(start_ms: u64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            text: text.into(),
        }
    }
}

/// A chapter as listed in the video's platform metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformChapter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub end_time: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Json3Document {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(default)]
    segs: Option<Vec<Json3Segment>>,
}

#[derive(Debug, Deserialize)]
struct Json3Segment {
    #[serde(default)]
    utf8: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    upload_date: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    webpage_url: Option<String>,
    #[serde(default)]
    chapters: Option<Vec<PlatformChapter>>,
}

/// Parse a json3 subtitle track into caption lines.
///
/// Events without segments are skipped; segment text is joined, display line
/// breaks become spaces and empty captions are dropped.
pub fn parse_json3(content: &str) -> Result<Vec<TimedLine>, SubtitleError> {
    let document: Json3Document = serde_json::from_str(content)?;

    let lines: Vec<TimedLine> = document
        .events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let joined: String = segs.into_iter().filter_map(|seg| seg.utf8).collect();
            let text = joined.trim().replace('\n', " ");
            if text.is_empty() {
                None
            } else {
                Some(TimedLine::new(event.start_ms, text))
            }
        })
        .collect();

    debug!("Parsed {} caption lines from json3", lines.len());
    Ok(lines)
}

/// Parse a yt-dlp info JSON into metadata and its chapter list
pub fn parse_video_info(content: &str) -> Result<(VideoMetadata, Vec<PlatformChapter>), SubtitleError> {
    let info: VideoInfo = serde_json::from_str(content)?;

    let duration_secs = info
        .duration
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| d.floor() as u64)
        .unwrap_or(0);

    let metadata = VideoMetadata {
        title: info.title.unwrap_or_else(|| "Untitled".to_string()),
        published: info.upload_date.unwrap_or_default(),
        duration_secs,
        url: info.webpage_url.unwrap_or_default(),
    };

    Ok((metadata, info.chapters.unwrap_or_default()))
}

/// Group caption lines into chapters by start time.
///
/// Without platform chapters everything goes into one chapter named after the
/// video. Otherwise a line belongs to the chapter whose `[start, next start)`
/// range contains it. Chapters without captions are kept with no content.
pub fn assign_lines_to_chapters(
    metadata: &VideoMetadata,
    lines: &[TimedLine],
    chapters: &[PlatformChapter],
) -> Vec<Chapter> {
    if chapters.is_empty() {
        return vec![Chapter::new(
            metadata.title.clone(),
            Timestamp::from_seconds(0),
            to_content_lines(lines.iter()),
        )];
    }

    let starts_ms: Vec<u64> = chapters.iter().map(|c| seconds_to_millis(c.start_time)).collect();

    chapters
        .iter()
        .enumerate()
        .map(|(i, platform)| {
            let start_ms = starts_ms[i];
            let end_ms = starts_ms.get(i + 1).copied();

            let in_range = lines
                .iter()
                .filter(|line| line.start_ms >= start_ms && end_ms.is_none_or(|end| line.start_ms < end));

            let title = platform
                .title
                .clone()
                .unwrap_or_else(|| format!("Chapter {}", i + 1));
            let mut chapter = Chapter::new(title, Timestamp::from_millis(start_ms), to_content_lines(in_range));
            if let Some(end) = end_ms {
                chapter = chapter.with_end_time(Timestamp::from_millis(end));
            }

            if chapter.content_lines.is_empty() {
                warn!("Chapter '{}' has no captions", chapter.title);
            }
            chapter
        })
        .collect()
}

/// Build a full chapter list from json3 and optional info JSON content
pub fn convert_subtitles(
    json3: &str,
    info: Option<&str>,
) -> Result<(VideoMetadata, Vec<Chapter>), SubtitleError> {
    let lines = parse_json3(json3)?;
    if lines.is_empty() {
        return Err(SubtitleError::NoTranscriptLines);
    }

    let (metadata, platform_chapters) = match info {
        Some(content) => parse_video_info(content)?,
        None => (VideoMetadata::default(), Vec::new()),
    };

    let chapters = assign_lines_to_chapters(&metadata, &lines, &platform_chapters);
    Ok((metadata, chapters))
}

fn to_content_lines<'a>(lines: impl Iterator<Item = &'a TimedLine>) -> Vec<TranscriptLine> {
    lines
        .flat_map(|line| {
            [
                TranscriptLine::Timestamp(Timestamp::from_millis(line.start_ms)),
                TranscriptLine::Text(line.text.clone()),
            ]
        })
        .collect()
}

fn seconds_to_millis(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    }
}

/*!
 * # youtube-to-xml - YouTube transcripts to chaptered XML
 *
 * A Rust library for turning YouTube transcripts into structured XML documents
 * partitioned into chapters.
 *
 * ## Features
 *
 * - Parse transcripts pasted from YouTube's "Show transcript" panel
 * - Infer chapter titles from the layout of timestamp and text lines
 * - Convert downloaded json3 subtitle tracks using the video's chapters
 * - Emit well-formed, escaped XML with video metadata
 * - Batch conversion of whole transcript folders
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: Timestamp recognition and formatting
 * - `transcript`: Validation and chapter segmentation:
 *   - `transcript::validator`: Structural checks with typed errors
 *   - `transcript::segmenter`: Gap-based chapter boundary detection
 *   - `transcript::model`: Line, chapter and document types
 * - `metadata`: Video metadata and its display formatting
 * - `xml_builder`: XML document generation
 * - `subtitles`: json3 subtitle and yt-dlp info JSON conversion
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod metadata;
pub mod subtitles;
pub mod timestamp;
pub mod transcript;
pub mod xml_builder;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, DocumentError, SubtitleError, TranscriptError};
pub use metadata::VideoMetadata;
pub use timestamp::Timestamp;
pub use transcript::{validate_and_segment, Chapter, TranscriptDocument, TranscriptLine};
pub use xml_builder::build_document;

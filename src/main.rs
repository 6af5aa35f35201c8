// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use youtube_to_xml::app_config::{Config, LogLevel};
use youtube_to_xml::app_controller::{ConversionOutcome, Controller};
use youtube_to_xml::{AppError, TranscriptError};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a transcript file or a folder of transcripts (default command)
    Convert(ConvertArgs),

    /// Convert a downloaded json3 subtitle track
    Subtitles(SubtitleArgs),

    /// Generate shell completions for youtube-to-xml
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every conversion
#[derive(clap::Args, Debug, Clone)]
struct CommonArgs {
    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory for the XML output (folder mode writes next to each transcript)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(clap::Args, Debug)]
struct ConvertArgs {
    /// Transcript text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Require the title / timestamp / content opening
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(clap::Args, Debug)]
struct SubtitleArgs {
    /// json3 subtitle file downloaded by yt-dlp
    #[arg(long, value_name = "FILE")]
    json3: PathBuf,

    /// yt-dlp .info.json with the video's metadata and chapters
    #[arg(long, value_name = "FILE")]
    info: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

/// youtube-to-xml - Convert YouTube transcripts to XML with chapter detection
#[derive(Parser, Debug)]
#[command(name = "youtube-to-xml")]
#[command(version)]
#[command(about = "Convert YouTube transcripts to XML format with chapter detection")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "Converts a YouTube transcript into an XML document split into chapters.

EXPECTED FORMAT:
    Introduction to Bret Taylor
    00:04
    You're CTO of Meta and and co-CEO of...

REQUIREMENTS:
    - 1st line: (non-timestamp) -> becomes first chapter
    - 2nd line: (timestamp e.g. \"0:03\") -> becomes start_time for first chapter
    - 3rd line: (non-timestamp) -> first content line of first chapter

A new chapter starts wherever exactly two lines sit between two timestamps:
the first is the last line of the current chapter, the second is the title
of the next one.

EXAMPLES:
    youtube-to-xml transcript.txt                  # Writes transcript_files/transcript.xml
    youtube-to-xml -f transcript.txt               # Force overwrite existing files
    youtube-to-xml transcripts/                    # Convert every .txt in a folder
    youtube-to-xml subtitles --json3 v.en.json3 --info v.info.json
    youtube-to-xml completions bash > youtube-to-xml.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Require the title / timestamp / content opening
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    common: CommonArgs,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "youtube-to-xml", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Subtitles(args)) => run_subtitles(args),
        None => match cli.input_path {
            Some(input_path) => run_convert(ConvertArgs {
                input_path,
                strict: cli.strict,
                common: cli.common,
            }),
            None => Err(anyhow!("INPUT_PATH is required when no subcommand is specified")),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration and apply command line overrides
fn load_config(common: &CommonArgs, strict: bool) -> Result<Config> {
    // Apply the command line level first so config loading is logged at that level
    if let Some(level) = &common.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    let mut config = Config::load_or_create(&common.config_path)?;

    if let Some(output_dir) = &common.output_dir {
        config.output_dir = output_dir.to_string_lossy().to_string();
    }
    if strict {
        config.strict_validation = true;
    }
    if let Some(level) = &common.log_level {
        config.log_level = level.clone().into();
    }

    log::set_max_level(config.log_level.to_level_filter());
    Ok(config)
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let config = load_config(&args.common, args.strict)?;
    let controller = Controller::with_config(config)?;
    let force = args.common.force_overwrite;

    if args.input_path.is_file() {
        let output_dir = controller.default_output_dir();
        let outcome = controller
            .convert_file(&args.input_path, &output_dir, force)
            .map_err(|e| user_facing(e, &args.input_path))?;
        report(outcome);
    } else if args.input_path.is_dir() {
        let summary = controller.run_folder(&args.input_path, force)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} transcript(s) could not be converted", summary.failed));
        }
    } else {
        return Err(anyhow!("We couldn't find your file: {}", args.input_path.display()));
    }

    Ok(())
}

fn run_subtitles(args: SubtitleArgs) -> Result<()> {
    let config = load_config(&args.common, false)?;
    let controller = Controller::with_config(config)?;
    let output_dir = controller.default_output_dir();

    report(controller.convert_subtitles(
        &args.json3,
        args.info.as_deref(),
        &output_dir,
        args.common.force_overwrite,
    )?);
    Ok(())
}

fn report(outcome: ConversionOutcome) {
    match outcome {
        ConversionOutcome::Written(path) => println!("Created: {}", path.display()),
        ConversionOutcome::Skipped(path) => info!("Skipped existing output: {}", path.display()),
    }
}

/// Replace transcript failures with the message shown to the user
fn user_facing(error: anyhow::Error, input: &Path) -> anyhow::Error {
    let reason = match error.downcast_ref::<AppError>() {
        Some(AppError::Transcript(TranscriptError::EmptyInput)) => {
            return anyhow!("Your file is empty: {}", input.display());
        }
        Some(AppError::Transcript(TranscriptError::InvalidFormat(reason))) => reason.clone(),
        Some(AppError::Transcript(TranscriptError::MissingTimestamp)) => "no timestamps found".to_string(),
        _ => return error,
    };

    anyhow!("Wrong format in '{}' ({}) - run 'youtube-to-xml --help'", input.display(), reason)
}

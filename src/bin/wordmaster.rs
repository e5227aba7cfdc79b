//! `wordmaster` - text statistics from the command line
//!
//! Reads text from a file or stdin and prints word, character, sentence and
//! paragraph counts, reading and speaking time, and a readability score.
//!
//! # Usage
//!
//! ```bash
//! wordmaster essay.txt
//! wordmaster --format --grammar < draft.txt
//! wordmaster --goal 1500 --meters essay.txt
//! wordmaster --json essay.txt
//! ```

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use wordmaster::text::{is_blank, summarize_issues};
use wordmaster::{
    Error, GrammarIssue, LogLevel, MeterConfig, Meters, Platform, SavedText, StatsSnapshot,
    WordGoal, check_grammar, compute_stats, format_text, goal_progress, render_report,
    set_log_callback, summarize_text, video_targets, write_export,
};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "wordmaster - text statistics

USAGE:
    wordmaster [OPTIONS] [FILE]

Reads FILE, or stdin when FILE is omitted or '-'.

OPTIONS:
    -h, --help              Print this help message and exit

    --format                Normalize spacing and capitalization first
    --summarize             Keep only the first and last sentence first
    --grammar               List style issues
    --report                Print the full analysis report
    --json                  Print statistics as JSON

    --goal <N>              Word goal to track (default: 1000)
    --meters                Print progress meters and video timing targets
    --platform <NAME>       Print guidelines: all, youtube, twitter, instagram

    --export <PATH>         Write report and text to PATH
    --save <PATH>           Save text and report as JSON to PATH

    -v, --verbose           Log all engine diagnostics to stderr (warnings always)

EXAMPLES:
    wordmaster essay.txt                    # Basic statistics
    wordmaster --format --report essay.txt  # Format, then full report
    cat notes.txt | wordmaster --json       # JSON for scripts
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
#[allow(clippy::struct_excessive_bools)] // Config naturally has many boolean flags
pub struct Config {
    pub input: Option<PathBuf>,

    // Transforms, applied before measuring
    pub format: bool,
    pub summarize: bool,

    // Output
    pub grammar: bool,
    pub report: bool,
    pub json: bool,
    pub meters: bool,
    pub goal: Option<String>,
    pub platform: Option<Platform>,

    // Files
    pub export: Option<PathBuf>,
    pub save: Option<PathBuf>,

    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--format" => config.format = true,
                "--summarize" => config.summarize = true,
                "--grammar" => config.grammar = true,
                "--report" => config.report = true,
                "--json" => config.json = true,
                "--meters" => config.meters = true,
                "-v" | "--verbose" => config.verbose = true,

                "--goal" => match args.next() {
                    Some(v) => config.goal = Some(v.to_string_lossy().to_string()),
                    None => return ParseResult::Error("--goal requires a value".to_string()),
                },

                "--platform" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--platform requires a value".to_string());
                        }
                    };
                    match Platform::from_name(&value) {
                        Some(platform) => config.platform = Some(platform),
                        None => {
                            return ParseResult::Error(format!(
                                "Unknown --platform: {value} \
                                 (valid: all, youtube, twitter, instagram)"
                            ));
                        }
                    }
                }

                "--export" => match args.next() {
                    Some(v) => config.export = Some(PathBuf::from(v)),
                    None => return ParseResult::Error("--export requires a path".to_string()),
                },

                "--save" => match args.next() {
                    Some(v) => config.save = Some(PathBuf::from(v)),
                    None => return ParseResult::Error("--save requires a path".to_string()),
                },

                "-" => config.input = None,

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    if config.input.is_some() {
                        return ParseResult::Error(format!("Unexpected argument: {other}"));
                    }
                    config.input = Some(PathBuf::from(other));
                }
            }
        }

        ParseResult::Config(config)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => match run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        },
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            ExitCode::SUCCESS
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            ExitCode::from(2)
        }
    }
}

fn read_input(config: &Config) -> io::Result<String> {
    match &config.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(config: &Config) -> wordmaster::Result<()> {
    let verbose = config.verbose;
    set_log_callback(move |level: LogLevel, msg: &str| {
        if verbose || level >= LogLevel::Warn {
            eprintln!("[{level}] {msg}");
        }
    });

    let mut text = read_input(config)?;

    // Each transform replaces the text; stats are computed afterwards.
    if config.format {
        text = format_text(&text);
    }
    if config.summarize {
        match require_text(&text).and_then(summarize_text) {
            Ok(summary) => text = summary,
            Err(err) if err.is_recoverable() => eprintln!("Note: {err}"),
            Err(err) => return Err(err),
        }
    }
    let transformed = config.format || config.summarize;

    let grammar = if config.grammar {
        match require_text(&text).map(check_grammar) {
            Ok(issues) => Some(issues),
            Err(err) => {
                eprintln!("Note: {err}");
                None
            }
        }
    } else {
        None
    };

    let stats = compute_stats(&text);
    let meter_config = MeterConfig::default();
    let goal = config.goal.as_deref().map_or_else(
        || WordGoal::from_config(&meter_config),
        |input| WordGoal::parse_or_default(input, &meter_config),
    );

    let output = Output {
        text: &text,
        stats: &stats,
        grammar: grammar.as_deref(),
        goal,
        meter_config: &meter_config,
        transformed,
    };
    if config.json {
        print_json(config, &output)?;
    } else {
        print_human(config, &output);
    }

    let now = Local::now();
    if let Some(path) = &config.export {
        let exported = write_export(path, &text, &now);
        report_outcome(exported, &format!("Exported to {}", path.display()))?;
    }
    if let Some(path) = &config.save {
        let saved = SavedText::capture(&text, &now).and_then(|record| record.save(path));
        report_outcome(saved, &format!("Saved to {}", path.display()))?;
    }

    Ok(())
}

/// Summarize and grammar check refuse blank text.
fn require_text(text: &str) -> wordmaster::Result<&str> {
    if is_blank(text) {
        Err(Error::EmptyText)
    } else {
        Ok(text)
    }
}

/// Print `done` on success, a note for recoverable errors, else propagate.
fn report_outcome(result: wordmaster::Result<()>, done: &str) -> wordmaster::Result<()> {
    match result {
        Ok(()) => eprintln!("{done}"),
        Err(err) if err.is_recoverable() => eprintln!("Note: {err}"),
        Err(err) => return Err(err),
    }
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

/// Everything the printers need after the text has been measured.
struct Output<'a> {
    text: &'a str,
    stats: &'a StatsSnapshot,
    /// `None` when grammar was not requested or the text was blank.
    grammar: Option<&'a [GrammarIssue]>,
    goal: WordGoal,
    meter_config: &'a MeterConfig,
    transformed: bool,
}

fn print_human(config: &Config, output: &Output<'_>) {
    let Output {
        text,
        stats,
        grammar,
        goal,
        meter_config,
        transformed,
    } = *output;

    if transformed {
        println!("{text}");
        println!();
    }

    if config.report {
        println!("{}", render_report(text, stats, &Local::now()));
    } else {
        println!("Words:          {}", stats.word_count);
        println!("Characters:     {}", stats.chars_with_spaces);
        println!("  (no spaces):  {}", stats.chars_without_spaces);
        println!("Sentences:      {}", stats.sentence_count);
        println!("Paragraphs:     {}", stats.paragraph_count);
        println!("Reading time:   {}", stats.reading_time());
        println!("Speaking time:  {}", stats.speaking_time());
        println!("Long sentences: {}", stats.long_sentence_count);
        println!("Readability:    {}/100", stats.readability_score);
    }

    if config.goal.is_some() || config.meters {
        let progress = goal_progress(stats.word_count, goal);
        println!();
        println!(
            "Goal:           {} ({:.0}%, {:?})",
            progress.label(),
            progress.percent,
            progress.band
        );
    }

    if config.meters {
        let meters = Meters::from_stats(stats, meter_config);
        println!("Characters:     {:.0}%", meters.chars);
        println!("Speaking:       {:.0}%", meters.speaking);
        println!("Long sentences: {:.0}%", meters.long_sentences);
        println!(
            "Readability:    {:.0}% ({:?})",
            meters.readability, meters.readability_band
        );
        for target in video_targets(stats.word_count, meter_config) {
            println!(
                "{:>3}s video:     {}{}",
                target.seconds,
                target.label(),
                if target.met { " ✓" } else { "" }
            );
        }
    }

    if let Some(issues) = grammar {
        println!();
        if issues.is_empty() {
            println!("No major grammar issues found");
        } else {
            println!("Grammar issues found: {}", summarize_issues(issues));
        }
    }

    if let Some(platform) = config.platform {
        println!();
        println!("{platform}");
    }
}

fn print_json(config: &Config, output: &Output<'_>) -> wordmaster::Result<()> {
    let Output {
        text,
        stats,
        grammar,
        goal,
        meter_config,
        transformed,
    } = *output;
    let mut output = serde_json::json!({ "stats": stats });

    if transformed {
        output["text"] = serde_json::json!(text);
    }
    if let Some(issues) = grammar {
        let issues: Vec<_> = issues.iter().map(GrammarIssue::label).collect();
        output["grammar"] = serde_json::json!(issues);
    }
    if config.goal.is_some() || config.meters {
        let progress = goal_progress(stats.word_count, goal);
        output["goal"] = serde_json::json!({
            "words": progress.words,
            "goal": progress.goal.words(),
            "percent": progress.percent,
        });
    }
    if config.meters {
        let targets: Vec<_> = video_targets(stats.word_count, meter_config)
            .iter()
            .map(|t| serde_json::json!({ "seconds": t.seconds, "needed": t.needed, "met": t.met }))
            .collect();
        output["videoTargets"] = serde_json::json!(targets);
    }
    if let Some(platform) = config.platform {
        output["guidelines"] = serde_json::json!({
            "title": platform.title(),
            "items": platform.guidelines(),
        });
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

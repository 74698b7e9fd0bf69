//! Command-line interface for spacetab.
//!
//! Converts leading spaces and tabs and line endings of every file in a
//! directory, a whole tree, or one named file.

use clap::{Command, CommandFactory, Parser, ValueEnum};
use spacetab::output::{self, OutputFormat};
use spacetab::{
    ConversionReport, DEFAULT_SPACES_PER_TAB, LineMode, SpaceMode, SpacetabBuilder,
    SpacetabOptions, spacetab,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

/// Space-Tab Converter: converts spaces to tabs and vice versa, and
/// optionally line endings from DOS to Unix and vice versa.
///
/// WARNING: binary files are converted like text and will be corrupted.
#[derive(Parser)]
#[command(name = "spacetab", version, about, long_about = None, args_override_self = true)]
struct Cli {
    /// Recursively locate files to convert
    #[arg(short = 'R')]
    recursive: bool,

    /// Directory to start converting files from
    #[arg(
        short = 'd',
        value_name = "DIRECTORY",
        default_value = ".",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    directory: PathBuf,

    /// A single file in the directory to convert instead of every file; cancels -R
    #[arg(short = 'f', value_name = "FILENAME")]
    file: Option<Option<PathBuf>>,

    /// Number of spaces per tab
    #[arg(
        short = 'n',
        value_name = "LENGTH",
        default_value_t = DEFAULT_SPACES_PER_TAB,
        num_args = 0..=1,
        default_missing_value = "4",
        allow_negative_numbers = true,
        value_parser = parse_spaces_per_tab
    )]
    spaces_per_tab: usize,

    /// Convert leading spaces to tabs
    #[arg(short = 't', overrides_with = "to_spaces")]
    to_tabs: bool,

    /// Convert tabs to spaces
    #[arg(short = 's', overrides_with = "to_tabs")]
    to_spaces: bool,

    /// Convert Unix line endings to DOS
    #[arg(short = 'w', overrides_with = "to_unix")]
    to_dos: bool,

    /// Convert DOS line endings to Unix
    #[arg(short = 'u', overrides_with = "to_dos")]
    to_unix: bool,

    /// Use forward slashes when resolving paths
    #[arg(long)]
    forward_slashes: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Skip files excluded by .gitignore
    #[arg(long)]
    gitignore: bool,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Number of worker threads (default: one per core)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Print a per-file report when done
    #[arg(long)]
    report: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Pretty JSON report
    #[arg(short, long)]
    pretty: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log each conversion to stderr
    #[arg(short, long)]
    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

struct ReportSettings {
    format: OutputFormat,
    pretty: bool,
    output: Option<PathBuf>,
}

/// Parse the tab width the way `atoi` would: leading digits count, anything
/// else (including a negative number) yields 0, which disables space conversion.
/// Values past `i32::MAX` are clamped to it.
fn parse_spaces_per_tab(s: &str) -> Result<usize, String> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if negative || digits.is_empty() {
        return Ok(0);
    }
    let max = i32::MAX as usize;
    Ok(digits.parse::<usize>().map_or(max, |n| n.min(max)))
}

/// Drops bare words that are not the value of a preceding option, and
/// unknown switches, so they never reach clap.
/// A known option's value is glued to it so a value starting with `-` parses.
fn lenient_args(raw: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut cmd = Cli::command();
    cmd.build();
    let mut raw = raw.into_iter().peekable();
    let mut kept: Vec<OsString> = raw.next().into_iter().collect();
    while let Some(arg) = raw.next() {
        let Some(flag) = arg.to_str().and_then(|s| known_flag(&cmd, s)) else {
            continue;
        };
        let value = match flag {
            KnownFlag::AwaitsValue(_) => raw.next_if(|next| {
                next.to_str()
                    .is_none_or(|s| known_flag(&cmd, s).is_none())
            }),
            _ => None,
        };
        match (flag, value) {
            (KnownFlag::AwaitsValue(option), Some(value)) => {
                let mut glued = OsString::from(option);
                glued.push(value);
                kept.push(glued);
            }
            (KnownFlag::AwaitsValue(option), None) | (KnownFlag::Complete(option), _) => {
                kept.push(option.into())
            }
        }
    }
    kept
}

enum KnownFlag {
    /// Ready to pass on as is.
    Complete(String),
    /// An option whose value, if any, is the next argument. Holds the prefix to glue it to.
    AwaitsValue(String),
}

fn known_flag(cmd: &Command, arg: &str) -> Option<KnownFlag> {
    if let Some(long) = arg.strip_prefix("--") {
        let (name, inline) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        let spec = cmd.get_arguments().find(|a| a.get_long() == Some(name))?;
        return Some(if spec.get_action().takes_values() && !inline {
            KnownFlag::AwaitsValue(format!("--{}=", name))
        } else {
            KnownFlag::Complete(arg.to_string())
        });
    }
    let mut shorts = arg.strip_prefix('-')?.chars();
    let first = shorts.next()?;
    let spec = cmd.get_arguments().find(|a| a.get_short() == Some(first))?;
    if spec.get_action().takes_values() {
        return Some(if shorts.as_str().is_empty() {
            KnownFlag::AwaitsValue(format!("-{}", first))
        } else {
            KnownFlag::Complete(arg.to_string())
        });
    }
    // Grouped switches pass through only if every letter is a switch.
    let grouped = shorts.all(|c| {
        cmd.get_arguments()
            .any(|a| a.get_short() == Some(c) && !a.get_action().takes_values())
    });
    Some(KnownFlag::Complete(if grouped {
        arg.to_string()
    } else {
        format!("-{}", first)
    }))
}

impl Cli {
    fn into_options(self) -> (SpacetabOptions, Option<ReportSettings>) {
        let space_mode = if self.to_tabs {
            SpaceMode::SpacesToTabs
        } else if self.to_spaces {
            SpaceMode::TabsToSpaces
        } else {
            SpaceMode::None
        };
        let line_mode = if self.to_dos {
            LineMode::ToDos
        } else if self.to_unix {
            LineMode::ToUnix
        } else {
            LineMode::None
        };

        let options = SpacetabBuilder::new(self.directory)
            .file(self.file.flatten())
            .recursive(self.recursive)
            .spaces_per_tab(self.spaces_per_tab)
            .space_mode(space_mode)
            .line_mode(line_mode)
            .forward_slashes(self.forward_slashes)
            .follow_links(self.follow_links)
            .respect_gitignore(self.gitignore)
            .ignore_patterns(self.ignore_patterns)
            .jobs(self.jobs)
            .build();

        let report = (self.report || self.output.is_some()).then(|| ReportSettings {
            format: self.format.into(),
            pretty: self.pretty,
            output: self.output,
        });

        (options, report)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default = if verbose {
        "spacetab=debug"
    } else {
        "spacetab=error"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse_from(lenient_args(std::env::args_os()));
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    let (options, report) = cli.into_options();

    if !options.conversion.has_conversion() {
        print_hint();
        return;
    }

    match spacetab(options) {
        Ok(result) => {
            if let Some(settings) = report {
                output_report(&result, &settings);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_hint() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "spacetab".to_string());
    println!("No conversion specified\nFor help, type\n{} -h", program);
}

fn output_report(result: &ConversionReport, settings: &ReportSettings) {
    match &settings.output {
        Some(path) => {
            if let Err(e) =
                output::write_report_to_file(result, settings.format, path, settings.pretty)
            {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
        None => {
            let out = output::format_report(result, settings.format, settings.pretty);
            println!("{}", out.trim_end());
        }
    }
}

//! CLI entry point for dirmap

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirmap::{
    EntryOrder, FileConfig, IndentStyle, ReportConfig, ReportFormat, UnreadablePolicy, run_report,
};
use termcolor::{ColorChoice, StandardStream};
use tracing::Level;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Print a directory tree, skipping build and dependency folders")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip directories with this name (can be used multiple times)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Do not skip node_modules, .git, build, dist and the other default directories
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Only list files whose name ends with SUFFIX (can be used multiple times)
    #[arg(short = 's', long = "suffix", value_name = "SUFFIX")]
    suffix: Vec<String>,

    /// Also write the report to FILE, prefixed with a timestamp and the root path
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Entry ordering within a directory
    #[arg(long = "order", value_name = "ORDER")]
    order: Option<EntryOrder>,

    /// Indentation style
    #[arg(long = "indent", value_name = "STYLE")]
    indent: Option<IndentStyle>,

    /// Print directory and file counts after the tree
    #[arg(long = "summary")]
    summary: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Fail instead of skipping directories that cannot be read
    #[arg(long = "strict")]
    strict: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Read settings from a TOML file (flags take precedence)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Build the report configuration: defaults, then the config file, then flags.
    fn report_config(&self) -> dirmap::Result<ReportConfig> {
        let mut config = ReportConfig::new(&self.path);

        if let Some(path) = &self.config {
            FileConfig::load(path)?.apply(&mut config);
        }

        let walker = &mut config.walker;
        if self.no_default_excludes {
            walker.excluded_dirs.clear();
        }
        walker.excluded_dirs.extend(self.exclude.iter().cloned());
        if !self.suffix.is_empty() {
            walker.allowed_suffixes = Some(self.suffix.clone());
        }
        if let Some(level) = self.level {
            walker.max_depth = Some(level);
        }
        if let Some(order) = self.order {
            walker.order = order;
        }
        if self.strict {
            walker.on_unreadable = UnreadablePolicy::Abort;
        }

        if let Some(indent) = self.indent {
            config.output.indent = indent;
        }
        if self.summary {
            config.output.show_summary = true;
        }
        config.output.use_color = !self.json && should_use_color(self.color);

        if let Some(output) = &self.output {
            config.output_path = Some(output.clone());
        }
        if self.json {
            config.format = ReportFormat::Json;
        }
        Ok(config)
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let config = args.report_config().unwrap_or_else(|e| {
        eprintln!("dirmap: {}", e);
        process::exit(1);
    });

    let choice = if config.output.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if let Err(e) = run_report(&config, &mut stdout) {
        eprintln!("dirmap: {}", e);
        process::exit(1);
    }
}

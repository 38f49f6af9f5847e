use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use exprtree::parser::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TREE_DEPTH};
use exprtree::{EvaluatedExpression, ExpressionParser, evaluate_batch, evaluate_one};
use log::{debug, info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const PROMPT: &str = "> ";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// exprtree - Parse and evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "exprtree")]
#[command(
    about = "Parse arithmetic expressions into a fully bracketed tree and evaluate them"
)]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate, words are joined with spaces (starts a REPL when omitted)
    pub expression: Vec<String>,

    /// Evaluate every non-blank line of a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    pub file: Option<PathBuf>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Maximum bracket nesting accepted by the parser
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of chained operators on one path of the tree
    #[arg(long, default_value_t = DEFAULT_MAX_TREE_DEPTH)]
    pub max_tree_depth: usize,

    /// Also print the LaTeX rendering of each tree
    #[arg(long)]
    pub latex: bool,
}

/// What the binary should do with its input
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Expression(String),
    File(PathBuf),
    Repl,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub log_level: LogLevel,
    pub max_depth: usize,
    pub max_tree_depth: usize,
    pub latex: bool,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let mode = match (args.file, args.expression.is_empty()) {
            (Some(path), _) => Mode::File(path),
            (None, false) => Mode::Expression(args.expression.join(" ")),
            (None, true) => Mode::Repl,
        };

        CliConfig {
            mode,
            log_level: args.log_level,
            max_depth: args.max_depth,
            max_tree_depth: args.max_tree_depth,
            latex: args.latex,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if args.max_depth == 0 {
        bail!("--max-depth must be at least 1");
    }

    Ok(CliConfig::from(args))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Output lines for one evaluated expression: canonical form, optional LaTeX, value
fn render(evaluated: &EvaluatedExpression, latex: bool) -> Vec<String> {
    let mut lines = vec![evaluated.canonical.clone()];
    if latex {
        lines.push(evaluated.expression.to_latex());
    }
    lines.push(evaluated.value.to_string());
    lines
}

/// Evaluate one REPL line, turning failures into a printable message
fn handle_line(parser: &ExpressionParser, line: &str, latex: bool) -> Vec<String> {
    match evaluate_one(parser, line) {
        Ok(evaluated) => render(&evaluated, latex),
        Err(e) => {
            warn!("Rejected input '{}': {}", line, e);
            vec![format!("error: {}", e)]
        }
    }
}

fn run_expression(parser: &ExpressionParser, text: &str, latex: bool) -> Result<()> {
    let evaluated =
        evaluate_one(parser, text).with_context(|| format!("Failed to evaluate '{}'", text))?;
    for line in render(&evaluated, latex) {
        println!("{}", line);
    }
    Ok(())
}

fn run_file(parser: &ExpressionParser, path: &Path, latex: bool) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let lines: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let results = evaluate_batch(parser, &lines);
    let mut failures = 0;
    for result in &results {
        match &result.outcome {
            Ok(evaluated) => {
                for line in render(evaluated, latex) {
                    println!("{}", line);
                }
            }
            Err(e) => {
                failures += 1;
                println!("error: {}", e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} expressions failed", failures, results.len());
    }
    Ok(())
}

fn run_repl(parser: &ExpressionParser, latex: bool) -> Result<()> {
    let mut rl = DefaultEditor::new().context("Failed to initialize line editor")?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if matches!(trimmed, "quit" | "exit") {
                    break;
                }
                for out in handle_line(parser, trimmed, latex) {
                    println!("{}", out);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    debug!("REPL session ended");
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let parser =
        ExpressionParser::with_max_depth(config.max_depth).max_tree_depth(config.max_tree_depth);

    match &config.mode {
        Mode::Expression(text) => {
            info!("Evaluating '{}'", text);
            run_expression(&parser, text, config.latex)
        }
        Mode::File(path) => {
            info!("Evaluating expressions from '{}'", path.display());
            run_file(&parser, path, config.latex)
        }
        Mode::Repl => {
            info!("Starting REPL");
            run_repl(&parser, config.latex)
        }
    }
}

//! Configuration management: argument parsing and the sort-pass model

use crate::error::{SortError, SortResult};
use std::path::{Path, PathBuf};

/// Hard cap on argument slots, program name included
pub const MAX_ARGS: usize = 32;

/// Default field/token separator
pub const DEFAULT_SEPARATOR: char = ' ';

/// Ingestion and comparison strategy, selected once at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Tokenize the whole stream on the separator and sort integers
    Numeric,
    /// Tokenize lines into fields and sort records by pass keys
    Textual,
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Ascending
    }
}

/// One comparison key in a multi-key sort.
///
/// Pass order in `Config::passes` defines tie-break precedence: pass 0 is
/// the primary key, later passes break ties left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPass {
    /// Zero-based field index within a record
    pub field: usize,
    /// Zero-based character offset within that field
    pub position: usize,
    /// Per-pass order, overriding the global direction
    pub direction: Direction,
}

impl Default for SortPass {
    fn default() -> Self {
        Self {
            field: 0,
            position: 0,
            direction: Direction::Ascending,
        }
    }
}

impl SortPass {
    /// Parse a pass token like `+2`, `-0.3` or `+1.0`.
    ///
    /// The leading sign gives the pass direction (`+` ascending, `-`
    /// descending); the rest is `m` or `m.n` with base-10 field and
    /// character position.
    pub fn parse(token: &str) -> SortResult<Self> {
        let (direction, body) = match token.strip_prefix('+') {
            Some(rest) => (Direction::Ascending, rest),
            None => match token.strip_prefix('-') {
                Some(rest) => (Direction::Descending, rest),
                None => return Err(SortError::invalid_pass_spec(token)),
            },
        };

        if body.is_empty() {
            return Err(SortError::invalid_pass_spec(token));
        }

        let (field, position) = match body.split_once('.') {
            Some((m, n)) => {
                let field = m
                    .parse::<usize>()
                    .map_err(|_| SortError::invalid_pass_spec(token))?;
                let position = n
                    .parse::<usize>()
                    .map_err(|_| SortError::invalid_pass_spec(token))?;
                (field, position)
            }
            None => {
                let field = body
                    .parse::<usize>()
                    .map_err(|_| SortError::invalid_pass_spec(token))?;
                (field, 0)
            }
        };

        Ok(Self {
            field,
            position,
            direction,
        })
    }
}

/// Validated run configuration, built once and read-only afterward
#[derive(Debug, Clone)]
pub struct Config {
    /// Numeric or textual pipeline
    pub mode: Mode,
    /// Global fallback order, applied at emission
    pub direction: Direction,
    /// Splits lines into fields (textual) or delimits tokens (numeric)
    pub separator: char,
    /// Output destination; `None` means stdout
    pub output_path: Option<PathBuf>,
    /// Input sources, consumed in order; empty means stdin
    pub input_paths: Vec<PathBuf>,
    /// Ordered tie-break keys, never empty after a successful build
    pub passes: Vec<SortPass>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Textual,
            direction: Direction::Ascending,
            separator: DEFAULT_SEPARATOR,
            output_path: None,
            input_paths: Vec::new(),
            passes: Vec::new(),
        }
    }
}

impl Config {
    /// Build a configuration from the raw argument list (program name in
    /// slot 0), processing tokens strictly left to right.
    ///
    /// A token naming an existing filesystem entry is an input path; only
    /// otherwise is a `+`/`-` token parsed as a sort pass. If no passes were
    /// collected, one default pass (field 0, position 0, ascending) is
    /// injected.
    pub fn from_args(args: &[String]) -> SortResult<Self> {
        if args.len() > MAX_ARGS {
            return Err(SortError::TooManyArgs);
        }

        let mut config = Config::default();
        let mut i = 1;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "-n" => {
                    config.mode = Mode::Numeric;
                    i += 1;
                }
                "-r" => {
                    config.direction = Direction::Descending;
                    i += 1;
                }
                "-o" => {
                    let value = args.get(i + 1).ok_or_else(|| SortError::missing_value("-o"))?;
                    config.output_path = Some(PathBuf::from(value));
                    i += 2;
                }
                "-t" => {
                    let value = args.get(i + 1).ok_or_else(|| SortError::missing_value("-t"))?;
                    config.separator = value
                        .chars()
                        .next()
                        .ok_or_else(|| SortError::invalid_separator(value))?;
                    i += 2;
                }
                _ => {
                    if Path::new(arg).exists() {
                        config.input_paths.push(PathBuf::from(arg));
                    } else if arg.starts_with('+') || arg.starts_with('-') {
                        config.passes.push(SortPass::parse(arg)?);
                    } else {
                        return Err(SortError::unknown_param(arg));
                    }
                    i += 1;
                }
            }
        }

        if config.passes.is_empty() {
            config.passes.push(SortPass::default());
        }

        Ok(config)
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_paths.is_empty()
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_path.is_none()
    }
}

//! Sort engine: ingest, sort, emit
//!
//! The engine takes a read-only [`Config`] and runs exactly one of two
//! pipelines for the whole run: the numeric pipeline tokenizes the entire
//! stream on the separator and sorts integers; the textual pipeline splits
//! the stream into lines, lines into fields, and orders records with the
//! multi-pass comparator.

use crate::compare::{compare_records, Record};
use crate::config::{Config, Direction, Mode};
use crate::error::{SortContext, SortError, SortResult};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

/// Single-run sort engine borrowing an immutable configuration
pub struct Engine<'a> {
    config: &'a Config,
}

impl<'a> Engine<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Read all input, sort it, write all output.
    pub fn run(&self) -> SortResult<()> {
        let sources = self.read_sources()?;
        let mut output = self.open_output()?;

        match self.config.mode {
            Mode::Numeric => {
                let mut data = Vec::new();
                for source in &sources {
                    parse_numbers(source, self.config.separator, &mut data)?;
                }
                data.sort_unstable();
                emit_numbers(&data, self.config.direction, &mut output)?;
            }
            Mode::Textual => {
                let mut records = Vec::new();
                for source in &sources {
                    split_records(source, self.config.separator, &mut records);
                }
                let passes = &self.config.passes;
                records.sort_by(|a, b| compare_records(a, b, passes));
                emit_records(
                    &records,
                    self.config.separator,
                    self.config.direction,
                    &mut output,
                )?;
            }
        }

        output.flush()?;
        Ok(())
    }

    /// Fully consume each input source, one string per source so tokenizer
    /// state never crosses a file boundary.
    fn read_sources(&self) -> SortResult<Vec<String>> {
        if self.config.reading_from_stdin() {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            return Ok(vec![buffer]);
        }

        let mut sources = Vec::with_capacity(self.config.input_paths.len());
        for path in &self.config.input_paths {
            let text = std::fs::read_to_string(path)
                .with_file_context(&path.display().to_string())?;
            sources.push(text);
        }
        Ok(sources)
    }

    fn open_output(&self) -> SortResult<Box<dyn Write>> {
        let output: Box<dyn Write> = if let Some(path) = &self.config.output_path {
            let file =
                File::create(path).with_file_context(&path.display().to_string())?;
            Box::new(BufWriter::new(file))
        } else {
            Box::new(BufWriter::new(io::stdout()))
        };
        Ok(output)
    }
}

/// Tokenize one source on the separator and parse base-10 integers into
/// `data`. Tokens are trimmed of surrounding ASCII whitespace first, and
/// empty tokens (separator runs, a trailing newline) are skipped; anything
/// else that fails to parse is a hard error naming the token.
pub fn parse_numbers(source: &str, separator: char, data: &mut Vec<i64>) -> SortResult<()> {
    for token in source.split(separator) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| SortError::invalid_number(token))?;
        data.push(value);
    }
    Ok(())
}

/// Split one source into newline-terminated records and each record into
/// separator-delimited fields, preserving field content.
pub fn split_records(source: &str, separator: char, records: &mut Vec<Record>) {
    for line in source.lines() {
        let fields: Record = line.split(separator).map(str::to_string).collect();
        records.push(fields);
    }
}

/// Write integers back to back with no delimiter, forward when ascending,
/// reversed when descending.
pub fn emit_numbers<W: Write>(data: &[i64], direction: Direction, out: &mut W) -> io::Result<()> {
    match direction {
        Direction::Ascending => {
            for n in data {
                write!(out, "{n}")?;
            }
        }
        Direction::Descending => {
            for n in data.iter().rev() {
                write!(out, "{n}")?;
            }
        }
    }
    Ok(())
}

/// Write each record with every field (the last included) followed by the
/// separator, then a newline.
pub fn emit_records<W: Write>(
    records: &[Record],
    separator: char,
    direction: Direction,
    out: &mut W,
) -> io::Result<()> {
    let mut write_record = |record: &Record| -> io::Result<()> {
        for field in record {
            write!(out, "{field}{separator}")?;
        }
        writeln!(out)
    };

    match direction {
        Direction::Ascending => {
            for record in records {
                write_record(record)?;
            }
        }
        Direction::Descending => {
            for record in records.iter().rev() {
                write_record(record)?;
            }
        }
    }
    Ok(())
}

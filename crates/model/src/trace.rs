//! Access record decoding.
//!
//! Traces are valgrind `lackey` style: one access per line, formatted
//! `<op> <hex-address>,<size>` where `op` is one of `I`, `L`, `S`, `M`.
//! Instruction lines start in column 0; data lines carry a leading space.
//! Decoding is tolerant of either, matching the reference tool's scanner.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::SimError;

/// Kind of one memory operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Instruction fetch; ignored by the cache model entirely.
    Instruction,
    /// Data load.
    Load,
    /// Data store.
    Store,
    /// Load followed by a store to the same address.
    Modify,
}

impl Operation {
    /// Maps a trace symbol to an operation.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(Self::Instruction),
            'L' => Some(Self::Load),
            'S' => Some(Self::Store),
            'M' => Some(Self::Modify),
            _ => None,
        }
    }

    /// The trace symbol for this operation.
    pub const fn symbol(self) -> char {
        match self {
            Self::Instruction => 'I',
            Self::Load => 'L',
            Self::Store => 'S',
            Self::Modify => 'M',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One decoded trace entry.
///
/// Produced by the trace reader, consumed exactly once by the simulator,
/// then discarded. `size` never influences the hit/miss outcome; it is
/// carried only for diagnostics output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRecord {
    /// Operation kind.
    pub op: Operation,
    /// Raw byte address.
    pub addr: u64,
    /// Access size in bytes.
    pub size: u64,
}

/// Decodes one trace line, returning `None` if it is malformed.
pub fn parse_record(text: &str) -> Option<AccessRecord> {
    let text = text.trim_start();
    let mut chars = text.chars();
    let op = Operation::from_symbol(chars.next()?)?;
    let rest = chars.as_str().strip_prefix(' ')?;
    let (addr, size) = rest.split_once(',')?;
    let addr = u64::from_str_radix(addr.trim(), 16).ok()?;
    let size = size.trim().parse().ok()?;
    Some(AccessRecord { op, addr, size })
}

/// Lazily decoded trace file.
///
/// Yields one `Result<AccessRecord, SimError>` per non-blank line, in file
/// order. The sequence is finite and non-restartable; re-open the file to
/// replay it again.
#[derive(Debug)]
pub struct TraceFile {
    path: String,
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl TraceFile {
    /// Opens a trace file for replay.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceIo`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path_text = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|source| SimError::TraceIo {
            path: path_text.clone(),
            source,
        })?;
        Ok(Self {
            path: path_text,
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl Iterator for TraceFile {
    type Item = Result<AccessRecord, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;
            match line {
                Err(source) => {
                    return Some(Err(SimError::TraceIo {
                        path: self.path.clone(),
                        source,
                    }));
                }
                Ok(text) => {
                    if text.trim().is_empty() {
                        continue;
                    }
                    return Some(match parse_record(&text) {
                        Some(record) => Ok(record),
                        None => Err(SimError::MalformedRecord {
                            line: self.line_no,
                            text,
                        }),
                    });
                }
            }
        }
    }
}

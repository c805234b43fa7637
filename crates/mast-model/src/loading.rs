// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Island loader for the line-oriented tower format.
//!
//! Every line is scanned for runs of decimal digits; everything else on the
//! line (separators, labels, punctuation) is ignored. The number of integers
//! found decides what the line means:
//!
//! ```raw
//! W H            first line with integers: grid width and height
//! id x y power   four integers: a transmitter
//! id x y         three integers: a receiver
//! ```
//!
//! Lines without integers are skipped. Lines with any other count are
//! skipped as well unless the loader is `strict`, in which case they are
//! rejected. Text after a `#` is a comment. Towers are validated through
//! `IslandBuilder`, so loader errors point either at the text or at the
//! offending tower.
//!
//! `write_island` produces the same format, so generated islands can be fed
//! back to the loader.

use crate::island::{Island, IslandBuildError, IslandBuilder};
use mast_core::geometry::point::Point;
use num_traits::{PrimInt, Signed};
use regex::Regex;
use std::{
    fmt::Display,
    fs::File,
    hash::Hash,
    io::{BufRead, BufReader, Read, Write},
    path::Path,
    str::FromStr,
    sync::LazyLock,
};

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("integer pattern is valid"));

/// The error type for the island loading process.
#[derive(Debug)]
pub enum IslandLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input contained no dimension line.
    UnexpectedEof,
    /// The dimension line did not hold exactly two integers.
    InvalidDimensions { line: usize },
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The towers do not form a valid island.
    Build(IslandBuildError),
    /// In strict mode, a line matched neither tower layout.
    UnrecognizedLine { line: usize, integers: usize },
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The 1-based line the token was found on.
    pub line: usize,
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' on line {} as type {}",
            self.token, self.line, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl Display for IslandLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => {
                write!(f, "Unexpected end of input before the island dimensions")
            }
            Self::InvalidDimensions { line } => write!(
                f,
                "Line {} must hold exactly two integers: the island width and height",
                line
            ),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Build(e) => write!(f, "Invalid island: {}", e),
            Self::UnrecognizedLine { line, integers } => write!(
                f,
                "Line {} holds {} integers, expected 3 (receiver) or 4 (transmitter)",
                line, integers
            ),
        }
    }
}

impl std::error::Error for IslandLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Build(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IslandLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for IslandLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<IslandBuildError> for IslandLoaderError {
    fn from(e: IslandBuildError) -> Self {
        Self::Build(e)
    }
}

/// A configurable loader for islands.
///
/// # Configuration
/// * `strict`: reject lines whose integer count matches neither a
///   transmitter nor a receiver instead of skipping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IslandLoader<T> {
    strict: bool,
    _marker: std::marker::PhantomData<T>,
}

impl<T> IslandLoader<T>
where
    T: PrimInt + Signed + Hash + FromStr,
{
    /// Creates a new lenient `IslandLoader`.
    #[inline]
    pub fn new() -> Self {
        Self {
            strict: false,
            _marker: std::marker::PhantomData,
        }
    }

    /// Configures whether unrecognised lines are errors.
    #[inline]
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Loads an island from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Island<T>, IslandLoaderError> {
        let mut builder: Option<IslandBuilder<T>> = None;

        for (number, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_number = number + 1;
            let content = match line.find('#') {
                Some(comment) => &line[..comment],
                None => line.as_str(),
            };

            let tokens: Vec<&str> = INTEGER.find_iter(content).map(|m| m.as_str()).collect();
            if tokens.is_empty() {
                continue;
            }

            let Some(builder) = builder.as_mut() else {
                if tokens.len() != 2 {
                    return Err(IslandLoaderError::InvalidDimensions { line: line_number });
                }
                let width: T = parse_token(tokens[0], line_number)?;
                let height: T = parse_token(tokens[1], line_number)?;
                builder = Some(IslandBuilder::new(width, height));
                continue;
            };

            match tokens.len() {
                4 => {
                    let id: u32 = parse_token(tokens[0], line_number)?;
                    let x: T = parse_token(tokens[1], line_number)?;
                    let y: T = parse_token(tokens[2], line_number)?;
                    let power: T = parse_token(tokens[3], line_number)?;
                    builder.add_transmitter(id, Point::new(x, y), power);
                }
                3 => {
                    let id: u32 = parse_token(tokens[0], line_number)?;
                    let x: T = parse_token(tokens[1], line_number)?;
                    let y: T = parse_token(tokens[2], line_number)?;
                    builder.add_receiver(id, Point::new(x, y));
                }
                integers if self.strict => {
                    return Err(IslandLoaderError::UnrecognizedLine {
                        line: line_number,
                        integers,
                    });
                }
                _ => {}
            }
        }

        let builder = builder.ok_or(IslandLoaderError::UnexpectedEof)?;
        Ok(builder.build()?)
    }

    /// Loads an island from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Island<T>, IslandLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an island from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Island<T>, IslandLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an island from a string slice.
    #[inline]
    pub fn from_text(&self, s: &str) -> Result<Island<T>, IslandLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

fn parse_token<V>(token: &str, line: usize) -> Result<V, ParseTokenError>
where
    V: FromStr,
{
    token.parse::<V>().map_err(|_| ParseTokenError {
        line,
        token: token.to_owned(),
        type_name: std::any::type_name::<V>(),
    })
}

/// Writes `island` in the format read by `IslandLoader`.
pub fn write_island<T, W>(island: &Island<T>, mut writer: W) -> std::io::Result<()>
where
    T: PrimInt + Signed + Hash + Display,
    W: Write,
{
    writeln!(writer, "{} {}", island.width(), island.height())?;
    for transmitter in island.transmitters() {
        let position = transmitter.position();
        writeln!(
            writer,
            "{} {} {} {}",
            transmitter.id(),
            position.x(),
            position.y(),
            transmitter.power()
        )?;
    }
    for receiver in island.receivers() {
        let position = receiver.position();
        writeln!(writer, "{} {} {}", receiver.id(), position.x(), position.y())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        index::{ReceiverIndex, TransmitterIndex},
        island::TowerKind,
    };

    const SCENARIO: &str = r#"
        10 10
        1 2 5 1
        2 0 6 3
        3 1 2 2
        4 3 5 3
        1 0 1
        2 8 8
        3 6 5
    "#;

    #[test]
    fn test_loads_towers_in_order() {
        let island: Island<i64> = IslandLoader::new().from_text(SCENARIO).unwrap();
        assert_eq!(island.width(), 10);
        assert_eq!(island.height(), 10);
        assert_eq!(island.num_transmitters(), 4);
        assert_eq!(island.num_receivers(), 3);

        let t4 = island.transmitter(TransmitterIndex::new(3));
        assert_eq!(t4.id(), 4);
        assert_eq!(t4.position(), Point::new(3, 5));
        assert_eq!(t4.power(), 3);

        let r2 = island.receiver(ReceiverIndex::new(1));
        assert_eq!(r2.id(), 2);
        assert_eq!(r2.position(), Point::new(8, 8));
    }

    #[test]
    fn test_ignores_separators_and_comments() {
        let text = "size: 5x4  # width then height\nT1 at (1, 2) power 3\nR7 at (4,3)\n";
        let island: Island<i64> = IslandLoader::new().from_text(text).unwrap();
        assert_eq!(island.width(), 5);
        assert_eq!(island.height(), 4);
        assert_eq!(island.transmitter(TransmitterIndex::new(0)).power(), 3);
        assert_eq!(island.receiver(ReceiverIndex::new(0)).id(), 7);
    }

    #[test]
    fn test_lenient_mode_skips_unrecognised_lines() {
        let text = "4 4\n1 2\n1 1 1 1\n9 9 9 9 9\n";
        let island: Island<i64> = IslandLoader::new().from_text(text).unwrap();
        assert_eq!(island.num_transmitters(), 1);
        assert_eq!(island.num_receivers(), 0);
    }

    #[test]
    fn test_strict_mode_rejects_unrecognised_lines() {
        let text = "4 4\n1 1 1 1\n1 2\n";
        let res = IslandLoader::<i64>::new().strict(true).from_text(text);
        match res {
            Err(IslandLoaderError::UnrecognizedLine { line, integers }) => {
                assert_eq!(line, 3);
                assert_eq!(integers, 2);
            }
            other => panic!("Expected UnrecognizedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        let res = IslandLoader::<i64>::new().from_text("\n10 10 10\n");
        match res {
            Err(IslandLoaderError::InvalidDimensions { line }) => assert_eq!(line, 2),
            other => panic!("Expected InvalidDimensions, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_eof() {
        let res = IslandLoader::<i64>::new().from_text("   \n\n");
        assert!(matches!(res, Err(IslandLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_overflowing_token_reports_context() {
        let res = IslandLoader::<i8>::new().from_text("300 2\n");
        match res {
            Err(IslandLoaderError::Parse(e)) => {
                assert_eq!(e.token, "300");
                assert_eq!(e.line, 1);
                assert!(e.type_name.contains("i8"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_errors_are_forwarded() {
        let res = IslandLoader::<i64>::new().from_text("3 3\n1 5 5 1\n");
        match res {
            Err(IslandLoaderError::Build(IslandBuildError::OutOfBounds { kind, id })) => {
                assert_eq!(kind, TowerKind::Transmitter);
                assert_eq!(id, 1);
            }
            other => panic!("Expected Build error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_island_reloads_identically() {
        let island: Island<i64> = IslandLoader::new().from_text(SCENARIO).unwrap();
        let mut buffer = Vec::new();
        write_island(&island, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("10 10\n1 2 5 1\n"));

        let reloaded: Island<i64> = IslandLoader::new().strict(true).from_text(&text).unwrap();
        assert_eq!(reloaded, island);
    }
}

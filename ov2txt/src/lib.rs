//! A reader for Victoria II interface description files (`.gfx`, `.gui`).
//!
//! The format is a case-insensitive, brace-delimited `key = value` language with
//! `#` line comments, typically encoded in `WINDOWS_1252`. This crate provides the
//! character cursor ([`Source`]) with whitespace/comment skipping and location
//! tracking, plus the literal parsers (identifiers, strings, numbers, booleans,
//! `vec2i`/`rgb` blocks) that the grammar in `ov2gui` is built from.

mod error;
mod literal;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use encoding_rs_io::DecodeReaderBytesBuilder;

pub use error::{Location, ParseError, SyntaxError, SyntaxErrorKind, Warning};
pub use literal::{Rgb, Vec2i};

/// Characters that separate tokens. `;` and a leftover byte order mark are
/// tolerated as separators.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | ';' | '\u{feff}')
}

/// A character cursor over one source document.
///
/// Offers single-character lookahead: [`Source::peek`] inspects the next character
/// without consuming it, [`Source::consume`] advances past it. Both optionally skip
/// whitespace and `#` comments first. The cursor is owned by exactly one parse and
/// holds the decoded text, the read position and the current [`Location`].
#[derive(Debug)]
pub struct Source {
    name: String,
    text: String,
    pos: usize,
    location: Location,
    warnings: Vec<Warning>,
}

impl Source {
    /// Opens a file and decodes it as `WINDOWS_1252` (or whatever its BOM says).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Source, ParseError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| ParseError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let mut buf_reader = BufReader::new(
            DecodeReaderBytesBuilder::new()
                .encoding(Some(WINDOWS_1252))
                .bom_override(true)
                .build(file),
        );
        let mut text = String::new();
        buf_reader.read_to_string(&mut text).map_err(io_error)?;

        Ok(Source::from_text(path.display().to_string(), text))
    }

    /// Creates a cursor over already-decoded text. `name` is used in diagnostics.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Source {
        Source {
            name: name.into(),
            text: text.into(),
            pos: 0,
            location: Location::START,
            warnings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the next character to be consumed.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Warnings reported so far, in order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    fn peek_raw(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek_raw()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.location.line += 1;
            self.location.column = 0;
        } else {
            self.location.column += 1;
        }
        Some(c)
    }

    /// Skips any run of separators and `#`-to-end-of-line comments.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek_raw() {
                Some('#') => {
                    while let Some(c) = self.advance() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some(c) if is_blank(c) => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Returns the next character without consuming it, or `None` at end of file.
    pub fn peek(&mut self, ignore_whitespace: bool) -> Option<char> {
        if ignore_whitespace {
            self.skip_whitespace_and_comments();
        }
        self.peek_raw()
    }

    /// Consumes and returns the next character, or `None` at end of file.
    pub fn consume(&mut self, ignore_whitespace: bool) -> Option<char> {
        if ignore_whitespace {
            self.skip_whitespace_and_comments();
        }
        self.advance()
    }

    /// Like [`Source::peek`] with whitespace skipping, but end of file is an error.
    pub fn peek_required(&mut self, expected: &str) -> Result<char, ParseError> {
        match self.peek(true) {
            Some(c) => Ok(c),
            None => Err(self.eof(expected)),
        }
    }

    /// Consumes `text` character by character, comparing case-insensitively.
    pub fn expect_literal(&mut self, text: &str) -> Result<(), ParseError> {
        for target in text.chars() {
            match self.consume(true) {
                None => return Err(self.eof(&format!("'{}'", text))),
                Some(c) if c.to_lowercase().eq(target.to_lowercase()) => {}
                Some(c) => {
                    return Err(self.error(SyntaxErrorKind::Expected {
                        expected: text.to_string(),
                        found: c,
                    }));
                }
            }
        }
        Ok(())
    }

    /// Consumes exactly the character `target`.
    pub fn expect_char(&mut self, target: char) -> Result<(), ParseError> {
        match self.consume(true) {
            Some(c) if c == target => Ok(()),
            Some(c) => Err(self.error(SyntaxErrorKind::Expected {
                expected: target.to_string(),
                found: c,
            })),
            None => Err(self.eof(&format!("'{}'", target))),
        }
    }

    /// Builds a fatal error located at the current position.
    pub fn error(&self, kind: SyntaxErrorKind) -> ParseError {
        ParseError::Syntax(SyntaxError {
            file: self.name.clone(),
            location: self.location,
            kind,
        })
    }

    pub fn eof(&self, expected: &str) -> ParseError {
        self.error(SyntaxErrorKind::UnexpectedEof {
            expected: expected.to_string(),
        })
    }

    /// Reports a non-fatal anomaly at the current position.
    pub fn warn(&mut self, message: impl Into<String>) {
        let warning = Warning {
            file: self.name.clone(),
            location: self.location,
            message: message.into(),
        };
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

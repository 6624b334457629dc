//! Literal parsers on top of [`Source`].

use std::num::IntErrorKind;

use serde::Serialize;

use crate::{ParseError, Source, SyntaxErrorKind};

/// An integer pair, written `{ x = 1 y = 2 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Vec2i {
    pub x: i64,
    pub y: i64,
}

impl Vec2i {
    pub const fn new(x: i64, y: i64) -> Self {
        Vec2i { x, y }
    }
}

/// A color, written as three positional floats `{ r g b }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Source {
    /// Parses an identifier.
    ///
    /// The first non-blank character is taken unconditionally, then characters are
    /// appended while they are ASCII alphanumerics or `_`. Never empty.
    pub fn identifier(&mut self) -> Result<String, ParseError> {
        let first = match self.consume(true) {
            Some(c) => c,
            None => return Err(self.eof("identifier")),
        };
        let mut identifier = String::from(first);
        while let Some(c) = self.peek(false).filter(|&c| is_identifier_char(c)) {
            self.consume(false);
            identifier.push(c);
        }
        Ok(identifier)
    }

    /// Parses a `"quoted"` string, or a bare identifier used as a string.
    ///
    /// There is no escape syntax, so a quoted string cannot contain `"`.
    pub fn string_literal(&mut self) -> Result<String, ParseError> {
        if self.peek(true) != Some('"') {
            return self.identifier();
        }

        self.expect_char('"')?;
        let mut string = String::new();
        loop {
            match self.peek(false) {
                Some('"') => break,
                Some(c) => {
                    self.consume(false);
                    string.push(c);
                }
                None => return Err(self.eof("'\"'")),
            }
        }
        self.expect_char('"')?;
        Ok(string)
    }

    /// Collects a run of numeric characters, dropping `_` separators.
    fn numeric_run(&mut self, what: &str, accept: fn(char) -> bool) -> Result<String, ParseError> {
        self.skip_whitespace_and_comments();
        if self.peek(false).is_none() {
            return Err(self.eof(what));
        }

        let mut buf = String::new();
        while let Some(c) = self.peek(false) {
            if c == '_' {
                self.consume(false);
            } else if accept(c) {
                self.consume(false);
                buf.push(c);
            } else {
                break;
            }
        }
        Ok(buf)
    }

    /// Parses a decimal integer such as `-12` or `1_000`.
    pub fn int_literal(&mut self) -> Result<i64, ParseError> {
        let buf = self.numeric_run("integer", |c| c.is_ascii_digit() || c == '-')?;
        buf.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                self.error(SyntaxErrorKind::IntegerOutOfRange(buf.clone()))
            }
            _ => self.error(SyntaxErrorKind::InvalidInteger(buf.clone())),
        })
    }

    /// Parses a decimal float such as `0.5`, `-3` or `.25`.
    pub fn float_literal(&mut self) -> Result<f64, ParseError> {
        let buf = self.numeric_run("float", |c| c.is_ascii_digit() || c == '-' || c == '.')?;
        match buf.parse::<f64>() {
            Ok(f) if f.is_infinite() => Err(self.error(SyntaxErrorKind::FloatOutOfRange(buf))),
            Ok(f) => Ok(f),
            Err(_) => Err(self.error(SyntaxErrorKind::InvalidFloat(buf))),
        }
    }

    /// Parses `1`, `0`, `yes` or `no`.
    pub fn bool_literal(&mut self) -> Result<bool, ParseError> {
        match self.peek(true) {
            Some('1') => {
                self.consume(true);
                Ok(true)
            }
            Some('0') => {
                self.consume(true);
                Ok(false)
            }
            Some('y' | 'Y') => {
                self.expect_literal("yes")?;
                Ok(true)
            }
            Some('n' | 'N') => {
                self.expect_literal("no")?;
                Ok(false)
            }
            Some(found) => Err(self.error(SyntaxErrorKind::ExpectedBool { found })),
            None => Err(self.eof("bool")),
        }
    }

    /// Parses `{ x = <int> y = <int> }` into `vec`, in any property order.
    ///
    /// Components that do not appear keep their current value.
    pub fn read_vec2i(&mut self, vec: &mut Vec2i) -> Result<(), ParseError> {
        self.expect_char('{')?;
        while self.peek_required("'}'")? != '}' {
            let property = self.identifier()?;
            let component = if property.eq_ignore_ascii_case("x") {
                &mut vec.x
            } else if property.eq_ignore_ascii_case("y") {
                &mut vec.y
            } else {
                return Err(self.error(SyntaxErrorKind::UnknownProperty {
                    property,
                    owner: "vec2",
                }));
            };
            self.expect_char('=')?;
            *component = self.int_literal()?;
        }
        self.expect_char('}')
    }

    pub fn vec2i(&mut self) -> Result<Vec2i, ParseError> {
        let mut vec = Vec2i::default();
        self.read_vec2i(&mut vec)?;
        Ok(vec)
    }

    /// Parses `{ <float> <float> <float> }` in r, g, b order.
    pub fn rgb(&mut self) -> Result<Rgb, ParseError> {
        self.expect_char('{')?;
        let r = self.float_literal()?;
        let g = self.float_literal()?;
        let b = self.float_literal()?;
        self.expect_char('}')?;
        Ok(Rgb { r, g, b })
    }
}

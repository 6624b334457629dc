//! Error and diagnostic types for the interface text parser.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A position in a source file.
///
/// Lines are 1-based. The column is that of the last character consumed: a file
/// starts at column 1 and a newline resets it to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: u64,
    pub column: u64,
}

impl Location {
    /// The position of the first character of a file.
    pub const START: Location = Location { line: 1, column: 1 };
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What went wrong at a [`SyntaxError`]'s location.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    /// The file ended while more input was required.
    #[error("Expected {expected}, but got EOF.")]
    UnexpectedEof {
        /// Description of what was expected instead.
        expected: String,
    },
    /// A literal or punctuation character did not match.
    #[error("Expected '{expected}', but got '{found}'.")]
    Expected { expected: String, found: char },
    /// A boolean value did not start with `0`, `1`, `y` or `n`.
    #[error("Expected '0', '1', 'yes' or 'no', but got '{found}'.")]
    ExpectedBool { found: char },
    #[error("Invalid integer literal '{0}'.")]
    InvalidInteger(String),
    #[error("Integer literal '{0}' is out of range.")]
    IntegerOutOfRange(String),
    #[error("Invalid float literal '{0}'.")]
    InvalidFloat(String),
    #[error("Float literal '{0}' is out of range.")]
    FloatOutOfRange(String),
    /// A property name that the enclosing block does not know.
    #[error("Unknown property '{property}' for {owner}.")]
    UnknownProperty {
        property: String,
        owner: &'static str,
    },
    /// A definition keyword that matches no node type of the dialect.
    #[error("Unknown {dialect} type '{type_name}'.")]
    UnknownType {
        type_name: String,
        dialect: &'static str,
    },
    /// A value outside a closed set such as orientations or click sounds.
    #[error("Unknown {kind} '{value}'.")]
    UnknownValue { kind: &'static str, value: String },
}

/// A fatal syntax error, located in its source file.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Syntax error in {file}:{location}: {kind}")]
pub struct SyntaxError {
    /// Name of the source, usually its path.
    pub file: String,
    pub location: Location,
    pub kind: SyntaxErrorKind,
}

/// Errors that can occur while parsing an interface file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The file could not be opened or read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    /// The syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(e) => Some(e),
            ParseError::Io { .. } => None,
        }
    }
}

/// A tolerated anomaly. Parsing continued after it was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub file: String,
    pub location: Location,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning in {}:{}: {}",
            self.file, self.location, self.message
        )
    }
}

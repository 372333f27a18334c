use std::fmt;
use std::io;

/// Errors raised while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    UnrecognizedSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },
    /// A multi-digit literal starting with `0`.
    InvalidIntLiteral { line: usize, column: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnrecognizedSymbol {
                symbol,
                line,
                column,
            } => write!(f, "unrecognized symbol '{symbol}' at {line}:{column}"),
            Self::InvalidIntLiteral { line, column } => {
                write!(f, "invalid integer literal at {line}:{column}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Errors raised when the token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    ExpectedIdentifier { found: String, line: usize },
    ExpectedAssign { found: String, line: usize },
    ExpectedSemicolon { found: String, line: usize },
    /// A `(` whose matching `)` never arrived.
    MismatchedParenthesis { found: String, line: usize },
    /// No alternative of `fact` starts with this token.
    UnexpectedToken { found: String, line: usize },
    LiteralOutOfRange { literal: String, line: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ExpectedIdentifier { found, line } => {
                write!(f, "expected an identifier, found {found} on line {line}")
            }
            Self::ExpectedAssign { found, line } => {
                write!(f, "expected the operator '=', found {found} on line {line}")
            }
            Self::ExpectedSemicolon { found, line } => {
                write!(f, "expected ';', found {found} on line {line}")
            }
            Self::MismatchedParenthesis { found, line } => write!(
                f,
                "mismatched parenthesis, expected ')', found {found} on line {line}"
            ),
            Self::UnexpectedToken { found, line } => {
                write!(f, "syntax error at {found} on line {line}")
            }
            Self::LiteralOutOfRange { literal, line } => {
                write!(f, "integer literal {literal} is too large on line {line}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Reference to an identifier that was never assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameError {
    pub name: String,
    pub line: usize,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "symbol '{}' not defined on line {}", self.name, self.line)
    }
}

impl std::error::Error for NameError {}

/// Any failure of the lexer/parser pipeline.
#[derive(Debug)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
    Name(NameError),
    /// The sink receiving assignment lines failed.
    Output(io::Error),
}

impl Error {
    /// Name of the stage that reports this error.
    pub fn component(&self) -> &'static str {
        match self {
            Self::Lex(_) => "Lexer",
            Self::Parse(_) | Self::Name(_) => "Parser",
            Self::Output(_) => "Output",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message: &dyn fmt::Display = match self {
            Self::Lex(err) => err,
            Self::Parse(err) => err,
            Self::Name(err) => err,
            Self::Output(err) => err,
        };
        write!(f, "{} error: {}", self.component(), message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Name(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        Self::Name(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}

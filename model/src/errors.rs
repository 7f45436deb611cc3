use crate::{Token, TokenKind};

/// The first character that no token pattern accepts. Lexing stops here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected character '{character}' at line {line}, column {column}")]
pub struct LexError {
    pub character: char,
    /// Byte offset into the source
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: Token },

    #[error("expected OP '=', found {found}")]
    ExpectedAssignment { found: Token },

    #[error("expected a statement, found {found}")]
    UnexpectedStatement { found: Token },

    #[error("expected NUMBER or ID, found {found}")]
    ExpectedOperand { found: Token },

    #[error("integer literal '{literal}' does not fit in a 64-bit integer")]
    IntegerOutOfRange { literal: String },
}

impl ParseError {
    /// The token the parser was looking at when it gave up, if any.
    pub fn found(&self) -> Option<&Token> {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::ExpectedAssignment { found }
            | Self::UnexpectedStatement { found }
            | Self::ExpectedOperand { found } => Some(found),
            Self::IntegerOutOfRange { .. } => None,
        }
    }
}

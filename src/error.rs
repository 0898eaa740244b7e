use thiserror::Error;

/// Result type alias for compile operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Everything that can go wrong while turning formula text into a compiled expression.
///
/// Positions are 0-based character offsets into the source text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Unexpected character '{character}' at position {position}")]
    Lex { character: char, position: usize },

    #[error("Parse error at position {position}: {message}")]
    Parse { message: String, position: usize },

    #[error("Unknown function: '{name}' at position {position}")]
    UnknownFunction { name: String, position: usize },

    #[error("Unexpected {found} after end of expression at position {position}")]
    TrailingInput { found: String, position: usize },
}

/// Coarse classification of a [`CompileError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lex,
    Parse,
    UnknownFunction,
    TrailingInput,
}

impl CompileError {
    pub fn parse_error(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            position,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lex { .. } => ErrorKind::Lex,
            CompileError::Parse { .. } => ErrorKind::Parse,
            CompileError::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            CompileError::TrailingInput { .. } => ErrorKind::TrailingInput,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            CompileError::Lex { position, .. }
            | CompileError::Parse { position, .. }
            | CompileError::UnknownFunction { position, .. }
            | CompileError::TrailingInput { position, .. } => *position,
        }
    }
}

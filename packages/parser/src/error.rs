use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Error produced while scanning source text into tokens.
///
/// Offsets are byte offsets into the original source; they exist so a
/// caller can build a one-line diagnostic, not for later lookup (tokens
/// themselves carry no positions).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated block comment starting at offset {offset}")]
    UnterminatedComment { offset: usize },

    #[error("unmatched '*/' outside a comment at offset {offset}")]
    UnmatchedCommentEnd { offset: usize },

    #[error("invalid character at offset {offset}")]
    InvalidCharacter { offset: usize },

    #[error("integer literal out of range at offset {offset}")]
    IntegerOverflow { offset: usize },
}

/// Classification the tokenizer hands to logos while scanning; the span is
/// only known at the call site, so `tokenize` attaches it via [`LexErrorKind::at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    InvalidCharacter,
    UnterminatedComment,
    IntegerOverflow,
}

impl LexErrorKind {
    pub(crate) fn at(self, offset: usize) -> LexError {
        match self {
            LexErrorKind::InvalidCharacter => LexError::InvalidCharacter { offset },
            LexErrorKind::UnterminatedComment => LexError::UnterminatedComment { offset },
            LexErrorKind::IntegerOverflow => LexError::IntegerOverflow { offset },
        }
    }
}

/// Error produced while parsing the token sequence.
///
/// `pos` is the index of the offending token; `found` is its display
/// rendering. Message text here is presentation-ready but the variants stay
/// structured so callers can match on the kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a constant name at token {pos}, found {found}")]
    ExpectedName { pos: usize, found: String },

    #[error("expected ':=' at token {pos}, found {found}")]
    ExpectedAssign { pos: usize, found: String },

    #[error("expected ';' at token {pos}, found {found}")]
    ExpectedSemicolon { pos: usize, found: String },

    #[error("expected ',' or '>>' at token {pos}, found {found}")]
    ExpectedCommaOrArrayEnd { pos: usize, found: String },

    #[error("unexpected {found} at token {pos}")]
    UnexpectedToken { pos: usize, found: String },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("undefined constant '{name}'")]
    UndefinedConstant { pos: usize, name: String },
}

impl ParseError {
    pub fn unexpected_token(pos: usize, found: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            pos,
            found: found.into(),
        }
    }

    pub fn unexpected_end_of_input(expected: impl Into<String>) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.into(),
        }
    }

    pub fn undefined_constant(pos: usize, name: impl Into<String>) -> Self {
        Self::UndefinedConstant {
            pos,
            name: name.into(),
        }
    }
}

/// Umbrella error for the one-call [`parse`](crate::parse) convenience.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

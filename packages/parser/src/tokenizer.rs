//! Tokenizer for Constel source text using logos
//!
//! The whole input is scanned into a flat token vector before parsing
//! begins; comments and whitespace are consumed without leaving tokens.

use logos::{FilterResult, Lexer, Logos};
use std::fmt;

use crate::error::{LexError, LexErrorKind};

/// Token types for the Constel language
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(error = LexErrorKind)]
pub enum Token<'src> {
    // Never emitted: the callback swallows the comment body or fails the scan.
    #[token("/*", block_comment)]
    CommentOpen,

    // Only valid inside a comment body, which the callback above consumes,
    // so any occurrence that reaches the token stream is a stray closer.
    #[token("*/")]
    CommentClose,

    #[token(":=")]
    Assign,

    #[token(";")]
    Semicolon,

    #[token("$(")]
    EvalOpen,

    #[token(")")]
    EvalClose,

    #[token("<<")]
    ArrayOpen,

    #[token(">>")]
    ArrayClose,

    #[token(",")]
    Comma,

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexErrorKind::IntegerOverflow))]
    Number(i64),

    // Single-quoted, no escape processing; the callback strips the quotes.
    #[regex(r"'[^']*'", |lex| {
        let s = lex.slice();
        &s[1..s.len() - 1]
    })]
    Str(&'src str),

    #[regex(r"[A-Z][A-Z0-9_]*", |lex| lex.slice())]
    Name(&'src str),
}

/// Consume a block comment body up to and including the closing `*/`.
///
/// The body is opaque: characters that would be invalid tokens elsewhere,
/// and further `/*` markers, are swallowed without interpretation.
fn block_comment<'src>(lex: &mut Lexer<'src, Token<'src>>) -> FilterResult<(), LexErrorKind> {
    match lex.remainder().find("*/") {
        Some(close) => {
            lex.bump(close + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(LexErrorKind::UnterminatedComment)
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::CommentOpen => write!(f, "'/*'"),
            Token::CommentClose => write!(f, "'*/'"),
            Token::Assign => write!(f, "':='"),
            Token::Semicolon => write!(f, "';'"),
            Token::EvalOpen => write!(f, "'$('"),
            Token::EvalClose => write!(f, "')'"),
            Token::ArrayOpen => write!(f, "'<<'"),
            Token::ArrayClose => write!(f, "'>>'"),
            Token::Comma => write!(f, "','"),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Str(s) => write!(f, "string '{}'", s),
            Token::Name(n) => write!(f, "name '{}'", n),
        }
    }
}

/// Tokenize a source string, failing on the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(Token::CommentClose) => {
                return Err(LexError::UnmatchedCommentEnd { offset: span.start })
            }
            Ok(token) => tokens.push(token),
            Err(kind) => return Err(kind.at(span.start)),
        }
    }

    Ok(tokens)
}

use crate::ast::Operator;
use crate::error::{CompileError, Result};
use log::trace;
use logos::Logos;
use std::fmt;

/// Lexical units of a formula. A leading `-` is always an operator; the parser
/// decides whether it is unary or binary.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")]
pub enum Token {
    /// `3`, `3.`, `3.25` or `.25`. There is no sign and no exponent.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// A letter followed by letters, digits or underscores, case preserved.
    #[regex(r"\p{Alphabetic}[\p{Alphabetic}\p{N}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    #[regex(r"[-+*/]", parse_operator)]
    Operator(Operator),
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(",")]
    Comma,
    /// Appended after the last lexed token; never matched in the source.
    End,
}

fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_operator(lex: &logos::Lexer<Token>) -> Option<Operator> {
    lex.slice().chars().next().and_then(|c| Operator::try_from(c).ok())
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {value}"),
            Token::Identifier(name) => write!(f, "identifier '{name}'"),
            Token::Operator(operator) => write!(f, "'{}'", operator.symbol()),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::End => write!(f, "end of input"),
        }
    }
}

/// A token and the character offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Splits the whole source into tokens. The last token is always [`Token::End`].
    ///
    /// Positions are character offsets, so a formula containing multi-byte characters
    /// reports the same columns an editor shows.
    pub fn tokenize(self) -> Result<Vec<SpannedToken>> {
        let mut tokens = Vec::new();
        // Spans arrive in order, so byte offsets are converted incrementally.
        let (mut byte, mut position) = (0, 0);

        for (result, span) in Token::lexer(self.source).spanned() {
            position += self.source[byte..span.start].chars().count();
            byte = span.start;

            let token = result.map_err(|()| CompileError::Lex {
                character: self.source[span.start..].chars().next().unwrap_or('\0'),
                position,
            })?;

            trace!("Lexed {token} at {position}");
            tokens.push(SpannedToken { token, position });
        }

        tokens.push(SpannedToken {
            token: Token::End,
            position: position + self.source[byte..].chars().count(),
        });
        Ok(tokens)
    }
}

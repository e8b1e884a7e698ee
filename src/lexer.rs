//! Path-data tokenizer
//!
//! Wraps the pest grammar in `pathdata.pest` and exposes the token stream
//! the interpreter consumes: numbers, command letters, commas and whitespace
//! runs, each with its byte span in the original "d" string. End-of-stream
//! is the exhausted stream; input no rule matches fails the lex as a whole.

use miette::SourceSpan;
use pest::Parser;
use pest_derive::Parser;

use crate::errors::{PathError, path_source};

#[derive(Parser)]
#[grammar = "pathdata.pest"]
struct PathDataParser;

/// What a token is, independent of its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Letter,
    Comma,
    Whitespace,
}

/// One token of a path "d" string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'d> {
    pub kind: TokenKind,
    pub text: &'d str,
    /// Byte offset into the source "d" string.
    pub start: usize,
}

impl Token<'_> {
    pub fn span(&self) -> SourceSpan {
        (self.start, self.text.len()).into()
    }
}

/// A fully-lexed path data string with a read cursor.
#[derive(Debug)]
pub struct TokenStream<'d> {
    source: &'d str,
    tokens: Vec<Token<'d>>,
    pos: usize,
}

impl<'d> TokenStream<'d> {
    /// Tokenize a whole "d" attribute up front.
    pub fn lex(source: &'d str) -> Result<Self, PathError> {
        let mut pairs = PathDataParser::parse(Rule::tokens, source).map_err(|e| {
            let span: SourceSpan = match e.location {
                pest::error::InputLocation::Pos(pos) => (pos, 1).into(),
                pest::error::InputLocation::Span((start, end)) => (start, end - start).into(),
            };
            PathError::InvalidToken {
                src: path_source(source),
                span,
            }
        })?;

        let mut tokens = Vec::new();
        let root = pairs.next().expect("tokens rule always yields one pair");
        for pair in root.into_inner() {
            let kind = match pair.as_rule() {
                Rule::number => TokenKind::Number,
                Rule::letter => TokenKind::Letter,
                Rule::comma => TokenKind::Comma,
                Rule::wsp => TokenKind::Whitespace,
                Rule::EOI => continue,
                other => unreachable!("unexpected token rule {other:?}"),
            };
            tokens.push(Token {
                kind,
                text: pair.as_str(),
                start: pair.as_span().start(),
            });
        }

        Ok(TokenStream {
            source,
            tokens,
            pos: 0,
        })
    }

    /// The original "d" string, for error reporting.
    pub fn source(&self) -> &'d str {
        self.source
    }

    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<Token<'d>> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume and return the next token; `None` is end-of-stream.
    pub fn next(&mut self) -> Option<Token<'d>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Consume one whitespace token if it is next.
    pub fn consume_whitespace(&mut self) {
        if matches!(self.peek(), Some(t) if t.kind == TokenKind::Whitespace) {
            self.pos += 1;
        }
    }

    /// Consume one comma token if it is next.
    pub fn consume_comma(&mut self) {
        if matches!(self.peek(), Some(t) if t.kind == TokenKind::Comma) {
            self.pos += 1;
        }
    }

    /// A zero-width span at the end of the source, for end-of-stream errors.
    pub fn end_span(&self) -> SourceSpan {
        (self.source.len(), 0).into()
    }
}

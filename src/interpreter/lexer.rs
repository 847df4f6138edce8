use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::token::{Coordinate, Literal, ScanErrorKind, Token, TokenKind},
};

/// Turns a source string into an ordered token sequence.
///
/// The heavy lifting is done by the derived [`TokenKind`] lexer; the scanner
/// wraps it to attach lexemes, decoded literals and 1-based source
/// coordinates to each token, and to append the explicit `EOF` sentinel the
/// parser relies on.
///
/// Scanning halts on the first lexical error (an unrecognized character or
/// an unterminated string), reported with the coordinate rules of the
/// diagnostics: the offending character's own position for the former, the
/// scanner's current position for the latter.
///
/// # Example
/// ```
/// use loxley::interpreter::{lexer::Scanner, token::TokenKind};
///
/// let tokens = Scanner::new("print 1;").scan_tokens().unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Print,
///                 TokenKind::Number,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source:      &'a str,
    line_starts: Vec<usize>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over a source string.
    ///
    /// Line starts are indexed up front so that token spans can be mapped to
    /// `(line, offset)` coordinates without rescanning the input.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (index, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(index + 1);
            }
        }
        Self { source,
               line_starts }
    }

    /// Scans the whole source into tokens.
    ///
    /// The returned sequence preserves source order and always ends with a
    /// single `EOF` token positioned just past the last character; an empty
    /// source yields only the `EOF`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the source contains a character that
    /// starts no token, a string literal that is never closed, or a numeric
    /// literal that cannot be decoded.
    pub fn scan_tokens(&self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut lexer = TokenKind::lexer(self.source);

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            match result {
                Ok(kind) => {
                    let coordinate = self.coordinate_at(span.start);
                    let lexeme = self.source[span].to_string();
                    let literal = decode_literal(kind, &lexeme, coordinate)?;
                    tokens.push(Token::new(kind, lexeme, literal, coordinate));
                },
                Err(ScanErrorKind::UnexpectedCharacter) => {
                    return Err(ParseError::UnexpectedCharacter {
                        found: self.source[span.start..].chars().next().unwrap_or_default(),
                        coordinate: self.coordinate_at(span.start),
                    });
                },
                Err(ScanErrorKind::UnterminatedString) => {
                    return Err(ParseError::UnterminatedString {
                        coordinate: self.coordinate_at(span.end),
                    });
                },
            }
        }

        tokens.push(Token::new(TokenKind::Eof,
                               String::new(),
                               None,
                               self.coordinate_at(self.source.len())));
        Ok(tokens)
    }

    /// Maps a byte position in the source to a 1-based `(line, offset)`
    /// coordinate, with the offset counted in characters.
    fn coordinate_at(&self, position: usize) -> Coordinate {
        let line = self.line_starts
                       .partition_point(|&start| start <= position);
        let line_start = self.line_starts[line - 1];
        let offset = self.source[line_start..position].chars().count() + 1;
        Coordinate::new(line, offset)
    }
}

/// Decodes the literal slot for a freshly matched token.
///
/// Number lexemes are parsed as IEEE-754 doubles, string lexemes are
/// stripped of their delimiting quotes, and the boolean keywords carry their
/// value. Every other kind leaves the slot empty.
fn decode_literal(kind: TokenKind,
                  lexeme: &str,
                  coordinate: Coordinate)
                  -> Result<Option<Literal>, ParseError> {
    match kind {
        TokenKind::Number => {
            let value = lexeme.parse()
                              .map_err(|_| ParseError::InvalidNumber { coordinate })?;
            Ok(Some(Literal::Number(value)))
        },
        TokenKind::String => Ok(Some(Literal::String(lexeme[1..lexeme.len() - 1].to_string()))),
        TokenKind::True => Ok(Some(Literal::Boolean(true))),
        TokenKind::False => Ok(Some(Literal::Boolean(false))),
        _ => Ok(None),
    }
}

use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_equality, statement::parse_declaration},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// This is the entry point for parsing. It repeatedly parses declarations
/// until the `EOF` sentinel, collecting every diagnostic instead of
/// stopping at the first one: after an error the token stream is
/// synchronized to the next statement boundary and parsing resumes. The
/// entire input is always consumed.
///
/// Grammar: `program := declaration* EOF`
///
/// # Parameters
/// - `tokens`: Token iterator over a scanner-produced sequence, which ends
///   with `EOF`.
///
/// # Returns
/// The parsed statements in program order.
///
/// # Errors
/// Every diagnostic recorded along the way, in source order. The result is
/// `Ok` only when zero diagnostics were recorded.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> Result<Vec<Stmt>, Vec<ParseError>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while let Some(token) = tokens.peek() {
        if token.kind == TokenKind::Eof {
            break;
        }
        match parse_declaration(tokens) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(tokens);
            },
        }
    }

    if errors.is_empty() {
        Ok(statements)
    } else {
        Err(errors)
    }
}

/// Parses a full expression.
///
/// This begins at the lowest-precedence level, equality, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := equality`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_equality(tokens)
}

/// Advances the token stream to the next statement boundary.
///
/// Called after a parse error so that subsequent statements can be parsed
/// independently. Tokens are discarded until either a `SEMICOLON` has just
/// been consumed or the next token can begin a declaration or statement.
/// The `EOF` sentinel is never consumed.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.peek() {
        match token.kind {
            TokenKind::Eof
            | TokenKind::Class
            | TokenKind::Fun
            | TokenKind::Var
            | TokenKind::For
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Print
            | TokenKind::Return => return,
            TokenKind::Semicolon => {
                tokens.next();
                return;
            },
            _ => {
                tokens.next();
            },
        }
    }
}

/// Consumes the next token, requiring it to be of the given kind.
///
/// The offending token is consumed either way; on a mismatch its coordinate
/// is what the diagnostic points at.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to check.
/// - `expected`: The kind that must come next.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// - `ExpectedToken` when a token of a different kind is found.
/// - `UnexpectedEndOfInput` when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == expected => Ok(token),
        Some(token) => Err(ParseError::ExpectedToken { expected,
                                                       coordinate: token.coordinate, }),
        None => Err(ParseError::UnexpectedEndOfInput { coordinate: None }),
    }
}

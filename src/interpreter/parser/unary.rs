use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, expect, parse_expression},
        token::{Token, TokenKind},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `!` (logical
/// not). Unary operators are right-associative, so an input like `!-x` is
/// parsed as `!(-x)`.
///
/// If no prefix operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::Minus | TokenKind::Bang)
    {
        let op = (*token).clone();
        tokens.next();

        let operand = parse_unary(tokens)?;
        return Ok(Expr::Unary { op,
                                operand: Box::new(operand) });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric, string, boolean and `nil` literals
/// - variable references
/// - parenthesized expressions
///
/// Reserved words that the lexer recognizes but the grammar does not accept
/// (`while`, `class`, ...) land here and are reported as unexpected tokens,
/// as does a stray `!=` in prefix position.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "nil"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { coordinate: None });
    };

    match token.kind {
        TokenKind::Number
        | TokenKind::String
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Nil => Ok(Expr::Literal { token: token.clone(), }),

        TokenKind::Identifier => Ok(Expr::Variable { name: token.clone(), }),

        TokenKind::LeftParen => {
            let inner = parse_expression(tokens)?;
            expect(tokens, TokenKind::RightParen)?;
            Ok(Expr::Grouping { inner: Box::new(inner), })
        },

        TokenKind::Eof => {
            Err(ParseError::UnexpectedEndOfInput { coordinate: Some(token.coordinate), })
        },

        _ => Err(ParseError::UnexpectedToken { lexeme:     token.lexeme.clone(),
                                               coordinate: token.coordinate, }),
    }
}

use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary},
        token::{Token, TokenKind},
    },
};

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`; `a == b != c` parses
/// as `(a == b) != c`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Binary`] tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::EqualEqual | TokenKind::BangEqual)
        {
            let op = (*token).clone();
            tokens.next();

            let right = parse_comparison(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles left-associative chains of `<`, `<=`, `>` and `>=`.
///
/// Grammar: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining term-level nodes.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind,
                       TokenKind::Less
                       | TokenKind::LessEqual
                       | TokenKind::Greater
                       | TokenKind::GreaterEqual)
        {
            let op = (*token).clone();
            tokens.next();

            let right = parse_term(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators `+` and `-`; `a - b - c`
/// parses as `(a - b) - c`.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Plus | TokenKind::Minus)
        {
            let op = (*token).clone();
            tokens.next();

            let right = parse_factor(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators `*` and `/`.
///
/// Grammar: `factor := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Star | TokenKind::Slash)
        {
            let op = (*token).clone();
            tokens.next();

            let right = parse_unary(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

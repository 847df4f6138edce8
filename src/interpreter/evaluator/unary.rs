use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a unary operation.
    ///
    /// The operand is evaluated before the operator applies:
    ///
    /// - `-` requires a number and negates it.
    /// - `!` applies the truthiness rule and inverts it; it accepts any
    ///   value.
    ///
    /// # Parameters
    /// - `op`: The operator token; the diagnostic coordinate on failure.
    /// - `operand`: The operand expression.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// `ExpectedNumber` at the operator when negation is applied to a
    /// non-number.
    pub(in crate::interpreter::evaluator) fn eval_unary(&mut self,
                                                        op: &Token,
                                                        operand: &Expr)
                                                        -> EvalResult<Value> {
        let value = self.eval(operand)?;

        match op.kind {
            TokenKind::Minus => Ok(Value::Number(-value.as_number(op)?)),
            TokenKind::Bang => Ok(Value::Boolean(!value.is_truthy())),
            _ => Err(RuntimeError::UnsupportedOperator { operator:   op.lexeme.clone(),
                                                         coordinate: op.coordinate, }),
        }
    }
}

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
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated first, left before right, then the
    /// operator is applied:
    ///
    /// - `+` concatenates when either operand is a string, coercing the
    ///   other to its printed form; otherwise both must be numbers.
    /// - `-`, `*`, `/` and the four comparisons require two numbers.
    ///   Division by zero follows IEEE-754 and produces an infinity or NaN
    ///   rather than an error.
    /// - `==` and `!=` are structural: values of different variants compare
    ///   unequal, and no operand check applies.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator token; the diagnostic coordinate on failure.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// `ExpectedNumber` at the operator when an arithmetic or comparison
    /// operand is not a usable number.
    pub(in crate::interpreter::evaluator) fn eval_binary(&mut self,
                                                         left: &Expr,
                                                         op: &Token,
                                                         right: &Expr)
                                                         -> EvalResult<Value> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;

        match op.kind {
            TokenKind::Plus => {
                if lhs.is_string() || rhs.is_string() {
                    return Ok(Value::String(format!("{lhs}{rhs}")));
                }
                Ok(Value::Number(lhs.as_number(op)? + rhs.as_number(op)?))
            },
            TokenKind::Minus => Ok(Value::Number(lhs.as_number(op)? - rhs.as_number(op)?)),
            TokenKind::Star => Ok(Value::Number(lhs.as_number(op)? * rhs.as_number(op)?)),
            TokenKind::Slash => Ok(Value::Number(lhs.as_number(op)? / rhs.as_number(op)?)),

            TokenKind::Greater => Ok(Value::Boolean(lhs.as_number(op)? > rhs.as_number(op)?)),
            TokenKind::GreaterEqual => {
                Ok(Value::Boolean(lhs.as_number(op)? >= rhs.as_number(op)?))
            },
            TokenKind::Less => Ok(Value::Boolean(lhs.as_number(op)? < rhs.as_number(op)?)),
            TokenKind::LessEqual => Ok(Value::Boolean(lhs.as_number(op)? <= rhs.as_number(op)?)),

            TokenKind::EqualEqual => Ok(Value::Boolean(lhs == rhs)),
            TokenKind::BangEqual => Ok(Value::Boolean(lhs != rhs)),

            _ => Err(RuntimeError::UnsupportedOperator { operator:   op.lexeme.clone(),
                                                         coordinate: op.coordinate, }),
        }
    }
}

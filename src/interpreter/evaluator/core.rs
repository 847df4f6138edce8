use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{environment::Environment, token::Token, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks parsed statements and executes them.
///
/// The interpreter owns the global variable environment and the sink that
/// `print` writes to. Handing it a `Vec<u8>` captures output for tests; the
/// crate's `run` entry point hands it a locked stdout.
///
/// ## Example
/// ```
/// use loxley::interpreter::{
///     evaluator::core::Interpreter, lexer::Scanner, parser::core::parse_program,
/// };
///
/// let tokens = Scanner::new("var x = 2; print x * 3;").scan_tokens()
///                                                     .unwrap();
/// let statements = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// let mut output: Vec<u8> = Vec::new();
/// Interpreter::new(&mut output).run(&statements).unwrap();
///
/// assert_eq!(output, b"6\n");
/// ```
pub struct Interpreter<W: Write> {
    environment: Environment,
    output:      W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with a fresh, empty environment writing to
    /// the given sink.
    pub fn new(output: W) -> Self {
        Self { environment: Environment::new(),
               output }
    }

    /// Executes a list of statements in program order.
    ///
    /// Execution halts at the first failing statement; side effects that
    /// preceded the failure (printed lines, declared variables) remain
    /// observable.
    ///
    /// # Parameters
    /// - `statements`: The parsed program.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a statement.
    pub fn run(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// - Expression statements evaluate and discard.
    /// - `print` evaluates and writes the printed form plus a newline.
    /// - `var` evaluates the initializer (or `nil` when absent) and binds
    ///   it, overwriting any prior binding of the name.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the contained
    /// expressions, or a wrapped host error when the output sink fails.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr } => {
                self.eval(expr)?;
                Ok(())
            },
            Stmt::Print { expr } => {
                let value = self.eval(expr)?;
                writeln!(self.output, "{value}").map_err(|error| RuntimeError::Host {
                    details: error.to_string(),
                    coordinate: *expr.coordinate(),
                })
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.environment.declare(&name.lexeme, value);
                Ok(())
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant; within a binary
    /// node the left operand is evaluated before the right, and a unary
    /// operand before its operator applies.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// A `RuntimeError` pointing at the token of the offending node.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { token } => Ok(Self::eval_literal(token)),
            Expr::Grouping { inner } => self.eval(inner),
            Expr::Unary { op, operand } => self.eval_unary(op, operand),
            Expr::Binary { left, op, right } => self.eval_binary(left, op, right),
            Expr::Variable { name } => self.eval_variable(name),
        }
    }

    /// Evaluates a literal expression from its token's literal slot.
    ///
    /// Tokens without a decoded literal are the `nil` keyword, which stands
    /// for [`Value::Nil`]. Literals never produce errors.
    fn eval_literal(token: &Token) -> Value {
        match &token.literal {
            Some(literal) => literal.into(),
            None => Value::Nil,
        }
    }

    /// Looks up a variable by name.
    ///
    /// # Parameters
    /// - `name`: The `IDENTIFIER` token of the variable use.
    ///
    /// # Errors
    /// `UndefinedVariable` at the name token when no binding exists.
    fn eval_variable(&self, name: &Token) -> EvalResult<Value> {
        match self.environment.get(&name.lexeme) {
            Some(value) => Ok(value.clone()),
            None => Err(RuntimeError::UndefinedVariable { name:       name.lexeme.clone(),
                                                          coordinate: name.coordinate, }),
        }
    }
}

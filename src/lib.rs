//! # loxley
//!
//! loxley is a tree-walking interpreter for a small dynamically-typed
//! scripting language in the Lox family. A program is a sequence of
//! statements; running it produces printed output and variable bindings,
//! or halts with a compile-time or run-time diagnostic carrying source
//! coordinates.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::interpreter::{evaluator::core::Interpreter, lexer::Scanner, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the responsible token on every node that can fail at runtime,
///   so diagnostics carry source coordinates.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// parsing, or evaluating code. It standardizes error reporting and carries
/// detailed information about failures, including messages and source
/// coordinates.
///
/// # Responsibilities
/// - Defines error enums for both phases (compile-time, run-time).
/// - Attaches coordinates and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the variable environment to provide a complete
/// runtime for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// How a `run` invocation ended.
///
/// Callers map the status to a process exit code via [`ExitStatus::code`]:
/// `0` for success, `65` for a compile-time diagnostic (lexical or
/// syntactic), `70` for a runtime diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The program ran to completion.
    Ok,
    /// Scanning or parsing failed; the evaluator was not invoked.
    CompileError,
    /// Evaluation halted at a failing statement.
    RuntimeError,
}

impl ExitStatus {
    /// Maps the status to its conventional process exit code.
    ///
    /// # Example
    /// ```
    /// use loxley::ExitStatus;
    ///
    /// assert_eq!(ExitStatus::Ok.code(), 0);
    /// assert_eq!(ExitStatus::CompileError.code(), 65);
    /// assert_eq!(ExitStatus::RuntimeError.code(), 70);
    /// ```
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::CompileError => 65,
            Self::RuntimeError => 70,
        }
    }
}

/// Runs a source string through the whole pipeline.
///
/// The source is scanned, parsed and evaluated in order; each phase only
/// runs when the previous one succeeded. `print` output goes to standard
/// output and diagnostics go to standard error, one per line. Parse
/// diagnostics are collected across the whole input before being reported
/// together.
///
/// # Examples
/// ```
/// use loxley::{ExitStatus, run};
///
/// assert_eq!(run("print 1 + 2 * 3;"), ExitStatus::Ok);
/// assert_eq!(run("1 + ;"), ExitStatus::CompileError);
/// assert_eq!(run("print missing;"), ExitStatus::RuntimeError);
/// ```
#[must_use]
pub fn run(source: &str) -> ExitStatus {
    let tokens = match Scanner::new(source).scan_tokens() {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{error}");
            return ExitStatus::CompileError;
        },
    };

    let statements = match parse_program(&mut tokens.iter().peekable()) {
        Ok(statements) => statements,
        Err(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
            return ExitStatus::CompileError;
        },
    };

    let mut interpreter = Interpreter::new(io::stdout().lock());
    match interpreter.run(&statements) {
        Ok(()) => ExitStatus::Ok,
        Err(error) => {
            eprintln!("{error}");
            ExitStatus::RuntimeError
        },
    }
}

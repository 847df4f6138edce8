/// Compile-time errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. This covers both the lexical phase (bad characters, unterminated
/// strings) and the syntactic phase (unexpected or missing tokens).
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables and operand type mismatches. Each carries the source
/// coordinate of the token held responsible.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic with string
/// concatenation on `+`, numeric comparisons, and structural equality.
pub mod binary;

/// Core evaluation logic and interpreter state.
///
/// Contains the statement executor, the expression dispatcher, variable
/// lookup and the output sink.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix operators: numeric negation and logical not.
pub mod unary;

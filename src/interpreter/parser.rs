/// Binary operator parsing.
///
/// Implements the four left-associative precedence tiers: equality,
/// comparison, term and factor.
pub mod binary;

/// Core parsing logic.
///
/// Contains the program-level driver with diagnostic collection and
/// synchronization, the expression entry point, and shared helpers.
pub mod core;

/// Statement parsing.
///
/// Handles declarations, `print` statements and expression statements.
pub mod statement;

/// Unary and primary parsing.
///
/// Implements the right-recursive prefix operators and the atoms of the
/// grammar: literals, variables and parenthesized groupings.
pub mod unary;

/// The environment module stores variable bindings.
///
/// A single flat mapping from variable names to runtime values, created
/// when the evaluator starts and dropped when it returns.
///
/// # Responsibilities
/// - Associates names with values, overwriting on redeclaration.
/// - Resolves variable reads, reporting absence to the evaluator.
pub mod environment;

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// writes `print` output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Enforces runtime type rules over the parser's AST.
/// - Reports runtime errors such as undefined variables or non-numeric
///   operands.
pub mod evaluator;

/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces a stream of tokens,
/// each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   decoded literal and source coordinate.
/// - Appends the `EOF` sentinel the parser relies on.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of
/// expressions and statements. This enables the evaluator to execute user
/// code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, collecting every error with location
///   info rather than stopping at the first.
/// - Synchronizes to statement boundaries after an error.
pub mod parser;

/// The token module defines the lexical vocabulary.
///
/// Declares the closed set of token kinds (with the `logos`-derived
/// recognition rules attached), the decoded literal slot, source
/// coordinates and the token value type itself.
///
/// # Responsibilities
/// - Defines `TokenKind`, `Token`, `Literal` and `Coordinate`.
/// - Carries the lexer's pattern table on the kind enumeration.
pub mod token;

/// The value module defines the runtime data types for evaluation.
///
/// Declares the dynamically-typed `Value` union used during execution:
/// numbers, strings, booleans and `nil`, with methods for type checking,
/// truthiness and printing.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements the checked numeric accessor operators rely on.
/// - Provides the printed form used by `print` and concatenation.
pub mod value;

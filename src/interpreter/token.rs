use logos::Logos;

/// Classifies a failed match inside the derived lexer.
///
/// The variants carry no position of their own; the [`Scanner`] that drives
/// the lexer attaches a [`Coordinate`] when it converts the failure into a
/// [`crate::error::ParseError`].
///
/// [`Scanner`]: crate::interpreter::lexer::Scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanErrorKind {
    /// The next character starts no token.
    #[default]
    UnexpectedCharacter,
    /// A string literal was still open when the source ran out.
    UnterminatedString,
}

/// Identifies the kind of a lexical token.
///
/// This is the closed set of token kinds the language knows about. The
/// variants are fieldless so the parser can compare kinds directly; decoded
/// payloads live in the [`Literal`] slot of [`Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = ScanErrorKind)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens; variable names such as `x` or `greeting`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens, delimited by `"`. The body may span multiple
    /// lines and backslashes have no special meaning. The callback consumes
    /// through the closing quote, or through the end of input when the
    /// closing quote is missing.
    #[token("\"", lex_string)]
    String,
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Whitespace,

    /// End of input. The derived lexer never produces this kind: the scanner
    /// appends it once the source is exhausted. The derive still needs a
    /// pattern, so it claims the NUL byte and rejects it as a plain
    /// unexpected character.
    #[token("\0", reject_nul)]
    Eof,
}

/// A literal NUL starts no token; reaching this callback is always an
/// error.
fn reject_nul(_lex: &mut logos::Lexer<'_, TokenKind>) -> Result<(), ScanErrorKind> {
    Err(ScanErrorKind::UnexpectedCharacter)
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::Whitespace => "WHITESPACE",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// Consumes a string literal body after the opening quote has matched.
///
/// Scans the remaining input for the closing `"` and bumps the lexer past
/// it, so the token slice covers the whole literal including both quotes.
/// There is no escape processing: a backslash is an ordinary character and
/// the body may contain newlines.
///
/// # Returns
/// - `Ok(())`: The literal was properly terminated.
/// - `Err(ScanErrorKind::UnterminatedString)`: The input ended first. The
///   lexer is bumped to the end of input so the reported span ends at the
///   scanner's current position.
fn lex_string(lex: &mut logos::Lexer<'_, TokenKind>) -> Result<(), ScanErrorKind> {
    let rest = lex.remainder();
    match rest.find('"') {
        Some(close) => {
            lex.bump(close + 1);
            Ok(())
        },
        None => {
            lex.bump(rest.len());
            Err(ScanErrorKind::UnterminatedString)
        },
    }
}

/// The decoded value carried by a literal token.
///
/// Only `NUMBER`, `STRING`, `TRUE` and `FALSE` tokens carry one; every other
/// kind (including `nil`, whose value is produced by the evaluator) leaves
/// the slot empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// The unquoted contents of a string literal.
    String(String),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
}

/// A 1-based source position.
///
/// `line` counts newlines from the start of the source; `offset` counts
/// characters from the start of the line. Both start at 1, and a token's
/// coordinate points at the first character of its lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    /// Logical line number in the source.
    pub line:   usize,
    /// Character offset within that line.
    pub offset: usize,
}

impl Coordinate {
    /// Creates a coordinate from a 1-based line and offset pair.
    #[must_use]
    pub const fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

impl std::fmt::Display for Coordinate {
    /// Renders the coordinate the way diagnostics embed it.
    ///
    /// # Example
    /// ```
    /// use loxley::interpreter::token::Coordinate;
    ///
    /// assert_eq!(Coordinate::new(3, 14).to_string(), "(3:14)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}:{})", self.line, self.offset)
    }
}

/// A lexical token: the smallest meaningful unit of source text.
///
/// Tokens are immutable after construction and owned by the token sequence
/// the scanner produces. The `lexeme` is the exact source substring that
/// produced the token (empty for the synthesized `EOF`), and `literal`
/// holds the decoded value for literal kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Which member of the closed kind set this token is.
    pub kind:       TokenKind,
    /// The exact source substring behind the token.
    pub lexeme:     String,
    /// The decoded literal value, where the kind carries one.
    pub literal:    Option<Literal>,
    /// Position of the lexeme's first character.
    pub coordinate: Coordinate,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind,
                     lexeme: String,
                     literal: Option<Literal>,
                     coordinate: Coordinate)
                     -> Self {
        Self { kind,
               lexeme,
               literal,
               coordinate }
    }
}

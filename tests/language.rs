use std::fs;

use loxley::{
    ExitStatus,
    ast::{Expr, Stmt},
    interpreter::{
        evaluator::core::Interpreter, lexer::Scanner, parser::core::parse_program,
        token::TokenKind,
    },
    run,
};
use walkdir::WalkDir;

/// Runs a source string through the full pipeline with a captured output
/// sink, returning either the printed output or the rendered diagnostics.
fn interpret(source: &str) -> Result<String, String> {
    let tokens = Scanner::new(source).scan_tokens()
                                     .map_err(|e| e.to_string())?;
    let statements = parse_program(&mut tokens.iter().peekable()).map_err(|errors| {
                         errors.iter()
                               .map(ToString::to_string)
                               .collect::<Vec<_>>()
                               .join("\n")
                     })?;

    let mut output: Vec<u8> = Vec::new();
    Interpreter::new(&mut output).run(&statements)
                                 .map_err(|e| e.to_string())?;

    Ok(String::from_utf8(output).expect("print output should be UTF-8"))
}

fn assert_prints(source: &str, expected: &str) {
    match interpret(source) {
        Ok(output) => assert_eq!(output, expected, "for source: {source}"),
        Err(e) => panic!("Script failed: {e}\nSource: {source}"),
    }
}

fn assert_fails_with(source: &str, fragment: &str) {
    match interpret(source) {
        Ok(output) => panic!("Script succeeded with output {output:?} but was expected to fail"),
        Err(e) => {
            assert!(e.contains(fragment),
                    "diagnostic {e:?} does not mention {fragment:?}");
        },
    }
}

#[test]
fn arithmetic_precedence() {
    assert_prints("print 1 + 2 * 3;", "7\n");
    assert_prints("print (1 + 2) * -3;", "-9\n");
    assert_prints("print 1 + 2 * 3 - 4 / 2;", "5\n");
    assert_prints("print 2 * 3 == 10 - 4;", "true\n");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_prints("print 10 - 4 - 3;", "3\n");
    assert_prints("print 8 / 2 / 2;", "2\n");
    assert_prints("print 1 == 1 == true;", "true\n");
}

#[test]
fn unary_operators_are_right_recursive() {
    assert_prints("print --5;", "5\n");
    assert_prints("print !!true;", "true\n");
    assert_prints("print !-1;", "false\n");
}

#[test]
fn precedence_is_reflected_in_the_tree() {
    let tokens = Scanner::new("1 + 2 * 3;").scan_tokens().unwrap();
    let statements = parse_program(&mut tokens.iter().peekable()).unwrap();

    let [Stmt::Expression { expr: Expr::Binary { left, op, right } }] = statements.as_slice()
    else {
        panic!("expected a single expression statement");
    };

    assert_eq!(op.kind, TokenKind::Plus);
    assert!(matches!(**left, Expr::Literal { .. }));
    assert!(matches!(**right,
                     Expr::Binary { ref op, .. } if op.kind == TokenKind::Star));
}

#[test]
fn string_concatenation() {
    assert_prints("var a = \"Jake\";\nprint \"a = \" + a;", "a = Jake\n");
    assert_prints("print \"one\" + 1;", "one1\n");
    assert_prints("print 1 + \"one\";", "1one\n");
    assert_prints("print \"is \" + true;", "is true\n");
    assert_prints("var u; print \"u = \" + u;", "u = nil\n");
}

#[test]
fn equality_is_structural() {
    assert_prints("print \"ab\" == \"a\" + \"b\";", "true\n");
    assert_prints("print 1 == \"1\";", "false\n");
    assert_prints("print nil == false;", "false\n");
    assert_prints("print nil == nil;", "true\n");
    assert_prints("print 1 != 2;", "true\n");
    assert_prints("print true == true;", "true\n");
}

#[test]
fn truthiness() {
    assert_prints("print !nil;", "true\n");
    assert_prints("print !false;", "true\n");
    assert_prints("print !0;", "false\n");
    assert_prints("print !\"\";", "false\n");
}

#[test]
fn variable_declarations() {
    assert_prints("var a; print a;", "nil\n");
    assert_prints("var a = 1; var a = 2; print a;", "2\n");
    assert_prints("var a = 2; var b = a * a; print b;", "4\n");
}

#[test]
fn number_literals() {
    assert_prints("print .5;", "0.5\n");
    assert_prints("print 0.001;", "0.001\n");
    assert_prints("print 100;", "100\n");
    assert_prints("print 0.1;", "0.1\n");
}

#[test]
fn printed_numbers_rescan_to_the_same_value() {
    for source in ["print 0.1;", "print 1 / 3;", "print 12345.6789;"] {
        let printed = interpret(source).unwrap();
        let reparsed: f64 = printed.trim().parse().unwrap();
        let original = interpret(&format!("print ({});", printed.trim())).unwrap();
        assert_eq!(original.trim().parse::<f64>().unwrap(), reparsed);
    }
}

#[test]
fn print_accepts_a_parenthesized_expression() {
    assert_prints("print (1);", "1\n");
    assert_prints("print(1);", "1\n");
}

#[test]
fn division_follows_ieee_754() {
    assert_prints("print 1 / 0;", "inf\n");
    assert_prints("print -1 / 0;", "-inf\n");
    assert_prints("print 0 / 0;", "NaN\n");
}

#[test]
fn nan_operands_are_rejected() {
    assert_fails_with("var x = 0 / 0; print x + 1;",
                      "Expected number operand for '+'");
    assert_fails_with("var x = 0 / 0; print x < 1;",
                      "Expected number operand for '<'");
}

#[test]
fn operand_type_errors_point_at_the_operator() {
    assert_fails_with("print 1 < \"2\";", "Expected number operand for '<' at (1:9)");
    assert_fails_with("print -\"a\";", "Expected number operand for '-' at (1:7)");
    assert_fails_with("print 1 - nil;", "Expected number operand for '-' at (1:9)");
}

#[test]
fn undefined_variable_diagnostic() {
    assert_fails_with("print a;", "Undefined variable 'a' at (1:7)");
    assert_fails_with("var a = 1;\nprint b;", "Undefined variable 'b' at (2:7)");
}

#[test]
fn side_effects_before_a_failure_remain_observable() {
    let tokens = Scanner::new("print 1; print missing;").scan_tokens().unwrap();
    let statements = parse_program(&mut tokens.iter().peekable()).unwrap();

    let mut output: Vec<u8> = Vec::new();
    let result = Interpreter::new(&mut output).run(&statements);

    assert!(result.is_err());
    assert_eq!(output, b"1\n");
}

#[test]
fn parse_errors() {
    assert_fails_with("1 + ;", "Unexpected token ';' at (1:5)");
    assert_fails_with("print 1", "Expected token: SEMICOLON at (1:8)");
    assert_fails_with("var while = 1;", "Expected token: IDENTIFIER at (1:5)");
    assert_fails_with("print while;", "Unexpected token 'while'");
    assert_fails_with("print != 1;", "Unexpected token '!='");
    assert_fails_with("(1 + 2;", "Expected token: RIGHT_PAREN at (1:7)");
    assert_fails_with("1 +", "Unexpected end of input at (1:4)");
}

#[test]
fn parser_collects_every_diagnostic() {
    let tokens = Scanner::new("1 + ;\nprint );\nprint 2;").scan_tokens().unwrap();
    let errors = parse_program(&mut tokens.iter().peekable()).unwrap_err();

    assert_eq!(errors.len(), 2);
}

#[test]
fn scanner_diagnostics() {
    assert_fails_with("\"unterminated", "Unterminated string at (1:14)");
    assert_fails_with("@", "Unexpected character '@' at (1:1)");
    assert_fails_with("print 1; #", "Unexpected character '#' at (1:10)");
}

#[test]
fn strings_may_span_lines() {
    assert_prints("print \"a\nb\";", "a\nb\n");
    assert_fails_with("var s = \"a\nb\"; print z;", "Undefined variable 'z' at (2:11)");
}

#[test]
fn comments_are_skipped() {
    assert_prints("print 1; // trailing comment\n// whole-line comment\nprint 2;",
                  "1\n2\n");
    assert_prints("// nothing but a comment", "");
}

#[test]
fn token_sequence_always_ends_with_eof() {
    let tokens = Scanner::new("").scan_tokens().unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].lexeme, "");
    assert_eq!((tokens[0].coordinate.line, tokens[0].coordinate.offset), (1, 1));

    let tokens = Scanner::new("var x = 1;").scan_tokens().unwrap();
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
}

#[test]
fn token_coordinates_are_one_based_and_in_range() {
    let source = "var a = 1;\nprint a + 2;\n";
    let tokens = Scanner::new(source).scan_tokens().unwrap();
    let line_count = source.lines().count();

    for token in &tokens {
        assert!(token.coordinate.line >= 1);
        assert!(token.coordinate.offset >= 1);
        assert!(token.coordinate.line <= line_count + 1);
    }

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Var,
                    TokenKind::Identifier,
                    TokenKind::Equal,
                    TokenKind::Number,
                    TokenKind::Semicolon,
                    TokenKind::Print,
                    TokenKind::Identifier,
                    TokenKind::Plus,
                    TokenKind::Number,
                    TokenKind::Semicolon,
                    TokenKind::Eof]);

    let plus = tokens.iter().find(|t| t.kind == TokenKind::Plus).unwrap();
    assert_eq!((plus.coordinate.line, plus.coordinate.offset), (2, 9));
}

#[test]
fn two_char_operators_win_over_their_prefixes() {
    let tokens = Scanner::new("! != = == < <= > >=").scan_tokens().unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Bang,
                    TokenKind::BangEqual,
                    TokenKind::Equal,
                    TokenKind::EqualEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Eof]);
}

#[test]
fn reserved_words_are_exact_matches() {
    let tokens = Scanner::new("var variable not printed").scan_tokens().unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Var,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Eof]);
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    let tokens = Scanner::new("42.").scan_tokens().unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn run_reports_exit_statuses() {
    assert_eq!(run("var ok = 1;"), ExitStatus::Ok);
    assert_eq!(run("1 + ;"), ExitStatus::CompileError);
    assert_eq!(run("\"unterminated"), ExitStatus::CompileError);
    assert_eq!(run("print missing;"), ExitStatus::RuntimeError);

    assert_eq!(ExitStatus::Ok.code(), 0);
    assert_eq!(ExitStatus::CompileError.code(), 65);
    assert_eq!(ExitStatus::RuntimeError.code(), 70);
}

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "lox")
                                      })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        if let Err(e) = interpret(&source) {
            panic!("Demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

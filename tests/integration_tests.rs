//! Integration tests for the scan-then-parse pipeline.
//!
//! These tests drive the public API end-to-end: source text through the
//! lexer, token stream through the parser, and trees through the printer.

use lox::{
    ast::printer::{print_expr, print_stmt},
    lexer::lexer::tokenize,
    parser::parser::Parser,
};

#[test]
fn test_parse_single_expression_end_to_end() {
    let tokens = tokenize("(1 + 2) * 3 == 9".to_string()).unwrap();
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expression().unwrap();

    assert_eq!(print_expr(&expr), "(== (* (group (+ 1 2)) 3) 9)");
    assert!(!parser.had_error());
}

#[test]
fn test_parse_program_end_to_end() {
    let source = "var answer = 6 * 7;\nprint 6 * 7 == 42;\n;";
    let tokens = tokenize(source.to_string()).unwrap();
    let mut parser = Parser::new(tokens);
    let statements = parser.parse();

    assert!(!parser.had_error());

    let printed: Vec<String> = statements.iter().map(print_stmt).collect();
    assert_eq!(
        printed,
        vec!["(var answer = (* 6 7))", "(print (== (* 6 7) 42))", "(;)"]
    );
}

#[test]
fn test_scanner_error_surfaces_before_parsing() {
    let result = tokenize("var a = #;".to_string());

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_stage(), "scanner");
}

#[test]
fn test_parser_reports_each_bad_statement_once() {
    let source = "print 1;\nvar = 2;\nprint 3;";
    let tokens = tokenize(source.to_string()).unwrap();
    let mut parser = Parser::new(tokens);
    let statements = parser.parse();

    assert_eq!(parser.error_count(), 1);
    assert_eq!(parser.errors()[0].get_line(), 2);
    assert_eq!(statements.len(), 2);
}

#[test]
fn test_fresh_parser_per_input() {
    let mut first = Parser::new(tokenize("1+".to_string()).unwrap());
    assert!(first.parse_expression().is_none());
    assert_eq!(first.error_count(), 1);

    // A new parser carries none of the previous input's state.
    let mut second = Parser::new(tokenize("1+2".to_string()).unwrap());
    let expr = second.parse_expression().unwrap();
    assert_eq!(print_expr(&expr), "(+ 1 2)");
    assert_eq!(second.error_count(), 0);
}

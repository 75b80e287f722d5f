use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::exit,
};

use lox::{ast::printer::print_stmt, lexer::lexer::tokenize, parser::parser::Parser};

const NO_ERROR: i32 = 0;
const BAD_USAGE: i32 = 1;
const INVALID_FILE: i32 = 2;
const SCANNER_ERROR: i32 = 3;
const PARSER_ERROR: i32 = 4;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 => exit(run_file(&args[1])),
        _ => {
            eprintln!("Usage: lox [file]");
            exit(BAD_USAGE);
        }
    }
}

fn run_file(file_path: &str) -> i32 {
    match read_to_string(file_path) {
        Ok(source) => run(source),
        Err(error) => {
            eprintln!("{}: {}", file_path, error);
            INVALID_FILE
        }
    }
}

fn run_prompt() {
    let stdin = io::stdin();

    print_prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        // Prompt errors are reported and forgotten; the next line starts
        // with a fresh parser.
        run(line);
        print_prompt();
    }
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

/// Scans and parses one source string. With no evaluator in the crate,
/// the parsed statements are printed in parenthesized form.
fn run(source: String) -> i32 {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", error.report());
            return SCANNER_ERROR;
        }
    };

    let mut parser = Parser::new(tokens);
    let statements = parser.parse();

    if parser.had_error() {
        return PARSER_ERROR;
    }

    for statement in &statements {
        println!("{}", print_stmt(statement));
    }

    NO_ERROR
}

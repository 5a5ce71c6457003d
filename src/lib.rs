//! # mython
//!
//! mython is a tree-walking interpreter for Mython, a small dynamically
//! typed, indentation-structured, class-based scripting language. It
//! supports integer and string literals, the singletons `True`, `False` and
//! `None`, classes with single inheritance and the special methods
//! `__init__`, `__str__`, `__eq__`, `__lt__` and `__add__`, arithmetic and
//! comparison operators, boolean connectives, `print`, `return`, and
//! `if`/`else`.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::core::Context,
    lexer::Lexer,
    parser::core::parse_program,
    value::core::Closure,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Carries resolved class references for instance creation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// building blocks behind the crate's entry points.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides the pieces for interpreting and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a Mython program, writing its output to the given sink.
///
/// The source is tokenized and parsed eagerly, then executed against a
/// fresh root closure. A `return` at the top level stops the program.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use mython::run;
///
/// let mut output: Vec<u8> = Vec::new();
/// run("x = 1\nprint x\n", &mut output).unwrap();
/// assert_eq!(output, b"1\n");
///
/// // An undefined name is a runtime error.
/// assert!(run("print y\n", &mut Vec::<u8>::new()).is_err());
/// ```
pub fn run(source: &str, output: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let lexer = Lexer::new(source)?;
    let program = parse_program(lexer)?;

    let mut context = Context::new(output);
    let mut globals = Closure::new();
    context.exec(&program, &mut globals)?;

    Ok(())
}

/// Runs a Mython program and returns its output as a string.
///
/// Convenience wrapper around [`run`] for hosts and tests that want the
/// output buffered rather than streamed.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails, or if the
/// program printed bytes that are not valid UTF-8.
///
/// # Examples
/// ```
/// use mython::run_to_string;
///
/// let source = "class Greeter:\n  def hello(self):\n    return 'hi'\ng = Greeter()\nprint g.hello()\n";
/// assert_eq!(run_to_string(source).unwrap(), "hi\n");
/// ```
pub fn run_to_string(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    run(source, &mut output)?;

    Ok(String::from_utf8(output)?)
}

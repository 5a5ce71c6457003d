/// Class and suite parsing.
///
/// Handles class definitions with their method tables, method signatures,
/// `if`/`else` statements, and the two suite forms (inline and indented).
pub mod block;

/// Core parsing state and the program entry point.
///
/// Defines the parser state (token stream plus the table of declared
/// classes) and parses whole programs.
pub mod core;

/// Expression parsing.
///
/// Implements the precedence chain from the logical connectives down to
/// primaries, dotted paths, instance creation and method calls.
pub mod expression;

/// Statement parsing.
///
/// Parses the simple statements (`print`, `return`, assignments, bare
/// expressions) and dispatches to class and `if` parsing.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides token stream helpers, shared error construction, and list
/// parsing used across the parser modules.
pub mod utils;

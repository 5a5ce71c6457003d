use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::statement::parse_statement,
        value::class::Class,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser state: the token stream plus the classes declared so far.
///
/// Classes are resolved while parsing, so `NewInstance` nodes and parent
/// references carry direct references to the class they name; using a class
/// before its definition is a parse error.
pub struct Parser {
    pub(crate) lexer:   Lexer,
    pub(crate) classes: HashMap<String, Rc<Class>>,
}

impl Parser {
    /// Creates a parser over a finished token stream.
    #[must_use]
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer,
               classes: HashMap::new() }
    }
}

/// Parses a whole program into a single compound statement.
///
/// Statements follow each other directly: the lexer guarantees exactly one
/// `Newline` between them and each statement form consumes its own
/// terminator.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
pub fn parse_program(lexer: Lexer) -> ParseResult<Statement> {
    let mut parser = Parser::new(lexer);
    let mut statements = Vec::new();

    while *parser.lexer.current() != Token::Eof {
        statements.push(parse_statement(&mut parser)?);
    }

    Ok(Statement::Compound { statements })
}

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            expression::parse_expression,
        },
    },
};

impl Parser {
    /// Returns the token at the current position.
    pub(crate) fn current(&self) -> &Token {
        self.lexer.current()
    }

    /// Returns the source line of the current token.
    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Moves past the current token.
    pub(crate) fn advance(&mut self) {
        self.lexer.advance();
    }

    /// Consumes the current token when it equals `token`.
    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        if self.current() == token {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token when it is the character `c`.
    pub(crate) fn eat_char(&mut self, c: char) -> bool {
        self.eat(&Token::Char(c))
    }

    /// Consumes the character `c` or fails.
    pub(crate) fn expect_char(&mut self, c: char) -> ParseResult<()> {
        if self.eat_char(c) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{c}'")))
        }
    }

    /// Consumes the `Newline` terminating a statement, or fails.
    pub(crate) fn expect_newline(&mut self) -> ParseResult<()> {
        if self.eat(&Token::Newline) {
            Ok(())
        } else {
            Err(self.unexpected("end of statement"))
        }
    }

    /// Consumes an identifier and returns its name, or fails.
    pub(crate) fn expect_id(&mut self) -> ParseResult<String> {
        if let Token::Id(name) = self.current() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    /// Builds the error for an unexpected token at the current position.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        if *self.current() == Token::Eof {
            ParseError::UnexpectedEndOfInput { line: self.line() }
        } else {
            ParseError::UnexpectedToken { token: format!("Expected {expected}, found {:?}",
                                                         self.current()),
                                          line:  self.line(), }
        }
    }

    /// Parses a dotted identifier path such as `self.counter.value`.
    pub(crate) fn parse_dotted_ids(&mut self) -> ParseResult<Vec<String>> {
        let mut ids = vec![self.expect_id()?];

        while self.eat_char('.') {
            ids.push(self.expect_id()?);
        }

        Ok(ids)
    }
}

/// Parses a parenthesized, comma-separated argument list.
///
/// The current token must be `(`. An immediately following `)` produces an
/// empty list.
///
/// Grammar: `args := "(" (expression ("," expression)*)? ")"`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the parentheses are missing or unbalanced,
/// - an argument fails to parse.
pub(crate) fn parse_arguments(parser: &mut Parser) -> ParseResult<Vec<Expr>> {
    parser.expect_char('(')?;

    let mut args = Vec::new();
    if parser.eat_char(')') {
        return Ok(args);
    }

    loop {
        args.push(parse_expression(parser)?);

        if parser.eat_char(',') {
            continue;
        }
        parser.expect_char(')')?;
        break;
    }

    Ok(args)
}

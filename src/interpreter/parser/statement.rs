use crate::{
    ast::{Expr, LiteralValue, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::{parse_class_definition, parse_if},
            core::{ParseResult, Parser},
            expression::parse_expression,
        },
    },
};

/// Parses a single statement.
///
/// A statement is one of:
/// - a class definition,
/// - an `if` statement,
/// - a simple statement terminated by a newline.
///
/// Class definitions and `if` statements own their block structure and
/// consume their own terminators.
pub fn parse_statement(parser: &mut Parser) -> ParseResult<Statement> {
    match parser.current() {
        Token::Class => parse_class_definition(parser),
        Token::If => parse_if(parser),
        _ => {
            let statement = parse_simple_statement(parser)?;
            parser.expect_newline()?;
            Ok(statement)
        },
    }
}

/// Parses a simple (single-line) statement without its terminator.
///
/// Simple statements are `print`, `return`, assignments, and bare
/// expressions evaluated for their effects.
pub fn parse_simple_statement(parser: &mut Parser) -> ParseResult<Statement> {
    match parser.current() {
        Token::Print => parse_print(parser),
        Token::Return => parse_return(parser),
        Token::Id(_) => parse_assignment_or_expression(parser),
        _ => {
            let expr = parse_expression(parser)?;
            Ok(Statement::Expression { expr })
        },
    }
}

/// Parses a `print` statement with zero or more comma-separated arguments.
///
/// Grammar: `print_stmt := "print" (expression ("," expression)*)?`
fn parse_print(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.line();
    parser.advance();

    let mut args = Vec::new();
    if *parser.current() != Token::Newline {
        loop {
            args.push(parse_expression(parser)?);
            if !parser.eat_char(',') {
                break;
            }
        }
    }

    Ok(Statement::Print { args, line })
}

/// Parses a `return` statement; a bare `return` yields `None`.
///
/// Grammar: `return_stmt := "return" expression?`
fn parse_return(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.line();
    parser.advance();

    let value = if *parser.current() == Token::Newline {
        Expr::Literal { value: LiteralValue::None,
                        line }
    } else {
        parse_expression(parser)?
    };

    Ok(Statement::Return { value, line })
}

/// Parses a statement beginning with an identifier.
///
/// A dotted path followed by `=` is an assignment: to a variable for a
/// single identifier, to an instance field for a longer path. Anything else
/// backtracks and parses as an expression statement.
fn parse_assignment_or_expression(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.line();
    let checkpoint = parser.lexer.checkpoint();
    let mut ids = parser.parse_dotted_ids()?;

    if parser.eat_char('=') {
        let value = parse_expression(parser)?;

        if ids.len() == 1 {
            let var = ids.swap_remove(0);
            return Ok(Statement::Assignment { var, value, line });
        }

        let Some(field) = ids.pop() else {
            return Err(parser.unexpected("a field name"));
        };
        return Ok(Statement::FieldAssignment { object: ids,
                                               field,
                                               value,
                                               line });
    }

    parser.lexer.rewind(checkpoint);
    let expr = parse_expression(parser)?;

    Ok(Statement::Expression { expr })
}

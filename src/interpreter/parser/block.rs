use std::rc::Rc;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            expression::parse_expression,
            statement::{parse_simple_statement, parse_statement},
        },
        value::class::{Class, Method},
    },
};

/// Parses a class definition and registers the class.
///
/// Grammar:
/// `class_def := "class" Id ("(" Id ")")? ":" NEWLINE INDENT method+ DEDENT`
///
/// The optional parenthesized name is the parent class; it must already be
/// declared. The finished class is added to the parser's class table so
/// later code can instantiate and inherit from it.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the header or body structure is malformed,
/// - the parent class is not declared,
/// - two methods share a name.
pub fn parse_class_definition(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.line();
    parser.advance();

    let name = parser.expect_id()?;

    let parent = if parser.eat_char('(') {
        let parent_line = parser.line();
        let parent_name = parser.expect_id()?;
        parser.expect_char(')')?;

        match parser.classes.get(&parent_name) {
            Some(class) => Some(Rc::clone(class)),
            None => {
                return Err(ParseError::UndefinedClass { name: parent_name,
                                                        line: parent_line, });
            },
        }
    } else {
        None
    };

    parser.expect_char(':')?;
    parser.expect_newline()?;
    if !parser.eat(&Token::Indent) {
        return Err(parser.unexpected("an indented class body"));
    }

    let mut methods = Vec::new();
    while !parser.eat(&Token::Dedent) {
        methods.push(parse_method(parser)?);
    }

    let class = Class::new(name.clone(), methods, parent).map_err(|e| {
                                                             ParseError::Other { message:
                                                                                     e.to_string(),
                                                                                 line }
                                                         })?;
    let class = Rc::new(class);
    parser.classes.insert(name, Rc::clone(&class));

    Ok(Statement::ClassDefinition { class, line })
}

/// Parses a method definition inside a class body.
///
/// Grammar: `method := "def" Id "(" "self" ("," Id)* ")" ":" suite`
///
/// The leading `self` is required and excluded from the stored formal
/// parameters; the body is wrapped in a `MethodBody` so `return` is caught
/// at the method boundary.
fn parse_method(parser: &mut Parser) -> ParseResult<Method> {
    let line = parser.line();
    if !parser.eat(&Token::Def) {
        return Err(parser.unexpected("'def'"));
    }

    let name = parser.expect_id()?;
    parser.expect_char('(')?;

    let self_param = parser.expect_id()?;
    if self_param != "self" {
        return Err(ParseError::MethodWithoutSelf { name, line });
    }

    let mut formal_params = Vec::new();
    while parser.eat_char(',') {
        formal_params.push(parser.expect_id()?);
    }
    parser.expect_char(')')?;
    parser.expect_char(':')?;

    let body = parse_suite(parser)?;

    Ok(Method { name,
                formal_params,
                body: Statement::MethodBody { body: Box::new(body) } })
}

/// Parses a suite: the body of a method or an `if`/`else` branch.
///
/// Grammar: `suite := simple_stmt NEWLINE | NEWLINE INDENT statement+ DEDENT`
///
/// The inline form allows exactly one simple statement on the header line.
pub fn parse_suite(parser: &mut Parser) -> ParseResult<Statement> {
    if parser.eat(&Token::Newline) {
        if !parser.eat(&Token::Indent) {
            return Err(parser.unexpected("an indented block"));
        }

        let mut statements = Vec::new();
        while !parser.eat(&Token::Dedent) {
            statements.push(parse_statement(parser)?);
        }

        return Ok(Statement::Compound { statements });
    }

    let statement = parse_simple_statement(parser)?;
    parser.expect_newline()?;
    Ok(statement)
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Grammar: `if_stmt := "if" expression ":" suite ("else" ":" suite)?`
pub fn parse_if(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.line();
    parser.advance();

    let condition = parse_expression(parser)?;
    parser.expect_char(':')?;
    let then_branch = Box::new(parse_suite(parser)?);

    let else_branch = if parser.eat(&Token::Else) {
        parser.expect_char(':')?;
        Some(Box::new(parse_suite(parser)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

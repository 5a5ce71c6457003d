use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Comparator, Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            utils::parse_arguments,
        },
    },
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression(parser: &mut Parser) -> ParseResult<Expr> {
    parse_or(parser)
}

/// Parses a chain of `or` connectives.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
fn parse_or(parser: &mut Parser) -> ParseResult<Expr> {
    let mut left = parse_and(parser)?;

    while *parser.current() == Token::Or {
        let line = parser.line();
        parser.advance();
        let right = parse_and(parser)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::Or,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses a chain of `and` connectives.
///
/// Grammar: `logical_and := negation ("and" negation)*`
fn parse_and(parser: &mut Parser) -> ParseResult<Expr> {
    let mut left = parse_not(parser)?;

    while *parser.current() == Token::And {
        let line = parser.line();
        parser.advance();
        let right = parse_not(parser)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::And,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses an optional prefix `not`.
///
/// Grammar: `negation := "not" negation | comparison`
fn parse_not(parser: &mut Parser) -> ParseResult<Expr> {
    if *parser.current() == Token::Not {
        let line = parser.line();
        parser.advance();
        let expr = parse_not(parser)?;

        return Ok(Expr::Not { expr: Box::new(expr),
                              line });
    }

    parse_comparison(parser)
}

/// Parses an optional, non-associative comparison.
///
/// Grammar: `comparison := additive (cmp_op additive)?`
fn parse_comparison(parser: &mut Parser) -> ParseResult<Expr> {
    let left = parse_additive(parser)?;

    let cmp = match parser.current() {
        Token::Eq => Comparator::Equal,
        Token::NotEq => Comparator::NotEqual,
        Token::LessOrEq => Comparator::LessOrEqual,
        Token::GreaterOrEq => Comparator::GreaterOrEqual,
        Token::Char('<') => Comparator::Less,
        Token::Char('>') => Comparator::Greater,
        _ => return Ok(left),
    };

    let line = parser.line();
    parser.advance();
    let right = parse_additive(parser)?;

    Ok(Expr::Comparison { cmp,
                          left: Box::new(left),
                          right: Box::new(right),
                          line })
}

/// Parses a chain of additions and subtractions.
///
/// Grammar: `additive := term (("+" | "-") term)*`
fn parse_additive(parser: &mut Parser) -> ParseResult<Expr> {
    let mut left = parse_term(parser)?;

    loop {
        let op = match parser.current() {
            Token::Char('+') => BinaryOperator::Add,
            Token::Char('-') => BinaryOperator::Sub,
            _ => return Ok(left),
        };

        let line = parser.line();
        parser.advance();
        let right = parse_term(parser)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
}

/// Parses a chain of multiplications and divisions.
///
/// Grammar: `term := unary (("*" | "/") unary)*`
fn parse_term(parser: &mut Parser) -> ParseResult<Expr> {
    let mut left = parse_unary(parser)?;

    loop {
        let op = match parser.current() {
            Token::Char('*') => BinaryOperator::Mul,
            Token::Char('/') => BinaryOperator::Div,
            _ => return Ok(left),
        };

        let line = parser.line();
        parser.advance();
        let right = parse_unary(parser)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
}

/// Parses an optional unary minus, desugared to a subtraction from zero.
///
/// Grammar: `unary := "-" unary | postfix`
fn parse_unary(parser: &mut Parser) -> ParseResult<Expr> {
    if *parser.current() == Token::Char('-') {
        let line = parser.line();
        parser.advance();
        let operand = parse_unary(parser)?;

        return Ok(Expr::BinaryOp { left: Box::new(Expr::Literal { value:
                                                                      LiteralValue::Number(0),
                                                                  line }),
                                   op: BinaryOperator::Sub,
                                   right: Box::new(operand),
                                   line });
    }

    parse_postfix(parser)
}

/// Parses a primary followed by chained method calls.
///
/// After a call, only further method calls can follow: the language has no
/// node for reading a field off an arbitrary expression, so `.name` there
/// must be followed by an argument list.
///
/// Grammar: `postfix := primary ("." Id "(" args ")")*`
fn parse_postfix(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_primary(parser)?;

    while *parser.current() == Token::Char('.') {
        let line = parser.line();
        parser.advance();
        let method = parser.expect_id()?;

        if *parser.current() != Token::Char('(') {
            return Err(parser.unexpected("'('"));
        }
        let args = parse_arguments(parser)?;

        expr = Expr::MethodCall { object: Box::new(expr),
                                  method,
                                  args,
                                  line };
    }

    Ok(expr)
}

/// Parses a primary expression: a literal, a parenthesized expression, or a
/// name form (variable path, instance creation, `str(...)`, method call).
fn parse_primary(parser: &mut Parser) -> ParseResult<Expr> {
    let line = parser.line();

    match parser.current().clone() {
        Token::Number(value) => {
            parser.advance();
            Ok(Expr::Literal { value: LiteralValue::Number(value),
                               line })
        },
        Token::String(value) => {
            parser.advance();
            Ok(Expr::Literal { value: LiteralValue::String(value),
                               line })
        },
        Token::True => {
            parser.advance();
            Ok(Expr::Literal { value: LiteralValue::Bool(true),
                               line })
        },
        Token::False => {
            parser.advance();
            Ok(Expr::Literal { value: LiteralValue::Bool(false),
                               line })
        },
        Token::None => {
            parser.advance();
            Ok(Expr::Literal { value: LiteralValue::None,
                               line })
        },
        Token::Char('(') => {
            parser.advance();
            let expr = parse_expression(parser)?;
            parser.expect_char(')')?;
            Ok(expr)
        },
        Token::Id(_) => parse_name(parser),
        _ => Err(parser.unexpected("an expression")),
    }
}

/// Parses an expression starting with an identifier.
///
/// A dotted path alone is a variable reference. A trailing argument list
/// turns it into one of:
/// - `Class(args)`: creation of an instance of a declared class,
/// - `str(expr)`: stringification,
/// - `path.method(args)`: a method call on the leading path.
fn parse_name(parser: &mut Parser) -> ParseResult<Expr> {
    let line = parser.line();
    let mut ids = parser.parse_dotted_ids()?;

    if *parser.current() != Token::Char('(') {
        return Ok(Expr::Variable { dotted_ids: ids,
                                   line });
    }

    if ids.len() == 1 {
        let name = &ids[0];

        if let Some(class) = parser.classes.get(name) {
            let class = Rc::clone(class);
            let args = parse_arguments(parser)?;

            return Ok(Expr::NewInstance { class, args, line });
        }

        if name == "str" {
            parser.expect_char('(')?;
            let expr = parse_expression(parser)?;
            parser.expect_char(')')?;

            return Ok(Expr::Stringify { expr: Box::new(expr),
                                        line });
        }

        return Err(ParseError::UndefinedClass { name: name.clone(),
                                                line });
    }

    let Some(method) = ids.pop() else {
        return Err(parser.unexpected("a method name"));
    };
    let args = parse_arguments(parser)?;

    Ok(Expr::MethodCall { object: Box::new(Expr::Variable { dotted_ids: ids,
                                                            line }),
                          method,
                          args,
                          line })
}

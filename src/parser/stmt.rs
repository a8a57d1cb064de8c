use crate::{
    ast::{
        ast::{Item, Stmt},
        statements::{Declaration, ElseClause, IfClause, Selector, Stylerule, VariableAssignment},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Parses one top level item: a variable assignment or a style rule.
pub fn parse_item(parser: &mut Parser) -> Result<Item, Error> {
    let is_assignment = match parser.current_token_kind() {
        TokenKind::Variable => true,
        TokenKind::Identifier => parser.peek_kind(1) == TokenKind::ColonEquals,
        _ => false,
    };

    if is_assignment {
        Ok(Item::Assignment(parse_assignment(parser)?))
    } else {
        Ok(Item::Rule(parse_rule(parser)?))
    }
}

/// Parses a statement inside a rule or conditional body.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    match parser.current_token_kind() {
        TokenKind::Identifier if parser.peek_kind(1) == TokenKind::ColonEquals => {
            parse_assignment_stmt(parser)
        }
        TokenKind::Identifier => parse_declaration_stmt(parser),
        _ => Err(parser.unexpected("expected a declaration, a variable assignment or an if clause")),
    }
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Assignment(parse_assignment(parser)?))
}

fn parse_assignment(parser: &mut Parser) -> Result<VariableAssignment, Error> {
    let name_token = parser.advance();

    match parser.current_token_kind() {
        TokenKind::Colon | TokenKind::ColonEquals => {
            parser.advance();
        }
        _ => return Err(parser.unexpected("expected `:` or `:=` after variable name")),
    }

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VariableAssignment::new(
        name_token.value,
        value,
        Span {
            start: name_token.span.start,
            end: parser.last_position(),
        },
    ))
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let property = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Declaration(Declaration::new(
        property.value,
        value,
        Span {
            start: property.span.start,
            end: parser.last_position(),
        },
    )))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    // Both `if [cond]` and `if (cond)`; the latter is a grouping expression
    let condition = if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let condition = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseBracket)?;
        condition
    } else {
        parse_expr(parser, BindingPower::Default)?
    };

    let body = parse_block_body(parser)?;

    let else_clause = if parser.current_token_kind() == TokenKind::Else {
        let else_start = parser.advance().span.start;
        let else_body = parse_block_body(parser)?;
        Some(ElseClause::new(
            else_body,
            Span {
                start: else_start,
                end: parser.last_position(),
            },
        ))
    } else {
        None
    };

    Ok(Stmt::If(IfClause::new(
        condition,
        body,
        else_clause,
        Span {
            start,
            end: parser.last_position(),
        },
    )))
}

/// Parses `{ stmt* }`.
pub fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("expected `}` before end of file"));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(statements)
}

pub fn parse_rule(parser: &mut Parser) -> Result<Stylerule, Error> {
    let start = parser.get_position();

    let mut selectors = vec![parse_selector(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        selectors.push(parse_selector(parser)?);
    }

    let body = parse_block_body(parser)?;

    Ok(Stylerule::new(
        selectors,
        body,
        Span {
            start,
            end: parser.last_position(),
        },
    ))
}

fn parse_selector(parser: &mut Parser) -> Result<Selector, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => Ok(Selector::Tag(parser.advance().value)),
        TokenKind::Dot => {
            parser.advance();
            let name = parser.expect(TokenKind::Identifier)?.value;
            Ok(Selector::Class(name))
        }
        TokenKind::Hash => {
            let hash = parser.advance().value;
            Ok(Selector::Id(hash.trim_start_matches('#').to_string()))
        }
        _ => Err(parser.unexpected("expected a tag, class or id selector")),
    }
}

use crate::{
    ast::{
        ast::Expr,
        expressions::{Literal, Operator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("expected an expression"));
    };

    let mut left = nud(parser)?;

    // While the current token is an infix operator that binds tighter than `bp`, extend lhs
    loop {
        let token_kind = parser.current_token_kind();
        let (Some(led), Some(next_bp)) = (
            parser.get_led_lookup().get(&token_kind).copied(),
            parser.get_bp_lookup().get(&token_kind).copied(),
        ) else {
            break;
        };

        if next_bp <= bp {
            break;
        }

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let literal = match token.kind {
        TokenKind::Number => Literal::Scalar(parse_number(&token)?),
        TokenKind::Pixel => Literal::Pixel(parse_number(&token)?),
        TokenKind::Percentage => Literal::Percentage(parse_number(&token)?),
        TokenKind::Hash => Literal::Color(parse_color(&token)?),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::Variable | TokenKind::Identifier => {
            parser.advance();
            return Ok(Expr::variable(token.value, token.span));
        }
        _ => return Err(parser.unexpected("expected a literal or a variable")),
    };

    parser.advance();
    Ok(Expr::literal(literal, token.span))
}

fn parse_number(token: &Token) -> Result<f64, Error> {
    token.value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })
}

fn parse_color(token: &Token) -> Result<String, Error> {
    let digits = &token.value[1..];
    let is_hex = digits.chars().all(|c| c.is_ascii_hexdigit());

    if is_hex && (digits.len() == 3 || digits.len() == 6) {
        Ok(token.value.clone())
    } else {
        Err(Error::new(
            ErrorImpl::InvalidColor {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ))
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Subtract,
        TokenKind::Star => Operator::Multiply,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    let span = Span {
        start: left.span.start.clone(),
        end: right.span.end.clone(),
    };
    Ok(Expr::operation(operator, left, right, span))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

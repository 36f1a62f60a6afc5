use std::rc::Rc;

use crate::{
    ast::{Expr, LiteralValue, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Dispatches the current token to its prefix parse rule.
    ///
    /// This covers everything an expression can start with; a token with
    /// no rule here records a `no prefix parse function` error and fails
    /// the expression.
    pub(crate) fn parse_prefix_rule(&mut self) -> Option<Expr> {
        let token = self.cur().clone();
        match token {
            Token::Identifier(name) => Some(Expr::Variable { name }),
            Token::Int(literal) => self.parse_integer_literal(&literal),
            Token::Float(literal) => self.parse_float_literal(&literal),
            Token::Str(literal) => Some(Expr::Literal { value: LiteralValue::Str(literal), }),
            Token::True => Some(Expr::Literal { value: LiteralValue::Bool(true), }),
            Token::False => Some(Expr::Literal { value: LiteralValue::Bool(false), }),
            Token::Bang => self.parse_prefix_operation(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operation(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            Token::For => self.parse_for(),
            Token::Function => self.parse_function_literal(),
            other => {
                self.record(ParseError::NoPrefixRule { token: other.name().to_string(), });
                None
            },
        }
    }

    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::Literal { value: LiteralValue::Integer(value), }),
            Err(_) => {
                self.record(ParseError::InvalidIntegerLiteral { literal: literal.to_string(), });
                None
            },
        }
    }

    fn parse_float_literal(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<f64>() {
            Ok(value) => Some(Expr::Literal { value: LiteralValue::Float(value), }),
            Err(_) => {
                self.record(ParseError::InvalidFloatLiteral { literal: literal.to_string(), });
                None
            },
        }
    }

    /// Parses `!x` / `-x`; the operand binds at prefix precedence so
    /// `-a * b` is `(-a) * b`.
    fn parse_prefix_operation(&mut self, operator: PrefixOperator) -> Option<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix { operator,
                            right: Box::new(right), })
    }

    /// Parses `( expr )`, which only regroups; there is no tuple form.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Some(Expr::Array { elements })
    }

    /// Parses `{ key : value, ... }`; `{}` is the empty hash.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();
        if *self.peek() == Token::RBrace {
            self.advance();
            return Some(Expr::Hash { pairs });
        }

        loop {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            if !self.expect_peek(Token::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if *self.peek() != Token::Comma {
                break;
            }
            self.advance();
        }

        if !self.expect_peek(Token::RBrace) {
            return None;
        }
        Some(Expr::Hash { pairs })
    }

    /// Parses `yedi_muji ( cond ) { .. }` with an optional
    /// `nabhae_chikne { .. }`.
    fn parse_if(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RParen) {
            return None;
        }
        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let consequent = self.parse_block()?;

        let alternative = if *self.peek() == Token::Else {
            self.advance();
            if !self.expect_peek(Token::LBrace) {
                return None;
            }
            Some(self.parse_block()?)
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequent,
                        alternative, })
    }

    /// Parses `jaba_samma_muji ( cond ) { .. }`.
    fn parse_while(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RParen) {
            return None;
        }
        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let body = self.parse_block()?;
        Some(Expr::While { condition: Box::new(condition),
                           body, })
    }

    /// Parses `ghuma_muji ( init_stmt ; cond_stmt ; update_expr ) { .. }`.
    ///
    /// The init and condition parts are ordinary statements and consume
    /// their own semicolons; the update is a bare expression.
    fn parse_for(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        self.advance();
        let init = self.parse_statement()?;
        self.advance();
        let condition = self.parse_statement()?;
        self.advance();
        let update = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RParen) {
            return None;
        }
        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let body = self.parse_block()?;
        Some(Expr::For { init: Box::new(init),
                         condition: Box::new(condition),
                         update: Box::new(update),
                         body, })
    }

    /// Parses `kaam_gar_muji ( params ) { .. }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        let parameters = self.parse_parameters()?;
        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let body = self.parse_block()?;
        Some(Expr::Function { parameters,
                              body: Rc::new(body), })
    }

    /// Parses a parameter name list; entries must be identifiers.
    fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();
        if *self.peek() == Token::RParen {
            self.advance();
            return Some(parameters);
        }

        self.advance();
        loop {
            match self.cur() {
                Token::Identifier(name) => parameters.push(name.clone()),
                _ => {
                    self.record(ParseError::InvalidParameter);
                    return None;
                },
            }
            if *self.peek() != Token::Comma {
                break;
            }
            self.advance();
            self.advance();
        }

        if !self.expect_peek(Token::RParen) {
            return None;
        }
        Some(parameters)
    }
}

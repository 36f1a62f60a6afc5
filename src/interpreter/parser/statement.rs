use crate::{
    ast::{Block, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// `thoos_muji` starts a declaration and `patha_muji` a return;
    /// everything else is an expression statement. The parser leaves the
    /// current token on the statement's last token (its `;` when present).
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur() {
            Token::Let => self.parse_variable_declaration(),
            Token::Return => self.parse_return(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `thoos_muji IDENT = expr ;`. The semicolon is required.
    fn parse_variable_declaration(&mut self) -> Option<Stmt> {
        let name = self.expect_identifier()?;
        if !self.expect_peek(Token::Assign) {
            return None;
        }
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.finish_statement()?;
        Some(Stmt::VariableDeclaration { name, value })
    }

    /// Parses `patha_muji expr ;`. The semicolon is required.
    fn parse_return(&mut self) -> Option<Stmt> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.finish_statement()?;
        Some(Stmt::Return { value })
    }

    /// Parses a bare expression as a statement, consuming a trailing `;`
    /// when there is one.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        if *self.peek() == Token::Semicolon {
            self.advance();
        }
        Some(Stmt::Expression { expr })
    }

    /// Consumes the mandatory statement-terminating semicolon.
    fn finish_statement(&mut self) -> Option<()> {
        if *self.peek() == Token::Semicolon {
            self.advance();
        }
        if *self.cur() == Token::Semicolon {
            Some(())
        } else {
            self.record(ParseError::MissingSemicolon);
            None
        }
    }

    /// Parses a `{ ... }` block.
    ///
    /// Expects the current token to be `{`; collects statements until the
    /// matching `}` or end of input and leaves the current token on the
    /// closer.
    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        let mut block = Block::default();
        self.advance();
        while *self.cur() != Token::RBrace && *self.cur() != Token::Eof {
            let statement = self.parse_statement()?;
            block.statements.push(statement);
            self.advance();
        }
        Some(block)
    }
}

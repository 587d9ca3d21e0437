use super::ast::{BinaryOp, Expr, Stmt, UnaryOp};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser for the Lexa grammar
///
/// Operates over the scanner's token sequence with a single forward cursor
/// and one token of lookahead. Whole-program parsing aborts on the first
/// syntax error; there is no recovery/synchronization.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a new parser over a token sequence
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map(|t| t.line).unwrap_or(1);
            tokens.push(Token::new(TokenKind::Eof, String::new(), line));
        }
        Parser { tokens, current: 0 }
    }

    /// Parses a whole program: `statement* EOF`
    pub fn parse(&mut self) -> Result<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// Parses a single expression, the entry point for the expression-only
    /// evaluate/parse modes
    pub fn parse_expression(&mut self) -> Result<Expr> {
        self.expression()
    }

    fn statement(&mut self) -> Result<Stmt> {
        if self.match_kind(TokenKind::Print) {
            return self.print_statement();
        }
        if self.match_kind(TokenKind::Var) {
            return self.var_declaration();
        }
        if self.match_kind(TokenKind::LeftBrace) {
            return self.block();
        }

        self.expression_statement()
    }

    fn print_statement(&mut self) -> Result<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn var_declaration(&mut self) -> Result<Stmt> {
        let name = self
            .consume(TokenKind::Identifier, "Expect variable name.")?
            .lexeme;

        let initializer = if self.match_kind(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    fn block(&mut self) -> Result<Stmt> {
        let mut statements = Vec::new();

        while !self.is_at_end() && !self.check(TokenKind::RightBrace) {
            statements.push(self.statement()?);
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(Stmt::Block(statements))
    }

    fn expression_statement(&mut self) -> Result<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    fn expression(&mut self) -> Result<Expr> {
        self.assignment()
    }

    // Right-associative: `a = b = 1` parses as `a = (b = 1)`
    fn assignment(&mut self) -> Result<Expr> {
        let expr = self.equality()?;

        if self.match_kind(TokenKind::Equal) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable(name) => Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                }),
                _ => Err(Self::error_at(&equals, "Invalid assignment target.")),
            };
        }

        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr> {
        let mut expr = self.comparison()?;

        while let Some(op) = self.match_operator(&[
            (TokenKind::EqualEqual, BinaryOp::Eq),
            (TokenKind::BangEqual, BinaryOp::NotEq),
        ]) {
            let right = self.comparison()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr> {
        let mut expr = self.term()?;

        while let Some(op) = self.match_operator(&[
            (TokenKind::Greater, BinaryOp::Gt),
            (TokenKind::GreaterEqual, BinaryOp::GtEq),
            (TokenKind::Less, BinaryOp::Lt),
            (TokenKind::LessEqual, BinaryOp::LtEq),
        ]) {
            let right = self.term()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut expr = self.factor()?;

        while let Some(op) = self.match_operator(&[
            (TokenKind::Minus, BinaryOp::Sub),
            (TokenKind::Plus, BinaryOp::Add),
        ]) {
            let right = self.factor()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr> {
        let mut expr = self.unary()?;

        while let Some(op) = self.match_operator(&[
            (TokenKind::Star, BinaryOp::Mul),
            (TokenKind::Slash, BinaryOp::Div),
        ]) {
            let right = self.unary()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr> {
        if let Some(op) = self.match_operator(&[
            (TokenKind::Bang, UnaryOp::Not),
            (TokenKind::Minus, UnaryOp::Neg),
        ]) {
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expr> {
        if self.match_kind(TokenKind::Number) {
            let token = self.previous().clone();
            return match token.number_value() {
                Some(n) => Ok(Expr::Number(n)),
                None => Err(Self::error_at(&token, "Invalid number literal.")),
            };
        }
        if self.match_kind(TokenKind::String) {
            return Ok(Expr::String(self.previous().string_value().to_string()));
        }
        if self.match_kind(TokenKind::True) {
            return Ok(Expr::Bool(true));
        }
        if self.match_kind(TokenKind::False) {
            return Ok(Expr::Bool(false));
        }
        if self.match_kind(TokenKind::Nil) {
            return Ok(Expr::Nil);
        }
        if self.match_kind(TokenKind::Identifier) {
            return Ok(Expr::Variable(self.previous().lexeme.clone()));
        }
        if self.match_kind(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(Self::error_at(self.peek(), "Expect expression."))
    }

    // Cursor helpers

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        let idx = self.current.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_operator<T: Copy>(&mut self, table: &[(TokenKind, T)]) -> Option<T> {
        for (kind, op) in table {
            if self.check(*kind) {
                self.advance();
                return Some(*op);
            }
        }
        None
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(Self::error_at(self.peek(), message))
        }
    }

    fn error_at(token: &Token, message: &str) -> Error {
        Error::Syntax {
            line: token.line,
            lexeme: token.lexeme.clone(),
            message: message.to_string(),
        }
    }
}

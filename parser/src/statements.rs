use model::{ParseError, Stmt, TokenKind};
use crate::parser::Parser;
use crate::expressions::ExpressionParser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError>;
}

impl<'a> StatementParser for Parser<'a> {
    /// Dispatch on the lookahead kind alone; there is no backtracking.
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Return) => self.parse_return_stmt(),
            Some(TokenKind::Int) => self.parse_var_decl(),
            Some(TokenKind::Id) => self.parse_assignment(),
            _ => Err(ParseError::UnexpectedStatement { found: self.found() }),
        }
    }
}

impl<'a> Parser<'a> {
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Return)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semi)?;
        Ok(Stmt::Return(expr))
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Int)?;
        let name = self.expect(TokenKind::Id)?.value.clone();

        // Initializer only when the operator is '='; anything else falls through to ';'
        let init = if self.check_op("=") {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };

        self.expect(TokenKind::Semi)?;
        Ok(Stmt::VarDecl { name, init })
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Id)?.value.clone();
        if !self.check_op("=") {
            return Err(ParseError::ExpectedAssignment { found: self.found() });
        }
        self.advance();

        let value = self.parse_expr()?;
        self.expect(TokenKind::Semi)?;
        Ok(Stmt::Assign { name, value })
    }
}

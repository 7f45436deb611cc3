use model::{Function, ParseError, Token, TokenKind};
use crate::statements::StatementParser;

/// Core parser struct: a forward-only cursor over the token slice.
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// `"int" ID "(" ")" "{" statement* "}"`, then end of input
    pub fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.expect(TokenKind::Int)?;
        let name = self.expect(TokenKind::Id)?.value.clone();
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;

        let mut body = Vec::new();
        while !self.check(TokenKind::RBrace) {
            body.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RBrace)?;
        self.expect_end()?;

        tracing::debug!(function = %name, statements = body.len(), "Parsed function");
        Ok(Function { name, body })
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn check_op(&self, symbol: &str) -> bool {
        self.peek().is_some_and(|t| t.is_op(symbol))
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(ParseError::UnexpectedToken {
                expected: kind,
                found: self.found(),
            }),
        }
    }

    /// The lookahead token, or the synthetic EOF token past the end.
    pub(crate) fn found(&self) -> Token {
        self.peek().cloned().unwrap_or_else(Token::eof)
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(extra) => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Eof,
                found: extra.clone(),
            }),
        }
    }
}

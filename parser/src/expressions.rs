use model::{BinaryOp, Expr, ParseError, TokenKind};
use crate::parser::Parser;

/// Expression parsing: a flat, left-associative operator chain.
///
/// All four operators share one precedence level, so `a + b * c` groups as
/// `(a + b) * c`. Operands are single NUMBER or ID tokens; parentheses are
/// never consumed here.
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<Expr, ParseError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_operand()?;

        while let Some(op) = self.peek_binary_op() {
            self.advance();
            let right = self.parse_operand()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }
}

impl<'a> Parser<'a> {
    fn peek_binary_op(&self) -> Option<BinaryOp> {
        self.peek()
            .filter(|t| t.kind == TokenKind::Op)
            .and_then(|t| BinaryOp::from_symbol(&t.value))
    }

    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Number => {
                self.advance();
                let value = token.value.parse::<i64>().map_err(|_| ParseError::IntegerOutOfRange {
                    literal: token.value.clone(),
                })?;
                Ok(Expr::IntegerLiteral(value))
            }
            Some(token) if token.kind == TokenKind::Id => {
                self.advance();
                Ok(Expr::Identifier(token.value.clone()))
            }
            _ => Err(ParseError::ExpectedOperand { found: self.found() }),
        }
    }
}

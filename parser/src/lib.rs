// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, token cursor helpers, and the function rule
// - statements.rs: Statement parsing (return, declaration, assignment)
// - expressions.rs: Flat left-associative expression chains

mod parser;
mod expressions;
mod statements;

use model::{Function, ParseError, Token};
use parser::Parser;

/// Parse a list of tokens into a Function AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer
///
/// # Returns
/// * `Ok(Function)` - The single function the program consists of
/// * `Err(ParseError)` - The first grammar violation; no partial tree is returned
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse_tokens(tokens: &[Token]) -> Result<Function, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse_function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexer::lex;
    use model::{BinaryOp, Expr, Stmt, TokenKind};

    fn parse_src(src: &str) -> Result<Function, ParseError> {
        let tokens = lex(src).unwrap();
        parse_tokens(&tokens)
    }

    fn int(v: i64) -> Expr {
        Expr::IntegerLiteral(v)
    }

    fn id(name: &str) -> Expr {
        Expr::identifier(name)
    }

    #[test]
    fn parse_simple_main() {
        let function = parse_src("int main() { return 1+2; }").unwrap();
        assert_eq!(
            function,
            Function {
                name: "main".to_string(),
                body: vec![Stmt::Return(Expr::binary(BinaryOp::Add, int(1), int(2)))],
            }
        );
    }

    #[test]
    fn parse_empty_body() {
        let function = parse_src("int f() { }").unwrap();
        assert_eq!(function.name, "f");
        assert!(function.body.is_empty());
    }

    #[test]
    fn parse_statements_in_source_order() {
        let function = parse_src("int main() { int x; x = 5; return x; }").unwrap();
        assert_eq!(
            function.body,
            vec![
                Stmt::VarDecl { name: "x".to_string(), init: None },
                Stmt::Assign { name: "x".to_string(), value: int(5) },
                Stmt::Return(id("x")),
            ]
        );
    }

    #[test]
    fn parse_variable_declaration_with_initializer() {
        let function = parse_src("int main() { int x = 5; return x; }").unwrap();
        assert_eq!(
            function.body[0],
            Stmt::VarDecl { name: "x".to_string(), init: Some(int(5)) }
        );
    }

    // ─── Expression grouping ───────────────────────────────────
    #[test]
    fn parse_left_associative_chain() {
        let function = parse_src("int main() { return 1+2-3; }").unwrap();
        assert_eq!(
            function.body[0],
            Stmt::Return(Expr::binary(
                BinaryOp::Sub,
                Expr::binary(BinaryOp::Add, int(1), int(2)),
                int(3),
            ))
        );
    }

    #[test]
    fn parse_ignores_conventional_precedence() {
        // a+b*c groups as (a+b)*c
        let function = parse_src("int main() { return a+b*c; }").unwrap();
        assert_eq!(
            function.body[0],
            Stmt::Return(Expr::binary(
                BinaryOp::Mul,
                Expr::binary(BinaryOp::Add, id("a"), id("b")),
                id("c"),
            ))
        );
    }

    #[test]
    fn parse_undeclared_identifiers_are_accepted() {
        let function = parse_src("int main() { y = z / 2; return q; }").unwrap();
        assert_eq!(
            function.body[0],
            Stmt::Assign {
                name: "y".to_string(),
                value: Expr::binary(BinaryOp::Div, id("z"), int(2)),
            }
        );
    }

    #[test]
    fn parse_large_literal_within_range() {
        let function = parse_src("int main() { return 9223372036854775807; }").unwrap();
        assert_eq!(function.body[0], Stmt::Return(int(i64::MAX)));
    }

    // ─── Error tests ───────────────────────────────────────────
    #[test]
    fn parse_missing_semicolon() {
        let err = parse_src("int main() { return 1 }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Semi,
                found: Token::new(TokenKind::RBrace, "}"),
            }
        );
        assert_eq!(err.to_string(), "expected SEMI, found RBRACE '}'");
    }

    #[test]
    fn parse_wrong_leading_keyword() {
        let err = parse_src("return main() { }").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { expected: TokenKind::Int, .. }));
    }

    #[test]
    fn parse_empty_input() {
        let err = parse_tokens(&[]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken { expected: TokenKind::Int, found: Token::eof() }
        );
        assert_eq!(err.to_string(), "expected INT, found end of input");
    }

    #[test]
    fn parse_unclosed_body() {
        let err = parse_src("int main() { return 0;").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedStatement { found: Token::eof() });
    }

    #[test]
    fn parse_rejects_trailing_tokens() {
        let err = parse_src("int main() { } int").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Eof,
                found: Token::new(TokenKind::Int, "int"),
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_statement_start() {
        let err = parse_src("int main() { 5; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedStatement { found: Token::new(TokenKind::Number, "5") }
        );
    }

    #[test]
    fn parse_rejects_parenthesized_expression() {
        let err = parse_src("int main() { return (1+2)*3; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedOperand { found: Token::new(TokenKind::LParen, "(") }
        );
    }

    #[test]
    fn parse_rejects_dangling_operator() {
        let err = parse_src("int main() { return 1+; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedOperand { found: Token::new(TokenKind::Semi, ";") }
        );
    }

    #[test]
    fn parse_rejects_function_parameters() {
        let err = parse_src("int main(x) { }").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { expected: TokenKind::RParen, .. }));
    }

    #[test]
    fn parse_integer_overflow() {
        let err = parse_src("int main() { return 99999999999999999999; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::IntegerOutOfRange { literal: "99999999999999999999".to_string() }
        );
    }

    // ─── Assignment operator checks ────────────────────────────
    #[test]
    fn parse_assignment_requires_equals() {
        // `x + 5;` is not accepted as `x = 5;`
        let err = parse_src("int main() { x + 5; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedAssignment { found: Token::new(TokenKind::Op, "+") }
        );
        assert_eq!(err.to_string(), "expected OP '=', found OP '+'");
    }

    #[test]
    fn parse_declaration_non_equals_operator() {
        let err = parse_src("int main() { int x + 5; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Semi,
                found: Token::new(TokenKind::Op, "+"),
            }
        );
    }

    #[test]
    fn parse_chained_assignment_rejected() {
        let err = parse_src("int main() { x = y = 1; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Semi,
                found: Token::new(TokenKind::Op, "="),
            }
        );
    }

    #[test]
    fn parse_error_exposes_found_token() {
        let err = parse_src("int main() { return 1 }").unwrap_err();
        assert_eq!(err.found(), Some(&Token::new(TokenKind::RBrace, "}")));
    }
}

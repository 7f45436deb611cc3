// C99 text for individual statements and expressions
use model::{Expr, Stmt};

pub fn emit_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Return(expr) => format!("return {};", emit_expr(expr)),
        Stmt::VarDecl { name, init: None } => format!("int {};", name),
        Stmt::VarDecl { name, init: Some(init) } => format!("int {} = {};", name, emit_expr(init)),
        Stmt::Assign { name, value } => format!("{} = {};", name, emit_expr(value)),
    }
}

/// Nested binary operands are always parenthesized, so the source's flat
/// left-to-right grouping survives C's own precedence rules.
pub fn emit_expr(expr: &Expr) -> String {
    match expr {
        Expr::IntegerLiteral(value) => value.to_string(),
        Expr::Identifier(name) => name.clone(),
        Expr::Binary { op, left, right } => {
            format!("{} {} {}", emit_operand(left), op.symbol(), emit_operand(right))
        }
    }
}

fn emit_operand(expr: &Expr) -> String {
    match expr {
        Expr::Binary { .. } => format!("({})", emit_expr(expr)),
        Expr::IntegerLiteral(_) | Expr::Identifier(_) => emit_expr(expr),
    }
}

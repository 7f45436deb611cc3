// One pass through lexer, parser and code generator. Nothing is shared between runs.
use codegen::Codegen;
use model::{Function, LexError, ParseError, Token};

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Everything a run produces. Only built once every stage has succeeded.
#[derive(Debug)]
pub struct Artifacts {
    pub tokens: Vec<Token>,
    pub function: Function,
    pub c_source: String,
}

pub fn translate(source: &str) -> Result<Artifacts, CompileError> {
    let tokens = lexer::lex(source)?;
    let function = parser::parse_tokens(&tokens)?;
    let c_source = Codegen::new().gen_function(&function);

    Ok(Artifacts { tokens, function, c_source })
}

mod rules;
mod table_lexer;

use model::{LexError, Token};
use table_lexer::TableLexer;

/// Main lexer entry point. Stops at the first character no rule accepts.
#[tracing::instrument(level = "trace", skip_all)]
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let lexer = TableLexer::new(input);
    let tokens = lexer.tokenize()?;
    tracing::trace!(input_len = input.len(), token_count = tokens.len(), "Tokenized source");
    Ok(tokens)
}

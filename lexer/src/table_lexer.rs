use std::sync::LazyLock;

use model::{LexError, Token, TokenKind};
use regex_lite::{Captures, Regex};

use crate::rules::{keyword_or_identifier, Rule, TOKEN_RULES};

/// All rules joined into one alternation of named groups, in table order.
/// Alternation is leftmost-first, which gives ordered-choice semantics.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = TOKEN_RULES
        .iter()
        .map(|(name, pattern, _)| format!("(?P<{name}>{pattern})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("token rule table must compile")
});

pub struct TableLexer<'a> {
    input: &'a str,
}

impl<'a> TableLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        for caps in TOKEN_REGEX.captures_iter(self.input) {
            let (rule, start, text) = classify(&caps);
            match rule {
                Rule::Emit(TokenKind::Id) => tokens.push(Token::new(keyword_or_identifier(text), text)),
                Rule::Emit(kind) => tokens.push(Token::new(kind, text)),
                Rule::Skip => continue,
                Rule::Mismatch => return Err(self.mismatch_at(start, text)),
            }
        }

        Ok(tokens)
    }

    fn mismatch_at(&self, offset: usize, text: &str) -> LexError {
        let before = &self.input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = self.input[line_start..offset].chars().count() + 1;

        LexError {
            // MISMATCH matches exactly one character
            character: text.chars().next().unwrap_or_default(),
            offset,
            line,
            column,
        }
    }
}

fn classify<'h>(caps: &Captures<'h>) -> (Rule, usize, &'h str) {
    TOKEN_RULES
        .iter()
        .find_map(|&(name, _, rule)| caps.name(name).map(|m| (rule, m.start(), m.as_str())))
        .unwrap_or_else(|| unreachable!("every match belongs to exactly one token rule"))
}

use model::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    Emit(TokenKind),
    Skip,
    Mismatch,
}

/// Token patterns in priority order. At every position the first pattern that
/// matches wins; `MISMATCH` accepts any single character, so every position
/// is claimed by some rule.
pub(crate) const TOKEN_RULES: &[(&str, &str, Rule)] = &[
    ("NUMBER", r"\d+", Rule::Emit(TokenKind::Number)),
    ("ID", r"[A-Za-z_]\w*", Rule::Emit(TokenKind::Id)),
    ("OP", r"[+\-*/=]", Rule::Emit(TokenKind::Op)),
    ("LPAREN", r"\(", Rule::Emit(TokenKind::LParen)),
    ("RPAREN", r"\)", Rule::Emit(TokenKind::RParen)),
    ("LBRACE", r"\{", Rule::Emit(TokenKind::LBrace)),
    ("RBRACE", r"\}", Rule::Emit(TokenKind::RBrace)),
    ("SEMI", r";", Rule::Emit(TokenKind::Semi)),
    ("SKIP", r"[ \t\r\n]+", Rule::Skip),
    ("MISMATCH", r"(?s:.)", Rule::Mismatch),
];

const KEYWORDS: &[(&str, TokenKind)] = &[("int", TokenKind::Int), ("return", TokenKind::Return)];

/// Reclassify an identifier that spells a reserved word.
pub(crate) fn keyword_or_identifier(text: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, kind)| kind)
        .unwrap_or(TokenKind::Id)
}

//! Lexer for directive content using logos
//!
//! Only the text between `{{%` and `%}}` is lexed; everything else in a
//! template line is literal output.

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    #[token("FOR")]
    For,
    #[token("ENDFOR")]
    EndFor,
    #[token("IF")]
    If,
    #[token("ENDIF")]
    EndIf,

    #[token("|")]
    Pipe,

    // Dotted names: `color.identity.camelcase`, `snakecase`
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(\.[a-zA-Z_][a-zA-Z0-9_]*)*", |lex| lex.slice().to_string(), priority = 1)]
    Name(String),
}

/// Lex directive content into tokens with spans.
///
/// Returns `None` if any character does not belong to the directive grammar.
pub fn lex(input: &str) -> Option<Vec<(Token, Span)>> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| tok.ok().map(|t| (t, span)))
        .collect()
}

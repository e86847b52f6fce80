//! Markers (`{{% ... %}}`) and the directives they contain

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use super::lexer::{self, Token};
use crate::error::Span;

pub const OPEN: &str = "{{%";
pub const CLOSE: &str = "%}}";

/// Parsed content of a single marker
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `FOR <identifier>`
    For(String),
    /// `IF <token>`
    If(String),
    EndFor,
    EndIf,
    /// `<token>[|transformation]*`
    Substitution {
        name: String,
        transformations: Vec<String>,
    },
}

/// A `{{% ... %}}` occurrence inside a line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<'t> {
    /// Byte range of the whole marker, delimiters included
    pub span: Span,
    /// The text between the delimiters
    pub content: &'t str,
}

impl<'t> Marker<'t> {
    pub fn directive(&self) -> Option<Directive> {
        parse(self.content)
    }
}

/// Find every complete marker in `text`, left to right.
///
/// An opening `{{%` without a later `%}}` is not a marker.
pub fn markers(text: &str) -> Vec<Marker<'_>> {
    let mut found = Vec::new();
    let mut offset = 0;
    while let Some(open) = text[offset..].find(OPEN) {
        let start = offset + open;
        let content_start = start + OPEN.len();
        let Some(close) = text[content_start..].find(CLOSE) else {
            break;
        };
        let content_end = content_start + close;
        let end = content_end + CLOSE.len();
        found.push(Marker {
            span: start..end,
            content: &text[content_start..content_end],
        });
        offset = end;
    }
    found
}

/// Parse marker content into a directive
pub fn parse(content: &str) -> Option<Directive> {
    let tokens = lexer::lex(content)?;
    let len = content.len();

    let token_iter = tokens
        .into_iter()
        .map(|(tok, span)| (tok, SimpleSpan::from(span)));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    directive_parser().parse(token_stream).into_result().ok()
}

fn directive_parser<'a, I>() -> impl Parser<'a, I, Directive, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Name(s) => s,
    };

    let open_for = just(Token::For)
        .ignore_then(name.clone())
        .map(Directive::For);

    let open_if = just(Token::If)
        .ignore_then(name.clone())
        .map(Directive::If);

    let end_for = just(Token::EndFor).to(Directive::EndFor);
    let end_if = just(Token::EndIf).to(Directive::EndIf);

    let substitution = name
        .clone()
        .then(
            just(Token::Pipe)
                .ignore_then(name)
                .repeated()
                .collect::<Vec<_>>(),
        )
        .map(|(name, transformations)| Directive::Substitution {
            name,
            transformations,
        });

    choice((open_for, open_if, end_for, end_if, substitution)).then_ignore(end())
}

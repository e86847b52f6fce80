//! Error types for template generation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Everything that can go wrong while generating from a template.
///
/// All of these are authoring or configuration mistakes; generation stops at
/// the first one and no partial output is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("unknown loop '{identifier}' (expected 'color' or 'textStyle')")]
    UnknownLoop { identifier: String },

    #[error("{keyword} block '{identifier}' is never closed with END{keyword}")]
    OpenBlock { keyword: String, identifier: String },

    #[error("unknown token '{token}'")]
    UnknownToken { token: String },

    #[error("text style '{text_style}' uses a color that matches no project color")]
    MissingColorForTextStyle { text_style: String },

    #[error("generated identifiers collide with reserved names: {identities}")]
    ProhibitedIdentities { identities: String },

    #[error("unknown transformation '{name}'")]
    UnknownTransformation { name: String },

    #[error("blocks nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl TemplateError {
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::UnknownToken {
            token: token.into(),
        }
    }

    /// Attach the 1-based template line the error was raised on
    pub fn at_line(self, line: usize) -> ParseError {
        ParseError {
            kind: self,
            line: Some(line),
        }
    }
}

/// A [`TemplateError`] together with the template line that caused it
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", describe(.kind, .line))]
pub struct ParseError {
    pub kind: TemplateError,
    /// 1-based line number, absent for errors raised before parsing
    pub line: Option<usize>,
}

fn describe(kind: &TemplateError, line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("line {line}: {kind}"),
        None => kind.to_string(),
    }
}

impl From<TemplateError> for ParseError {
    fn from(kind: TemplateError) -> Self {
        Self { kind, line: None }
    }
}

impl ParseError {
    /// Format the error with template context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.line.and_then(|line| line_span(source, line)) else {
            return format!("Error: {}", self.kind);
        };

        let message = self.kind.to_string();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}", self),
        }
    }
}

/// Byte range of a 1-based line, without its line terminator
fn line_span(source: &str, line: usize) -> Option<Span> {
    let mut start = 0;
    for (index, text) in source.split('\n').enumerate() {
        if index + 1 == line {
            let text = text.strip_suffix('\r').unwrap_or(text);
            return Some(start..start + text.len());
        }
        start += text.len() + 1;
    }
    None
}

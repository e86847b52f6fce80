//! Detection of `FOR` / `IF` blocks and their bodies

use std::borrow::Cow;

use tracing::debug;

use super::directive::{markers, Directive};
use crate::error::TemplateError;

/// One line of template text together with its 1-based source line number.
///
/// Reassembled inline lines keep the number of the line they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'t> {
    pub number: usize,
    pub text: Cow<'t, str>,
}

impl<'t> Line<'t> {
    pub fn borrowed(number: usize, text: &'t str) -> Self {
        Self {
            number,
            text: Cow::Borrowed(text),
        }
    }

    pub fn owned(number: usize, text: String) -> Self {
        Self {
            number,
            text: Cow::Owned(text),
        }
    }
}

/// Split template source into numbered lines
pub fn lines(source: &str) -> Vec<Line<'_>> {
    source
        .split('\n')
        .enumerate()
        .map(|(index, text)| Line::borrowed(index + 1, text))
        .collect()
}

/// The two directive blocks of the template language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    For,
    If,
}

impl BlockKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            BlockKind::For => "FOR",
            BlockKind::If => "IF",
        }
    }

    pub fn end_keyword(&self) -> &'static str {
        match self {
            BlockKind::For => "ENDFOR",
            BlockKind::If => "ENDIF",
        }
    }

    fn opens(&self, directive: &Directive) -> Option<String> {
        match (self, directive) {
            (BlockKind::For, Directive::For(identifier))
            | (BlockKind::If, Directive::If(identifier)) => Some(identifier.clone()),
            _ => None,
        }
    }

    fn closes(&self, directive: &Directive) -> bool {
        matches!(
            (self, directive),
            (BlockKind::For, Directive::EndFor) | (BlockKind::If, Directive::EndIf)
        )
    }
}

/// A detected block
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'t> {
    pub identifier: String,
    /// Lines strictly between the opening and closing directive
    pub body: Vec<Line<'t>>,
    /// Text before the opening directive, for blocks that close on their opening line
    pub pre_body: Option<String>,
    /// Text after the closing directive, for blocks that close on their opening line
    pub post_body: Option<String>,
    /// Index of the line holding the closing directive
    pub end_line: usize,
}

impl Block<'_> {
    /// Whether the block opened and closed on the same line
    pub fn is_inline(&self) -> bool {
        self.pre_body.is_some() || self.post_body.is_some()
    }
}

/// Look for a `kind` block opening on `lines[start]`.
///
/// Returns `Ok(None)` when that line holds no opening directive of this kind.
/// Nested blocks of the same kind are counted so that only the matching
/// closing directive ends the block.
pub fn detect<'t>(
    kind: BlockKind,
    lines: &[Line<'t>],
    start: usize,
) -> Result<Option<Block<'t>>, TemplateError> {
    let Some(line) = lines.get(start) else {
        return Ok(None);
    };
    let text = line.text.as_ref();
    let line_markers = markers(text);

    let Some((open_index, identifier)) = line_markers
        .iter()
        .enumerate()
        .find_map(|(i, marker)| {
            marker
                .directive()
                .and_then(|d| kind.opens(&d))
                .map(|identifier| (i, identifier))
        })
    else {
        return Ok(None);
    };

    let open_span = line_markers[open_index].span.clone();
    let mut depth = 1usize;

    // Closing directive on the opening line: inline block
    for marker in &line_markers[open_index + 1..] {
        let Some(directive) = marker.directive() else {
            continue;
        };
        if kind.opens(&directive).is_some() {
            depth += 1;
        } else if kind.closes(&directive) {
            depth -= 1;
            if depth == 0 {
                debug!(
                    line = line.number,
                    keyword = kind.keyword(),
                    %identifier,
                    "inline block"
                );
                return Ok(Some(Block {
                    identifier,
                    body: vec![Line::owned(
                        line.number,
                        text[open_span.end..marker.span.start].to_string(),
                    )],
                    pre_body: Some(text[..open_span.start].to_string()),
                    post_body: Some(text[marker.span.end..].to_string()),
                    end_line: start,
                }));
            }
        }
    }

    for (index, candidate) in lines.iter().enumerate().skip(start + 1) {
        for marker in markers(&candidate.text) {
            let Some(directive) = marker.directive() else {
                continue;
            };
            if kind.opens(&directive).is_some() {
                depth += 1;
            } else if kind.closes(&directive) {
                depth -= 1;
                if depth == 0 {
                    debug!(
                        line = line.number,
                        end = candidate.number,
                        keyword = kind.keyword(),
                        %identifier,
                        "block"
                    );
                    return Ok(Some(Block {
                        identifier,
                        body: lines[start + 1..index].to_vec(),
                        pre_body: None,
                        post_body: None,
                        end_line: index,
                    }));
                }
            }
        }
    }

    Err(TemplateError::OpenBlock {
        keyword: kind.keyword().to_string(),
        identifier,
    })
}

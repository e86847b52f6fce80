//! Template parser - expands loops and conditionals and substitutes tokens

use std::collections::HashMap;

use tracing::debug;

use super::block::{detect, lines, Block, BlockKind, Line};
use super::directive::{self, markers, Directive, OPEN};
use super::guard::check_reserved;
use super::resolver::{resolve, resolve_condition, Context};
use crate::config::Config;
use crate::error::{ParseError, TemplateError};
use crate::project::ProjectAssets;
use crate::transform;

/// Generates text from templates for one project.
///
/// The parser only borrows its inputs; one instance can be shared between
/// threads and used for any number of templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateParser<'a> {
    assets: &'a ProjectAssets,
    config: &'a Config,
}

impl<'a> TemplateParser<'a> {
    pub fn new(assets: &'a ProjectAssets, config: &'a Config) -> Self {
        Self { assets, config }
    }

    /// Generate the output for `template`.
    ///
    /// Reserved identifiers are checked first; on any error nothing is
    /// returned.
    pub fn parse(&self, template: &str) -> Result<String, ParseError> {
        check_reserved(self.assets, self.config)?;

        let source = lines(template);
        debug!(
            lines = source.len(),
            colors = self.assets.colors.len(),
            text_styles = self.assets.text_styles.len(),
            "parsing template"
        );

        let output = self.parse_lines(&source, Context::None, 0)?;
        Ok(output.join("\n"))
    }

    fn parse_lines(
        &self,
        lines: &[Line<'_>],
        context: Context<'a>,
        depth: usize,
    ) -> Result<Vec<String>, ParseError> {
        let mut output = Vec::new();
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = &lines[cursor];

            if let Some(block) = self.detect(BlockKind::For, lines, cursor)? {
                self.expand_loop(&block, line.number, depth, &mut output)?;
                cursor = block.end_line + 1;
            } else if !line.text.contains(OPEN) {
                output.push(line.text.to_string());
                cursor += 1;
            } else if let Some(block) = self.detect(BlockKind::If, lines, cursor)? {
                self.expand_conditional(&block, line.number, context, depth, &mut output)?;
                cursor = block.end_line + 1;
            } else {
                output.push(self.substitute(line, context)?);
                cursor += 1;
            }
        }

        Ok(output)
    }

    fn detect<'t>(
        &self,
        kind: BlockKind,
        lines: &[Line<'t>],
        cursor: usize,
    ) -> Result<Option<Block<'t>>, ParseError> {
        detect(kind, lines, cursor).map_err(|e| e.at_line(lines[cursor].number))
    }

    fn descend(&self, depth: usize, line: usize) -> Result<usize, ParseError> {
        let limit = self.config.max_nesting_depth;
        if depth >= limit {
            return Err(TemplateError::NestingTooDeep { limit }.at_line(line));
        }
        Ok(depth + 1)
    }

    fn expand_loop(
        &self,
        block: &Block<'_>,
        line: usize,
        depth: usize,
        output: &mut Vec<String>,
    ) -> Result<(), ParseError> {
        let depth = self.descend(depth, line)?;
        let contexts: Vec<Context<'a>> = match block.identifier.as_str() {
            "color" => self.assets.colors.iter().map(Context::Color).collect(),
            "textStyle" => self
                .assets
                .text_styles
                .iter()
                .map(Context::TextStyle)
                .collect(),
            other => {
                return Err(TemplateError::UnknownLoop {
                    identifier: other.to_string(),
                }
                .at_line(line))
            }
        };

        debug!(line, loop_over = %block.identifier, iterations = contexts.len(), "expanding loop");
        for context in contexts {
            output.extend(self.parse_lines(&block.body, context, depth)?);
        }
        Ok(())
    }

    fn expand_conditional(
        &self,
        block: &Block<'_>,
        line: usize,
        context: Context<'a>,
        depth: usize,
        output: &mut Vec<String>,
    ) -> Result<(), ParseError> {
        let condition = resolve_condition(&block.identifier, context, &self.assets.colors)
            .map_err(|e| e.at_line(line))?
            .is_some();
        debug!(line, condition = %block.identifier, value = condition, "conditional");

        if !block.is_inline() {
            if condition {
                let depth = self.descend(depth, line)?;
                output.extend(self.parse_lines(&block.body, context, depth)?);
            }
            return Ok(());
        }

        // Only directives inside the kept body are nested; the text after
        // ENDIF sits beside this block and stays at the current depth.
        let nested = condition && block.body.iter().any(|l| l.text.contains(OPEN));
        let depth = if nested {
            self.descend(depth, line)?
        } else {
            depth
        };

        let mut candidate = block.pre_body.clone().unwrap_or_default();
        if condition {
            for body_line in &block.body {
                candidate.push_str(&body_line.text);
            }
        }
        candidate.push_str(block.post_body.as_deref().unwrap_or_default());

        if !candidate.trim().is_empty() {
            let reassembled = [Line::owned(line, candidate)];
            output.extend(self.parse_lines(&reassembled, context, depth)?);
        }
        Ok(())
    }

    /// Replace every token marker on the line with its resolved value
    fn substitute(&self, line: &Line<'_>, context: Context<'a>) -> Result<String, ParseError> {
        let text = line.text.as_ref();
        let mut resolved: HashMap<&str, String> = HashMap::new();
        let mut result = String::with_capacity(text.len());
        let mut last = 0;

        for marker in markers(text) {
            let raw = &text[marker.span.clone()];
            if !resolved.contains_key(raw) {
                let value = self
                    .resolve_marker(marker.content, context)
                    .map_err(|e| e.at_line(line.number))?;
                resolved.insert(raw, value);
            }
            result.push_str(&text[last..marker.span.start]);
            result.push_str(&resolved[raw]);
            last = marker.span.end;
        }
        result.push_str(&text[last..]);

        Ok(result)
    }

    fn resolve_marker(&self, content: &str, context: Context<'a>) -> Result<String, TemplateError> {
        let Some(Directive::Substitution {
            name,
            transformations,
        }) = directive::parse(content)
        else {
            return Err(TemplateError::unknown_token(content.trim()));
        };

        let pipeline = transform::pipeline(&transformations)?;
        let value = resolve(&name, context, &self.assets.colors, &pipeline)?;
        Ok(value.unwrap_or_default())
    }
}

//! Named string transformations applied to resolved token values
//!
//! Transformations are chained after a token name with `|`:
//!
//! ```text
//! {{% color.identity|snakecase|uppercase %}}
//! ```
//!
//! They run left to right. The registry is built once per process and never
//! changes afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::TemplateError;
use crate::project::IdentifierStyle;

/// A pure string-to-string function addressable by name
#[derive(Debug)]
pub struct Transformation {
    pub name: &'static str,
    apply: fn(&str) -> String,
}

impl Transformation {
    pub const fn new(name: &'static str, apply: fn(&str) -> String) -> Self {
        Self { name, apply }
    }

    pub fn apply(&self, input: &str) -> String {
        (self.apply)(input)
    }
}

/// Ordered list of transformations to run over a value
pub type Pipeline = Vec<&'static Transformation>;

/// Lookup table from transformation name to function
#[derive(Debug)]
pub struct TransformationRegistry {
    transformations: HashMap<&'static str, Transformation>,
}

static REGISTRY: OnceLock<TransformationRegistry> = OnceLock::new();

impl TransformationRegistry {
    /// The process-wide registry
    pub fn global() -> &'static TransformationRegistry {
        REGISTRY.get_or_init(TransformationRegistry::builtin)
    }

    fn builtin() -> Self {
        let transformations = [
            Transformation::new("lowercase", str::to_lowercase),
            Transformation::new("uppercase", str::to_uppercase),
            Transformation::new("capitalize", capitalize),
            Transformation::new("uncapitalize", uncapitalize),
            Transformation::new("trim", |s: &str| s.trim().to_string()),
            Transformation::new("camelcase", |s: &str| IdentifierStyle::Camel.apply(s)),
            Transformation::new("pascalcase", |s: &str| IdentifierStyle::Pascal.apply(s)),
            Transformation::new("snakecase", |s: &str| IdentifierStyle::Snake.apply(s)),
            Transformation::new("kebabcase", |s: &str| IdentifierStyle::Kebab.apply(s)),
        ];

        Self {
            transformations: transformations
                .into_iter()
                .map(|t| (t.name, t))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Transformation> {
        self.transformations.get(name)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.transformations.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Look up a transformation in the global registry
pub fn lookup(name: &str) -> Result<&'static Transformation, TemplateError> {
    TransformationRegistry::global()
        .get(name)
        .ok_or_else(|| TemplateError::UnknownTransformation {
            name: name.to_string(),
        })
}

/// Resolve a list of names into a pipeline, failing on the first unknown one
pub fn pipeline<S: AsRef<str>>(names: &[S]) -> Result<Pipeline, TemplateError> {
    names.iter().map(|name| lookup(name.as_ref())).collect()
}

/// Fold `input` through every transformation in order
pub fn apply(pipeline: &[&Transformation], input: &str) -> String {
    pipeline
        .iter()
        .fold(input.to_string(), |value, transformation| {
            transformation.apply(&value)
        })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

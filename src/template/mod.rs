//! The template language
//!
//! Templates are plain text with directives between `{{%` and `%}}`:
//!
//! ```text
//! enum Palette {
//! {{% FOR color %}}
//!     static let {{% color.identity.camelcase %}} = Color(hex: "{{% color.argb %}}")
//! {{% ENDFOR %}}
//! }
//! {{% FOR textStyle %}}
//! {{% IF textStyle.color.identity %}}
//! // {{% textStyle.identity %}} uses {{% textStyle.color.identity|uppercase %}}
//! {{% ENDIF %}}
//! let {{% textStyle.identity.camelcase %}}{{% IF textStyle.lineHeight %}}: lineHeight {{% textStyle.lineHeight %}}{{% ENDIF %}}
//! {{% ENDFOR %}}
//! ```
//!
//! Lines without directives are copied verbatim. `FOR` repeats its body for
//! every color or text style, `IF` keeps its body when the token has a value,
//! and any other directive is replaced by the token's value.

mod block;
mod directive;
mod guard;
mod lexer;
mod parser;
mod resolver;

pub use block::{detect, lines, Block, BlockKind, Line};
pub use directive::{markers, Directive, Marker};
pub use guard::check_reserved;
pub use parser::TemplateParser;
pub use resolver::{resolve, resolve_condition, Context};

/// Token names accepted inside `FOR color`
pub const COLOR_TOKENS: &[&str] = &[
    "color.identity",
    "color.identity.camelcase",
    "color.identity.pascalcase",
    "color.identity.snakecase",
    "color.identity.kebabcase",
    "color.rgb",
    "color.argb",
    "color.r",
    "color.g",
    "color.b",
    "color.a",
];

/// Token names accepted inside `FOR textStyle`
pub const TEXT_STYLE_TOKENS: &[&str] = &[
    "textStyle.identity",
    "textStyle.identity.camelcase",
    "textStyle.identity.pascalcase",
    "textStyle.identity.snakecase",
    "textStyle.identity.kebabcase",
    "textStyle.fontName",
    "textStyle.fontSize",
    "textStyle.fontWeight",
    "textStyle.letterSpacing",
    "textStyle.lineHeight",
    "textStyle.alignment",
    "textStyle.color.identity",
    "textStyle.color.identity.camelcase",
    "textStyle.color.identity.pascalcase",
    "textStyle.color.identity.snakecase",
    "textStyle.color.identity.kebabcase",
    "textStyle.color.rgb",
    "textStyle.color.argb",
    "textStyle.color.r",
    "textStyle.color.g",
    "textStyle.color.b",
    "textStyle.color.a",
];

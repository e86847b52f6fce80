//! Platform identifier styles derived from asset names

/// Naming convention used when turning an asset name into a source identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierStyle {
    /// `primaryBlue`
    Camel,
    /// `PrimaryBlue`
    Pascal,
    /// `primary_blue`
    Snake,
    /// `primary-blue`
    Kebab,
}

impl IdentifierStyle {
    pub const ALL: [IdentifierStyle; 4] = [
        IdentifierStyle::Camel,
        IdentifierStyle::Pascal,
        IdentifierStyle::Snake,
        IdentifierStyle::Kebab,
    ];

    /// Parse the token suffix naming a style (`camelcase`, `snakecase`, ...)
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "camelcase" => Some(IdentifierStyle::Camel),
            "pascalcase" => Some(IdentifierStyle::Pascal),
            "snakecase" => Some(IdentifierStyle::Snake),
            "kebabcase" => Some(IdentifierStyle::Kebab),
            _ => None,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            IdentifierStyle::Camel => "camelcase",
            IdentifierStyle::Pascal => "pascalcase",
            IdentifierStyle::Snake => "snakecase",
            IdentifierStyle::Kebab => "kebabcase",
        }
    }

    /// Render `name` in this style
    pub fn apply(&self, name: &str) -> String {
        let words = split_words(name);
        match self {
            IdentifierStyle::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_lowercase()
                    } else {
                        capitalize_word(w)
                    }
                })
                .collect(),
            IdentifierStyle::Pascal => words.iter().map(|w| capitalize_word(w)).collect(),
            IdentifierStyle::Snake => join_lowercase(&words, "_"),
            IdentifierStyle::Kebab => join_lowercase(&words, "-"),
        }
    }
}

fn join_lowercase(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Split a free-form name into words.
///
/// Boundaries: any non-alphanumeric character, a lowercase letter followed by
/// an uppercase one, the last capital of an acronym followed by lowercase
/// (`URLColor` -> `URL`, `Color`), and letter/digit transitions.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()))
                || (prev.is_numeric() != c.is_numeric());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

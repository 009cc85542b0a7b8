//! Token names to Swift identifiers.
//!
//! Figma names are free text (`background/primary`, `Button Normal`); the
//! generated code needs identifiers. Conversion is purely mechanical so
//! the same name always yields the same identifier, and collisions are the
//! designer's to resolve by renaming.

use serde::Deserialize;

/// Identifier convention for generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameStyle {
    CamelCase,
    SnakeCase,
}

impl Default for NameStyle {
    fn default() -> Self {
        NameStyle::CamelCase
    }
}

/// Reserved words that need backtick escaping when used as a Swift
/// identifier.
const SWIFT_KEYWORDS: &[&str] = &[
    "associatedtype",
    "as",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "init",
    "inout",
    "internal",
    "in",
    "is",
    "let",
    "nil",
    "open",
    "operator",
    "private",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throws",
    "throw",
    "true",
    "try",
    "typealias",
    "var",
    "where",
    "while",
];

/// Convert a token name into a Swift member identifier.
///
/// Names are split at non-alphanumeric characters; camel case additionally
/// preserves existing humps, snake case splits them. A leading digit gets
/// an underscore prefix and reserved words get backticks, so the result is
/// always usable after a `.` or a `var` keyword.
///
/// # Example
///
/// ```rust
/// use colorway_render::identifiers::{identifier, NameStyle};
///
/// assert_eq!(identifier("background/primary", NameStyle::CamelCase), "backgroundPrimary");
/// assert_eq!(identifier("background/primary", NameStyle::SnakeCase), "background_primary");
/// assert_eq!(identifier("default", NameStyle::CamelCase), "`default`");
/// ```
pub fn identifier(name: &str, style: NameStyle) -> String {
    let raw = raw_identifier(name, style);
    if SWIFT_KEYWORDS.contains(&raw.as_str()) {
        format!("`{raw}`")
    } else {
        raw
    }
}

/// Convert a token name into a Swift type-name prefix, e.g. `headline`
/// into `Headline`. Never backticked: callers append a suffix that rules
/// keywords out.
pub fn type_identifier(name: &str, style: NameStyle) -> String {
    upper_first(&raw_identifier(name, style))
}

fn raw_identifier(name: &str, style: NameStyle) -> String {
    let components: Vec<&str> = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|component| !component.is_empty())
        .collect();

    let mut result = match style {
        NameStyle::CamelCase => {
            let mut out = String::new();
            for (index, component) in components.iter().enumerate() {
                if index == 0 {
                    out.push_str(&lower_first(component));
                } else {
                    out.push_str(&upper_first(component));
                }
            }
            out
        }
        NameStyle::SnakeCase => {
            let words: Vec<String> = components
                .iter()
                .flat_map(|component| split_humps(component))
                .map(|word| word.to_lowercase())
                .collect();
            words.join("_")
        }
    };

    if result.is_empty() {
        return "_".to_string();
    }
    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Split one component at camel humps: `backgroundPrimary` becomes
/// `background` and `Primary`, `URLCode` becomes `URL` and `Code`.
fn split_humps(component: &str) -> Vec<String> {
    let chars: Vec<char> = component.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (index, &ch) in chars.iter().enumerate() {
        let boundary = index > 0
            && ch.is_uppercase()
            && (chars[index - 1].is_lowercase()
                || chars[index - 1].is_numeric()
                || chars.get(index + 1).is_some_and(|next| next.is_lowercase()));

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

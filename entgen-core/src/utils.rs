//! Naming utilities shared by the schema loader and the code generators.

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords (2024 edition)
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords (may be used in future)
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
    // Weak keywords
    "union",
];

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
///
/// Runs of capitals are kept together, so "UserID" becomes "user_id" and
/// "HTTPServer" becomes "http_server".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Pluralize the last word of a PascalCase or snake_case name
/// (e.g., "User" -> "Users", "GroupCategory" -> "GroupCategories").
///
/// Uncountable words are returned unchanged.
pub fn pluralize(s: &str) -> String {
    let split = last_word_start(s);
    let (head, word) = s.split_at(split);
    let lower = word.to_lowercase();

    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return s.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(single, _)| *single == lower) {
        let mut out = String::from(head);
        let mut chars = plural.chars();
        if let Some(first) = chars.next() {
            if word.starts_with(char::is_uppercase) {
                out.extend(first.to_uppercase());
            } else {
                out.push(first);
            }
            out.extend(chars);
        }
        return out;
    }

    let consonant_y = lower.ends_with('y')
        && !lower
            .chars()
            .rev()
            .nth(1)
            .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
    if consonant_y && lower.len() > 1 {
        return format!("{}ies", &s[..s.len() - 1]);
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{s}es");
    }

    format!("{s}s")
}

fn last_word_start(s: &str) -> usize {
    s.char_indices()
        .filter(|&(i, c)| i > 0 && (c.is_uppercase() || c == '_'))
        .map(|(i, c)| if c == '_' { i + 1 } else { i })
        .last()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("group-info"), "GroupInfo");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("FooBarBaz"), "foo_bar_baz");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_acronyms() {
        assert_eq!(to_snake_case("UserID"), "user_id");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("Address2Line"), "address2_line");
    }

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(pluralize("User"), "Users");
        assert_eq!(pluralize("Pet"), "Pets");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Status"), "Statuses");
        assert_eq!(pluralize("Match"), "Matches");
        assert_eq!(pluralize("user"), "users");
    }

    #[test]
    fn test_pluralize_y() {
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("GroupCategory"), "GroupCategories");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("group_category"), "group_categories");
    }

    #[test]
    fn test_pluralize_irregular() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("GroupPerson"), "GroupPeople");
        assert_eq!(pluralize("child"), "children");
    }

    #[test]
    fn test_pluralize_uncountable() {
        assert_eq!(pluralize("Info"), "Infos");
        assert_eq!(pluralize("Equipment"), "Equipment");
        assert_eq!(pluralize("CarSeries"), "CarSeries");
    }

    #[test]
    fn test_is_rust_keyword() {
        assert!(is_rust_keyword("fn"));
        assert!(is_rust_keyword("struct"));
        assert!(is_rust_keyword("gen"));
        assert!(!is_rust_keyword("hello"));
        assert!(!is_rust_keyword("user"));
    }
}

//! Text helpers backing slug derivation and input checks.

/// Derive a URL-safe slug from free text.
///
/// Lowercases, drops characters that are not ASCII alphanumeric or
/// separators, and collapses runs of whitespace, hyphens and underscores
/// into single hyphens with none left at either end.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
        // Everything else is dropped without acting as a separator.
    }

    slug
}

/// Pragmatic email shape check: no whitespace, a single `@` with a
/// non-empty local part, and a dot in the domain with non-empty parts
/// around the last one. Not a deliverability guarantee.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust 2024 Edition"), "rust-2024-edition");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("What's New in 1.75?"), "whats-new-in-175");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("a  -  b"), "a-b");
        assert_eq!(slugify("css__in__js"), "css-in-js");
    }

    #[test]
    fn slugify_trims_edge_separators() {
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("--dashes--"), "dashes");
    }

    #[test]
    fn slugify_of_pure_punctuation_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
        assert!(is_valid_email("tagged+inbox@example.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("reader@"));
        assert!(!is_valid_email("reader@nodot"));
        assert!(!is_valid_email("reader@.com"));
        assert!(!is_valid_email("reader@example."));
        assert!(!is_valid_email("two@signs@example.com"));
        assert!(!is_valid_email("spaced out@example.com"));
    }
}

//! Clean-up applied to provider search results.

use std::sync::OnceLock;

use regex::Regex;

/// Longest description shown on a summary card, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

fn markup_regex() -> Option<&'static Regex> {
    static MARKUP_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    MARKUP_REGEX
        .get_or_init(|| Regex::new(r"<[^>]*>").ok())
        .as_ref()
}

/// Remove markup tags and surrounding whitespace.
///
/// # Examples
/// ```
/// use recipes_backend::domain::discovery::strip_markup;
///
/// assert_eq!(strip_markup(" <b>Hearty</b> lentil soup "), "Hearty lentil soup");
/// ```
pub fn strip_markup(text: &str) -> String {
    match markup_regex() {
        Some(regex) => regex.replace_all(text, "").trim().to_owned(),
        None => text.trim().to_owned(),
    }
}

/// Cut `text` to [`MAX_DESCRIPTION_CHARS`] characters, marking the cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Markup-free description ready for display.
pub fn normalise_description(raw: &str) -> String {
    truncate_description(&strip_markup(raw))
}

/// Provider page URL derived from a recipe's title and numeric identifier.
///
/// # Examples
/// ```
/// use recipes_backend::domain::discovery::fallback_source_url;
///
/// assert_eq!(
///     fallback_source_url("Spicy Bean Chili", 716429),
///     "https://spoonacular.com/recipes/spicy-bean-chili-716429",
/// );
/// ```
pub fn fallback_source_url(title: &str, provider_id: i64) -> String {
    let slug = title.to_lowercase().replace(' ', "-");
    format!("https://spoonacular.com/recipes/{slug}-{provider_id}")
}

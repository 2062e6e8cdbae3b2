//! Country alias rewriting.

use once_cell::sync::Lazy;

use super::aliases::COUNTRY_ALIASES;

/// Alias tables with their replacement text lowercased once.
static LOWERCASE_COUNTRY_ALIASES: Lazy<Vec<(&'static str, String)>> = Lazy::new(|| {
    COUNTRY_ALIASES
        .iter()
        .map(|(alias, canonical)| (*alias, canonical.to_lowercase()))
        .collect()
});

/// Lowercase a question and rewrite every known country alias into the
/// lowercase canonical name.
///
/// Aliases are applied in table order, each one against the text as left by
/// the previous replacements. An alias that is a substring of a longer one
/// can therefore fire on part of a word or of an already rewritten name;
/// that behavior is kept as is.
pub fn normalize_question(question: &str) -> String {
    let mut text = question.to_lowercase();
    for (alias, canonical) in LOWERCASE_COUNTRY_ALIASES.iter() {
        if text.contains(alias) {
            text = text.replace(alias, canonical);
        }
    }
    text
}

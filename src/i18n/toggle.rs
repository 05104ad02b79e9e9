//! Language switch: sibling path in the other locale.

use crate::i18n::Locale;

/// The locale the language switch points to.
///
/// English switches to Finnish; every other locale switches to English.
pub fn toggle_locale(current: Locale) -> Locale {
    if current == Locale::ENGLISH {
        Locale::FINNISH
    } else {
        Locale::ENGLISH
    }
}

/// Replace the locale segment of `path` with the other locale.
///
/// Only the first path segment is considered. A path that does not start
/// with `current` is returned unchanged. Trailing slashes are dropped, since
/// page URLs never carry one.
///
/// ```ignore
/// assert_eq!(toggle_path("/en/help", Locale::ENGLISH), "/fi/help");
/// assert_eq!(toggle_path("/fi", Locale::FINNISH), "/en");
/// ```
pub fn toggle_path(path: &str, current: Locale) -> String {
    let Some(rest) = path.strip_prefix('/') else {
        return path.to_string();
    };
    let (first, tail) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    if first != current.code() {
        return path.to_string();
    }

    format!(
        "/{}{}",
        toggle_locale(current).code(),
        tail.trim_end_matches('/')
    )
}

//! Package-name sanitization for free-text install requests.
//!
//! Pure functions only: no I/O, no async.

/// Tokens stripped from free-text package names, in removal order.
///
/// Removal is literal substring removal, not character-class matching:
/// `&&` is removed but a lone `&` is kept.
pub const DISALLOWED_TOKENS: &[&str] = &[
    ";", "&&", "||", "|", ">", "<", "$", "`", "\"", "'", "(", ")", "{", "}", "[", "]", "\n", "\r",
];

/// Reduce a free-text package name to a single safe token.
///
/// Every disallowed token is removed, then only the first
/// whitespace-delimited segment is kept so `"foo bar"` cannot smuggle a
/// second install argument. Returns an empty string when nothing survives;
/// callers must reject that before composing a command.
///
/// One ordered removal pass can splice a new token together (`a&|&b` loses
/// its `|` after `&&` was already handled), so the pass is repeated until the
/// text stops changing. Each changing pass shortens the text, so this
/// terminates.
#[must_use]
pub fn sanitize_package_name(raw: &str) -> String {
    let mut current = strip_disallowed(raw);
    loop {
        let next = strip_disallowed(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Returns `true` if any disallowed token occurs in `text`.
#[must_use]
pub fn contains_disallowed(text: &str) -> bool {
    DISALLOWED_TOKENS.iter().any(|token| text.contains(token))
}

fn strip_disallowed(text: &str) -> String {
    DISALLOWED_TOKENS
        .iter()
        .fold(text.to_string(), |acc, token| acc.replace(token, ""))
}

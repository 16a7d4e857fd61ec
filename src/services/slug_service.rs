use std::sync::LazyLock;

use regex::Regex;

// Whitespace here also covers the C0 separators \x1c-\x1f, which Rust's `\s`
// and `str::trim` leave out. Combining marks and connector punctuation are
// not word characters.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s\x1c-\x1f-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_\x1c-\x1f]+").unwrap());
static REPEATED_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Lowercase, dash-separated form of an activity name.
///
/// - "Chess Club" -> "chess-club"
/// - "  Art & Design_Lab " -> "art-design-lab"
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = DISALLOWED.replace_all(lowered.trim_matches(is_space), "");
    let dashed = SEPARATORS.replace_all(&stripped, "-");
    let collapsed = REPEATED_DASHES.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

//! # PrognozRS Name Normalization
//!
//! File: bot/src/engine/normalize.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Team names arrive in whatever shape the user typed them: mixed case,
//! padded, with double spaces. Every comparison against the fixture table goes
//! through [`normalize_name`] first, and names that must be shown back to the
//! user without a stored display form go through [`title_case`].
//!
//! ```rust
//! assert_eq!(normalize_name("  Team   SPIRIT "), "team spirit");
//! assert_eq!(title_case("team spirit"), "Team Spirit");
//! ```
//!

/// Trims, lowercases and collapses every run of whitespace into one space.
///
/// The output is a fixed point: `normalize_name(normalize_name(s)) == normalize_name(s)`.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-cases a name the way Python's `str.title()` does.
///
/// Each run of cased letters starts with an upper-case letter and continues
/// in lower case. Any uncased character (spaces, digits, punctuation, and
/// letters without case such as CJK) starts a new run. So `"g2"` becomes
/// `"G2"`, `"x2y"` becomes `"X2Y"` and `"中a"` becomes `"中A"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for ch in name.chars() {
        if ch.is_lowercase() || ch.is_uppercase() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

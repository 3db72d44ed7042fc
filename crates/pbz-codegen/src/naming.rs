//! Identifier normalization for generated names and object keys.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Word characters are Unicode letters (`\p{L}`) and ASCII digits. Combining
// marks and letter-like numerals are not letters.
static WHOLE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}0-9]+$").expect("valid whole-word pattern"));
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\p{L}0-9])([\p{L}0-9]*)").expect("valid word-run pattern"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}0-9]").expect("valid non-word pattern"));

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Convert an arbitrary collection or field name into a PascalCase fragment.
///
/// A name made only of word characters keeps its casing apart from the first
/// character, so `myHTTPThing` becomes `MyHTTPThing`. Anything else is split
/// into runs of word characters; each run is capitalized and lower-cased, and
/// everything that is still not a word character afterwards is dropped:
/// `_authOrigins` becomes `Authorigins`.
#[must_use]
pub fn to_identifier(raw: &str) -> String {
    if WHOLE_WORD.is_match(raw) {
        return upper_first(raw);
    }

    let cased = WORD_RUN.replace_all(raw, |caps: &Captures<'_>| {
        let mut run = caps[1].to_uppercase();
        run.push_str(&caps[2].to_lowercase());
        run
    });
    // Case mapping can introduce combining marks (`ǰ` -> `J̌`).
    NON_WORD.replace_all(&cased, "").into_owned()
}

/// Quote a field key that would not be a valid bare object key.
///
/// Keys starting with a digit or containing `-` are wrapped in double quotes.
#[must_use]
pub fn sanitize_field_name(name: &str) -> String {
    let leading_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    if leading_digit || name.contains('-') {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

/// Name of the generated `as const` array holding a select field's members.
#[must_use]
pub fn option_enum_name(collection_name: &str, field_name: &str) -> String {
    format!(
        "{}{}Options",
        to_identifier(collection_name),
        to_identifier(field_name)
    )
}

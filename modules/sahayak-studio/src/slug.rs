//! Storage-safe identifiers derived from AI-suggested titles.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]+").unwrap());

/// Derive a storage object name from arbitrary human-readable text.
///
/// Lowercases, strips everything outside `[a-z0-9_]`/whitespace/hyphens,
/// collapses separator runs to a single underscore, truncates the base to
/// 50 characters, and appends an 8-hex uniqueness token. Total over any
/// input: an empty or all-punctuation title still yields `_<token>`.
/// Uniqueness is probabilistic via the token, not tracked in a registry.
pub fn make_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = STRIP_RE.replace_all(&lowered, "");
    let joined = SEPARATOR_RE.replace_all(&stripped, "_");
    let base: String = joined.trim_matches('_').chars().take(50).collect();
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{base}_{}", &uuid[..8])
}

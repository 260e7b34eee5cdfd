//! Pure functions over ordered string collections.
//!
//! Every input is normalized (trimmed, blanks dropped) before comparison and
//! every output is deduplicated in first-seen order. Nothing here mutates its
//! inputs.

use std::collections::HashSet;

/// Trim a raw property token.
pub fn normalize(s: &str) -> &str {
    s.trim()
}

/// Trim, drop empty strings, remove duplicates keeping first-seen order.
pub fn normalize_and_dedupe<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(list.len());
    let mut out = Vec::with_capacity(list.len());
    for raw in list {
        let v = normalize(raw.as_ref());
        if v.is_empty() {
            continue;
        }
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}

fn normalized_set<S: AsRef<str>>(list: &[S]) -> HashSet<&str> {
    list.iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// `a` followed by `b`, normalized and deduplicated.
pub fn union<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> Vec<String> {
    let joined: Vec<&str> = a
        .iter()
        .map(|s| s.as_ref())
        .chain(b.iter().map(|s| s.as_ref()))
        .collect();
    normalize_and_dedupe(&joined)
}

/// Elements of `a` not present in `b`, in `a`'s order.
pub fn difference<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> Vec<String> {
    let exclude = normalized_set(b);
    let kept: Vec<&str> = a
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !exclude.contains(s))
        .collect();
    normalize_and_dedupe(&kept)
}

/// Elements of `b` present in `a`.
///
/// Order follows `b`'s traversal, not `a`'s and not alphabetical. Callers
/// that display the result depend on this asymmetry, so keep it.
pub fn intersection<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> Vec<String> {
    let include = normalized_set(a);
    let kept: Vec<&str> = b
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| include.contains(s))
        .collect();
    normalize_and_dedupe(&kept)
}

/// Split two lists into their exclusive parts and their shared part.
///
/// Returns `(a − i, b − i, i)` where `i = intersection(a, b)`. With an empty
/// intersection the inputs come back normalized and otherwise unchanged.
pub fn extract_intersection<A: AsRef<str>, B: AsRef<str>>(
    a: &[A],
    b: &[B],
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let inter = intersection(a, b);
    if inter.is_empty() {
        return (normalize_and_dedupe(a), normalize_and_dedupe(b), inter);
    }
    (difference(a, &inter), difference(b, &inter), inter)
}

/// Append `value` unless already present. Returns true if it was added.
pub fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    if list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

/// Drop every occurrence of `value`. Returns true if anything was removed.
pub fn remove_all(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|v| v != value);
    list.len() != before
}

/// Sorted copy, lexicographic over the normalized strings.
pub fn sorted(list: &[String]) -> Vec<String> {
    let mut out = list.to_vec();
    out.sort();
    out
}

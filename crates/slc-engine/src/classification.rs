//! Overlap scoring between a query and the two classes.

use std::collections::HashSet;

use slc_core::models::Class;

use crate::set_algebra::{normalize, normalize_and_dedupe, union};

/// Query properties that are members of `class`, and how many there are.
pub fn score<S: AsRef<str>>(class: &Class, query: &[S]) -> (Vec<String>, usize) {
    let members: HashSet<&str> = class.properties.iter().map(|p| normalize(p)).collect();
    let hits: Vec<String> = normalize_and_dedupe(query)
        .into_iter()
        .filter(|p| members.contains(p.as_str()))
        .collect();
    let count = hits.len();
    (hits, count)
}

/// Pick the class with more hits.
///
/// No hits on either side gives an empty guess and no hits. A non-zero tie
/// also gives an empty guess, but surfaces the hits of both classes so the
/// user sees everything that matched.
pub fn choose<S: AsRef<str>>(class1: &Class, class2: &Class, query: &[S]) -> (String, Vec<String>) {
    let (hits1, score1) = score(class1, query);
    let (hits2, score2) = score(class2, query);

    match (score1, score2) {
        (0, 0) => (String::new(), Vec::new()),
        (s1, s2) if s1 > s2 => (class1.name.clone(), hits1),
        (s1, s2) if s2 > s1 => (class2.name.clone(), hits2),
        _ => (String::new(), union(&hits1, &hits2)),
    }
}

/// Human-readable rationale for a `choose` result.
pub fn explain(guess: &str, hits: &[String]) -> String {
    match (guess.is_empty(), hits.is_empty()) {
        (true, true) => "no matching properties; user confirmation required".to_string(),
        (true, false) => {
            "both classes matched equally; user confirmation required".to_string()
        }
        (false, _) => format!("more properties matched {guess}"),
    }
}

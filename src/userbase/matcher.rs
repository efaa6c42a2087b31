//! # Name Matching
//!
//! Every lookup (search, edit target, delete target) goes through [`find`].
//! Names are compared case-insensitively with a normalized Levenshtein
//! similarity in `0.0..=1.0`:
//!
//! ```text
//! similarity(a, b) = 1 - distance(a, b) / max(len(a), len(b))
//! ```
//!
//! The best distinct names at or above the cutoff are kept (at most
//! `limit`, highest score first) and every record carrying one of those names
//! is returned. Collapsing happens per name, never per record: two people
//! called "Dana" both come back for a query that selects "dana".

use crate::model::Record;

pub const DEFAULT_CUTOFF: f64 = 0.6;
pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    pub cutoff: f64,
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Records whose lower-cased name is one of the closest matches for `query`.
///
/// Results are grouped by matched name in descending similarity, and keep
/// collection order within a name.
pub fn find(query: &str, records: &[Record], options: MatchOptions) -> Vec<Record> {
    let names: Vec<String> = records.iter().map(|r| r.name.to_lowercase()).collect();
    let selected = close_matches(&query.to_lowercase(), names.as_slice(), options);

    selected
        .iter()
        .flat_map(|name| {
            records
                .iter()
                .zip(&names)
                .filter(move |(_, candidate)| *candidate == name)
                .map(|(record, _)| record.clone())
        })
        .collect()
}

/// Distinct candidates scoring at least `options.cutoff`, best first.
///
/// Equal scores keep the order in which candidates first appear.
pub fn close_matches<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    options: MatchOptions,
) -> Vec<String> {
    if options.limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(String, f64)> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if scored.iter().any(|(seen, _)| seen == candidate) {
            continue;
        }
        let score = similarity(query, candidate);
        if score >= options.cutoff {
            scored.push((candidate.to_string(), score));
        }
    }

    // Stable sort keeps first-seen order for ties.
    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    scored.truncate(options.limit);
    scored.into_iter().map(|(name, _)| name).collect()
}

/// Normalized Levenshtein similarity. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Age, NewUser, Record};

    fn records(names: &[&str]) -> Vec<Record> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Record::new(NewUser::new(*name, i as i64)).unwrap())
            .collect()
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity("alice", "alice"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn levenshtein_counts_edits() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars("alice"), &chars("alicia")), 2);
    }

    #[test]
    fn matches_case_insensitively() {
        let found = find("alice", &records(&["Alice", "Bob"]), MatchOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alice");
    }

    #[test]
    fn matches_close_spelling() {
        let found = find("alice", &records(&["Alicia", "Zeke"]), MatchOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alicia");
    }

    #[test]
    fn nothing_above_cutoff_is_empty() {
        let found = find("xyz123", &records(&["Alice", "Bob"]), MatchOptions::default());
        assert!(found.is_empty());
    }

    #[test]
    fn empty_collection_is_empty() {
        assert!(find("alice", &[], MatchOptions::default()).is_empty());
    }

    #[test]
    fn returns_every_record_under_a_matched_name() {
        let found = find("dana", &records(&["Dana", "Bob", "DANA"]), MatchOptions::default());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].age, Age::Years(0));
        assert_eq!(found[1].age, Age::Years(2));
    }

    #[test]
    fn orders_names_by_similarity_and_caps_count() {
        let candidates = ["marta", "mark", "maria", "marie", "mario"];
        let options = MatchOptions::default();
        let selected = close_matches("maria", &candidates, options);
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0], "maria");
        // marta, marie, mario all score 0.8; first-seen order wins.
        assert_eq!(selected[1], "marta");
        assert_eq!(selected[2], "marie");
    }

    #[test]
    fn exact_name_wins_even_with_tight_limit() {
        let options = MatchOptions {
            cutoff: 0.6,
            limit: 1,
        };
        let found = find("Bobby", &records(&["Bob", "Bobby", "Bobbi"]), options);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bobby");
    }

    #[test]
    fn zero_limit_selects_nothing() {
        let options = MatchOptions {
            cutoff: 0.0,
            limit: 0,
        };
        assert!(close_matches("a", &["a"], options).is_empty());
    }
}

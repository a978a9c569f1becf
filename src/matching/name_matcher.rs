//! Fuzzy name matching.
//!
//! Scores are on a 0-95 scale: 95 for names equal after normalization,
//! 10-95 for substring matches, and up to 85 by Levenshtein similarity.
//! Pairs differing in more than half their characters score 0.

use crate::domain::Name;

/// A stored name and how closely it matches the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub name: &'a Name,
    pub confidence: u8,
}

/// Ranks stored names by similarity to a query.
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher {
    min_confidence: u8,
}

impl NameMatcher {
    /// Lowest score a name needs to be suggested.
    pub const DEFAULT_MIN_CONFIDENCE: u8 = 40;

    pub fn new() -> Self {
        Self {
            min_confidence: Self::DEFAULT_MIN_CONFIDENCE,
        }
    }

    pub fn with_min_confidence(min_confidence: u8) -> Self {
        Self { min_confidence }
    }

    /// Best matches for `query`, highest confidence first, ties by name.
    pub fn find_matches<'a, I>(
        &self,
        query: &str,
        names: I,
        max_results: usize,
    ) -> Vec<NameMatch<'a>>
    where
        I: IntoIterator<Item = &'a Name>,
    {
        let query = Self::normalize_name(query);

        let mut results: Vec<NameMatch<'a>> = names
            .into_iter()
            .filter_map(|name| {
                let target = Self::normalize_name(name.as_str());
                let confidence = Self::calculate_fuzzy_score(&query, &target);
                (confidence > 0 && confidence >= self.min_confidence)
                    .then_some(NameMatch { name, confidence })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(b.name))
        });
        results.truncate(max_results);
        results
    }

    /// Convenience wrapper returning only the names.
    pub fn suggest<'a, I>(&self, query: &str, names: I, max_results: usize) -> Vec<&'a Name>
    where
        I: IntoIterator<Item = &'a Name>,
    {
        self.find_matches(query, names, max_results)
            .into_iter()
            .map(|m| m.name)
            .collect()
    }

    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Edit distance between two strings, counted in chars.
    fn levenshtein_distance(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
        let mut current = vec![0; b_chars.len() + 1];

        for (i, ca) in a.chars().enumerate() {
            current[0] = i + 1;
            for (j, cb) in b_chars.iter().enumerate() {
                let cost = usize::from(ca != *cb);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[b_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

//! # Session Log
//!
//! A [`SessionLog`] records one sentence per completed top-level action. It lives
//! exactly as long as one interactive session and is passed explicitly to every
//! action, so separate sessions (and tests) never share state.

use crate::model::ItemQuery;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionLog {
    entries: Vec<String>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        tracing::debug!(entry = %entry, "session action recorded");
        self.entries.push(entry);
    }

    pub fn record_listed(&mut self, total: usize) {
        self.record(format!("Listed {} items", total));
    }

    pub fn record_searched(&mut self, query: &ItemQuery) {
        let name = query.as_str();
        self.record(format!("Searched {} {}", indefinite_article(name), name));
    }

    pub fn record_browsed(&mut self, category: &str) {
        self.record(format!("Browsed the category {}", category.to_lowercase()));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Lines printed when the session ends.
    pub fn summary(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec!["In this session you have not done anything.".to_string()];
        }
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push("In this session you have:".to_string());
        lines.extend(
            self.entries
                .iter()
                .enumerate()
                .map(|(i, entry)| format!("{}. {}", i + 1, entry)),
        );
        lines
    }
}

/// `"an"` when the word starts with a vowel letter, `"a"` otherwise.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_follows_first_letter() {
        assert_eq!(indefinite_article("apple"), "an");
        assert_eq!(indefinite_article("banana"), "a");
        assert_eq!(indefinite_article("Umbrella"), "an");
        assert_eq!(indefinite_article("Exceptional router"), "an");
        assert_eq!(indefinite_article(""), "a");
    }

    #[test]
    fn starts_empty() {
        let log = SessionLog::new();
        assert!(log.is_empty());
        assert_eq!(
            log.summary(),
            vec!["In this session you have not done anything."]
        );
    }

    #[test]
    fn keeps_actions_in_order() {
        let mut log = SessionLog::new();
        log.record_searched(&ItemQuery::new("Almost New Router").unwrap());
        log.record_browsed("Laptop");

        assert_eq!(
            log.entries(),
            ["Searched an almost new router", "Browsed the category laptop"]
        );
    }

    #[test]
    fn summary_is_numbered() {
        let mut log = SessionLog::new();
        log.record_listed(48);
        log.record_searched(&ItemQuery::new("cheap mouse").unwrap());

        assert_eq!(
            log.summary(),
            vec![
                "In this session you have:",
                "1. Listed 48 items",
                "2. Searched a cheap mouse",
            ]
        );
    }
}

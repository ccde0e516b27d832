//! Ignore lists for nicks and usernames

use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Names whose messages are not relayed.
///
/// Entries written as `/pattern/` are case-insensitive regexes matched
/// anywhere in the name; every other entry must equal the name exactly.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    names: HashSet<String>,
    patterns: Vec<Regex>,
}

impl IgnoreList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = IgnoreList::default();
        for entry in entries {
            list.add(entry.as_ref());
        }
        list
    }

    /// Builds a list from one comma-separated string.
    pub fn parse(entries: &str) -> Self {
        Self::new(entries.split(','))
    }

    fn add(&mut self, entry: &str) {
        let entry = entry.trim();
        if entry.is_empty() {
            return;
        }

        let pattern = entry
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'));
        match pattern {
            Some(pattern) => match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(regex) => self.patterns.push(regex),
                Err(error) => {
                    tracing::warn!(entry, %error, "dropping invalid ignore pattern");
                }
            },
            None => {
                self.names.insert(entry.to_string());
            }
        }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.names.contains(name) || self.patterns.iter().any(|regex| regex.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.patterns.is_empty()
    }
}

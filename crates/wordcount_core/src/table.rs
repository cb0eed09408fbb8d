use std::collections::HashMap;

use crate::tokenize;

/// Word -> occurrence count, iterated in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    slots: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Lowercases `text`, tokenizes it and counts every word.
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let mut table = Self::default();
        for word in tokenize::words(&lowered) {
            table.record(word);
        }
        table
    }

    fn record(&mut self, word: &str) {
        if let Some(&slot) = self.slots.get(word) {
            self.entries[slot].1 += 1;
            return;
        }
        self.slots.insert(word.to_owned(), self.entries.len());
        self.entries.push((word.to_owned(), 1));
    }

    /// Count for an already-normalized word. Absent words have no entry, never zero.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.slots.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, count)| *count).max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    /// All entries by count descending, ties broken alphabetically.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

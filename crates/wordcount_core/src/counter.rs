use std::fmt;
use std::sync::OnceLock;

use wordcount_logging::{wc_debug, wc_trace};

use crate::{FrequencyTable, Result, WordCountError};

const DISPLAY_LIMIT: usize = 20;
const DISPLAY_PREFIX: usize = 17;

/// Counts words, case-insensitively, in one immutable string.
///
/// The frequency table is derived on first use and cached; the counter is
/// read-only afterwards and can be shared between threads.
#[derive(Debug, Clone)]
pub struct WordCounter {
    text: String,
    table: OnceLock<FrequencyTable>,
}

impl WordCounter {
    /// Fails with [`WordCountError::EmptyString`] for `""`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(WordCountError::EmptyString);
        }
        Ok(Self {
            text,
            table: OnceLock::new(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_counts(&self) -> &FrequencyTable {
        self.table.get_or_init(|| {
            let table = FrequencyTable::from_text(&self.text);
            wc_debug!(
                "Derived frequency table for {:?}: {} tokens, {} distinct",
                self.to_string(),
                table.total(),
                table.len()
            );
            table
        })
    }

    /// Occurrences of `word`, compared case-insensitively.
    pub fn frequency_for_word(&self, word: &str) -> Result<usize> {
        let word = word.to_lowercase();
        wc_trace!("frequency_for_word({word:?})");
        self.word_counts()
            .get(&word)
            .ok_or(WordCountError::WordNotFound { word })
    }

    /// The `n` most frequent words, count descending then alphabetical.
    ///
    /// Returns every word when `n` exceeds the number of distinct words.
    pub fn most_frequent_n_words(&self, n: i64) -> Result<Vec<(String, usize)>> {
        wc_trace!("most_frequent_n_words({n})");
        if n < 1 {
            return Err(WordCountError::NonPositiveCount);
        }
        let take = usize::try_from(n).unwrap_or(usize::MAX);
        let mut ranked = self.word_counts().ranked();
        ranked.truncate(take);
        Ok(ranked)
    }

    /// Every word sharing the highest count, in order of first occurrence.
    ///
    /// Unlike [`most_frequent_n_words`](Self::most_frequent_n_words) the ties
    /// are not sorted alphabetically.
    pub fn highest_frequency(&self) -> Vec<(String, usize)> {
        wc_trace!("highest_frequency()");
        let table = self.word_counts();
        let Some(max) = table.max_count() else {
            return Vec::new();
        };
        table
            .iter()
            .filter(|&(_, count)| count == max)
            .map(|(word, count)| (word.to_owned(), count))
            .collect()
    }
}

impl fmt::Display for WordCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.chars().count() > DISPLAY_LIMIT {
            let prefix: String = self.text.chars().take(DISPLAY_PREFIX).collect();
            write!(f, "{prefix}...")
        } else {
            f.write_str(&self.text)
        }
    }
}

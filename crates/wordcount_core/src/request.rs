//! Entry point for untyped input.
//!
//! Callers handing over JSON get the runtime type checks that the typed API
//! makes unnecessary: the text must be a JSON string and `n` a JSON integer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, WordCounter, WordCountError};

impl WordCounter {
    /// Rejects every non-string value (numbers, null, booleans, arrays, objects).
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Self::new(text.as_str()),
            _ => Err(WordCountError::NotText),
        }
    }
}

/// Reads `n` for [`WordCounter::most_frequent_n_words`] from JSON.
///
/// Booleans and floats are not integers. Integers above `i64::MAX` saturate.
pub fn count_from_json(value: &Value) -> Result<i64> {
    match value {
        Value::Number(number) if number.is_i64() => {
            number.as_i64().ok_or(WordCountError::CountNotInteger)
        }
        Value::Number(number) if number.is_u64() => Ok(i64::MAX),
        _ => Err(WordCountError::CountNotInteger),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    Frequency { word: String },
    MostFrequent { n: Value },
    Highest,
}

impl Query {
    pub fn run(&self, counter: &WordCounter) -> Result<Answer> {
        match self {
            Query::Frequency { word } => counter.frequency_for_word(word).map(Answer::Frequency),
            Query::MostFrequent { n } => {
                let n = count_from_json(n)?;
                counter.most_frequent_n_words(n).map(Answer::Words)
            }
            Query::Highest => Ok(Answer::Words(counter.highest_frequency())),
        }
    }
}

/// A text plus one query, as read from a request file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Request {
    pub text: Value,
    pub query: Query,
}

impl Request {
    pub fn run(&self) -> Result<Answer> {
        let counter = WordCounter::from_json(&self.text)?;
        self.query.run(&counter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Frequency(usize),
    Words(Vec<(String, usize)>),
}

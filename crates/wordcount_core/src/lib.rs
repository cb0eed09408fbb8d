//! Wordcount core: case-insensitive word frequencies over a single string.
mod counter;
mod error;
mod request;
mod table;
mod tokenize;

pub use counter::WordCounter;
pub use error::{ErrorKind, Result, WordCountError};
pub use request::{count_from_json, Answer, Query, Request};
pub use table::FrequencyTable;
pub use tokenize::tokenize;

//! A fluent builder that strings words together into a phrase.
//!
//! ```
//! use exercises::phrase::{say, say_word};
//!
//! assert_eq!(say().and("hi").and("there").phrase(), "hi there");
//! assert_eq!(say_word("well").and("hello").phrase(), "well hello");
//! assert_eq!(say().phrase(), "");
//! ```

use std::fmt;

/// Starts an empty phrase.
pub fn say() -> PhraseBuilder {
    PhraseBuilder::default()
}

/// Starts a phrase with `word` as its first word.
pub fn say_word(word: impl Into<String>) -> PhraseBuilder {
    say().and(word)
}

/// Accumulates words. Each call to [`and`][PhraseBuilder::and] gives back a
/// new builder, so partially built phrases can be reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseBuilder {
    words: Vec<String>,
}

impl PhraseBuilder {
    /// Appends `word` to the phrase.
    #[must_use]
    pub fn and(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    /// The words so far, separated by single spaces.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for PhraseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

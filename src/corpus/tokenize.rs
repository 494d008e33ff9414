// Tokenizer/normalizer: raw text to a stream of clean terms.
//
// The cleaning order is fixed and load-bearing for reproducibility:
//
//   1. lowercase the text
//   2. extract alphanumeric runs (everything else is a separator)
//   3. drop tokens that exactly match a stop word
//   4. strip digit characters from what remains
//   5. drop tokens that became empty or now match a stop word
//
// The stop-word check runs twice. The pre-strip check catches stop entries
// written with digits ("cpi2021" matches a literal "cpi2021"). The post-strip
// check catches tokens that only become stop words once their digits are
// gone: "q3" is not on the English list, but its stripped form "q" is.

use std::collections::HashSet;

/// The stop-word set tokens are filtered against. Lookup is exact-match on
/// the lowercased alphanumeric run, both before and after digits are
/// stripped.
#[derive(Debug, Clone, Default)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    /// Build from any iterator of words. Entries are lowercased so the set
    /// matches the lowercased token stream.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// The English list from the `stop-words` crate.
    pub fn english() -> Self {
        Self::new(stop_words::get(stop_words::LANGUAGE::English))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tokenize one document's text.
///
/// Pure function of (text, stop words): the returned iterator can be
/// recreated at will and always yields the same sequence. Every yielded token
/// is lowercase, non-empty, free of digits and punctuation, and absent from
/// the stop-word set.
pub fn tokens<'a>(text: &'a str, stop: &'a StopWords) -> impl Iterator<Item = String> + 'a {
    let lowered = text.to_lowercase();
    // Alphanumeric runs only; unicode-aware so "économie" stays one token.
    let mut runs = Vec::new();
    let mut current = String::new();
    for c in lowered.chars() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs.into_iter().filter_map(move |run| {
        if stop.contains(&run) {
            return None;
        }
        let stripped: String = run.chars().filter(|c| !c.is_numeric()).collect();
        if stripped.is_empty() || stop.contains(&stripped) {
            None
        } else {
            Some(stripped)
        }
    })
}

use std::{collections::HashMap, fmt};

/// Number of consecutive tokens in an n-gram.
pub const NGRAM_SIZE: usize = 3;
/// Number of n-grams kept per author.
pub const TOP_NGRAMS: usize = 5;
/// Characters removed from every token, wherever they occur.
pub const STRIPPED_CHARS: [char; 4] = [',', '.', '!', '?'];

/// A window of [`NGRAM_SIZE`] consecutive tokens from one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NGram {
    words: [String; NGRAM_SIZE],
}

impl NGram {
    pub fn new(words: [String; NGRAM_SIZE]) -> Self {
        Self { words }
    }

    fn from_window(window: &[String]) -> Self {
        Self {
            words: [window[0].clone(), window[1].clone(), window[2].clone()],
        }
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

impl<'a> From<[&'a str; NGRAM_SIZE]> for NGram {
    fn from(words: [&'a str; NGRAM_SIZE]) -> Self {
        Self::new(words.map(str::to_owned))
    }
}

/// Split a commit message into lower-cased tokens stripped of `,.!?`.
pub fn tokenize(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.replace(&STRIPPED_CHARS[..], ""))
        .filter(|token| !token.trim().is_empty())
        .collect()
}

/// All n-grams of one message, left to right.
pub fn message_ngrams(message: &str) -> Vec<NGram> {
    tokenize(message)
        .windows(NGRAM_SIZE)
        .map(NGram::from_window)
        .collect()
}

/// Count each distinct n-gram, ordered by first occurrence.
fn count_ngrams<I>(ngrams: I) -> Vec<(NGram, usize)>
where
    I: IntoIterator<Item = NGram>,
{
    let mut positions: HashMap<NGram, usize> = HashMap::new();
    let mut counts: Vec<(NGram, usize)> = Vec::new();

    for ngram in ngrams {
        match positions.get(&ngram) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(ngram.clone(), counts.len());
                counts.push((ngram, 1));
            }
        }
    }

    counts
}

/// Most frequent n-grams across an author's messages, most frequent first.
///
/// Counts are stable-sorted ascending and the result is then reversed, so
/// among equally frequent n-grams the one seen *last* comes first. This
/// differs from a stable descending sort, which would keep first-seen order.
pub fn top_ngrams<S: AsRef<str>>(messages: &[S]) -> Vec<NGram> {
    let mut counts = count_ngrams(
        messages
            .iter()
            .flat_map(|message| message_ngrams(message.as_ref())),
    );

    counts.sort_by_key(|(_, count)| *count);
    counts.reverse();

    counts
        .into_iter()
        .take(TOP_NGRAMS)
        .map(|(ngram, _)| ngram)
        .collect()
}

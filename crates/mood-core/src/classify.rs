//! Lexical sentiment classifier.
//!
//! Each whitespace-separated token of the lower-cased input is matched by
//! prefix against two stem lists. A match counts towards its polarity, or
//! towards the opposite one when the token is negated. Negation is either the
//! standalone negation word immediately before the token, or the token itself
//! starting with the negation prefix. The prefix test looks at the start of the
//! whole token, not at where the stem matched, so `ненавижу` (a negative stem
//! that happens to begin with `не`) counts as positive.
//!
//! The classifier is total: every input, including the empty string, yields
//! exactly one [`Sentiment`].

use std::sync::LazyLock;

use serde::Deserialize;

use crate::review::Sentiment;

const POSITIVE_STEMS: &[&str] = &[
  "хорош",
  "люблю",
  "любим",
  "отличн",
  "обожа",
  "прекрасн",
  "замечательн",
  "классн",
  "кайф",
  "приятн",
];

const NEGATIVE_STEMS: &[&str] = &["плох", "ужас", "ненавиж", "отвра", "отстой"];

const NEGATION: &str = "не";

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::default);

/// Classify `text` with the built-in lexicon.
pub fn classify(text: &str) -> Sentiment { DEFAULT_LEXICON.classify(text) }

// ─── Lexicon ─────────────────────────────────────────────────────────────────

/// Stem lists and negation markers driving [`Lexicon::classify`].
///
/// Deserialisable so the server can take stems from its config file; any
/// field left out falls back to the built-in Russian lexicon. Stems and
/// markers are lower-cased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLexicon")]
pub struct Lexicon {
  positive:        Vec<String>,
  negative:        Vec<String>,
  negation_prefix: String,
  negation_word:   String,
}

impl Default for Lexicon {
  fn default() -> Self { RawLexicon::default().into() }
}

impl Lexicon {
  /// Build a lexicon from custom stem lists, keeping the default negation
  /// markers.
  pub fn new<P, N>(positive: P, negative: N) -> Self
  where
    P: IntoIterator,
    P::Item: Into<String>,
    N: IntoIterator,
    N::Item: Into<String>,
  {
    RawLexicon {
      positive: positive.into_iter().map(Into::into).collect(),
      negative: negative.into_iter().map(Into::into).collect(),
      ..RawLexicon::default()
    }
    .into()
  }

  /// Replace both negation markers.
  pub fn with_negation(
    mut self,
    prefix: impl Into<String>,
    word: impl Into<String>,
  ) -> Self {
    self.negation_prefix = prefix.into().to_lowercase();
    self.negation_word = word.into().to_lowercase();
    self
  }

  pub fn positive_stems(&self) -> &[String] { &self.positive }

  pub fn negative_stems(&self) -> &[String] { &self.negative }

  /// Assign a sentiment label to `text`.
  pub fn classify(&self, text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = tokenize(&lowered).collect();

    let mut tally = Tally::default();
    for (i, token) in tokens.iter().enumerate() {
      let Some(polarity) = self.polarity(token) else {
        continue;
      };

      let negated = self.is_self_negated(token)
        || i.checked_sub(1).is_some_and(|prev| tokens[prev] == self.negation_word);

      tally.record(if negated { polarity.inverted() } else { polarity });
    }

    tally.verdict()
  }

  /// Raw polarity of a token. Positive stems take precedence.
  fn polarity(&self, token: &str) -> Option<Polarity> {
    if self.positive.iter().any(|stem| token.starts_with(stem.as_str())) {
      Some(Polarity::Positive)
    } else if self.negative.iter().any(|stem| token.starts_with(stem.as_str())) {
      Some(Polarity::Negative)
    } else {
      None
    }
  }

  fn is_self_negated(&self, token: &str) -> bool {
    !self.negation_prefix.is_empty()
      && token.starts_with(self.negation_prefix.as_str())
  }
}

/// Split on Unicode whitespace and the ASCII information separators
/// (U+001C..=U+001F), dropping empty pieces.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
  text
    .split(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
    .filter(|token| !token.is_empty())
}

// ─── Config shape ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct RawLexicon {
  positive:        Vec<String>,
  negative:        Vec<String>,
  negation_prefix: String,
  negation_word:   String,
}

impl Default for RawLexicon {
  fn default() -> Self {
    Self {
      positive:        POSITIVE_STEMS.iter().map(|s| (*s).to_owned()).collect(),
      negative:        NEGATIVE_STEMS.iter().map(|s| (*s).to_owned()).collect(),
      negation_prefix: NEGATION.to_owned(),
      negation_word:   NEGATION.to_owned(),
    }
  }
}

impl From<RawLexicon> for Lexicon {
  fn from(raw: RawLexicon) -> Self {
    // An empty stem would match every token.
    let normalise = |stems: Vec<String>| {
      stems
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
    };
    Self {
      positive:        normalise(raw.positive),
      negative:        normalise(raw.negative),
      negation_prefix: raw.negation_prefix.trim().to_lowercase(),
      negation_word:   raw.negation_word.trim().to_lowercase(),
    }
  }
}

// ─── Counting ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
  Positive,
  Negative,
}

impl Polarity {
  fn inverted(self) -> Self {
    match self {
      Self::Positive => Self::Negative,
      Self::Negative => Self::Positive,
    }
  }
}

#[derive(Debug, Default)]
struct Tally {
  positive: usize,
  negative: usize,
}

impl Tally {
  fn record(&mut self, polarity: Polarity) {
    match polarity {
      Polarity::Positive => self.positive += 1,
      Polarity::Negative => self.negative += 1,
    }
  }

  fn verdict(&self) -> Sentiment {
    use std::cmp::Ordering;
    match self.positive.cmp(&self.negative) {
      Ordering::Greater => Sentiment::Positive,
      Ordering::Less => Sentiment::Negative,
      Ordering::Equal => Sentiment::Neutral,
    }
  }
}

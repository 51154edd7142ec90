//! Lexical complexity heuristic used to pick a model

use std::collections::HashSet;
use log::info;

pub const TECHNICAL_TERMS: [&str; 6] = [
  "algorithm",
  "quantum",
  "blockchain",
  "neural",
  "genome",
  "cryptocurrency",
];

/// Scores above this pick the larger model
pub const EXPRESS_THRESHOLD: f64 = 0.6;
pub const FACTOR_WEIGHT: f64 = 0.2;

/// The five normalized signals behind a complexity score, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityBreakdown
{   pub length: f64
  , pub unique_words: f64
  , pub word_length: f64
  , pub technical_terms: f64
  , pub sentence_length: f64
}

impl ComplexityBreakdown
{   pub fn of(topic: &str) -> Self
    {   let lowered = topic.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        let length = ratio(topic.chars().count() as f64, 100.0);

        let unique_words = if words.is_empty()
        {   0.0
        } else
        {   let unique: HashSet<&str> = words.iter().copied().collect();
            unique.len() as f64 / words.len() as f64
        };

        let word_length = if words.is_empty()
        {   0.0
        } else
        {   let chars: usize = words.iter()
              .map(|w| w.chars().count())
              .sum();
            ratio(chars as f64 / words.len() as f64, 10.0)
        };

        let technical_terms = TECHNICAL_TERMS.iter()
          .filter(|term| lowered.contains(*term))
          .count() as f64 / TECHNICAL_TERMS.len() as f64;

        let sentences = split_sentences(topic);
        let sentence_length = if sentences.is_empty()
        {   0.0
        } else
        {   let words_in_sentences: usize = sentences.iter()
              .map(|s| s.split_whitespace().count())
              .sum();
            ratio(
              words_in_sentences as f64 / sentences.len() as f64,
              20.0
            )
        };

        ComplexityBreakdown
        {   length
          , unique_words
          , word_length
          , technical_terms
          , sentence_length
        }
    }

    pub fn score(&self) -> f64
    {   let score = self.length * FACTOR_WEIGHT
          + self.unique_words * FACTOR_WEIGHT
          + self.word_length * FACTOR_WEIGHT
          + self.technical_terms * FACTOR_WEIGHT
          + self.sentence_length * FACTOR_WEIGHT;
        score.clamp(0.0, 1.0)
    }
}

fn ratio(value: f64, cap: f64) -> f64
{   (value / cap).min(1.0)
}

/// Split on runs of `.`, `!` and `?`.
/// Text after the last run, even empty, is its own sentence.
fn split_sentences(text: &str) -> Vec<&str>
{   let mut sentences = Vec::new();
    let mut start = 0;
    let mut in_delimiters = false;

    for (i, c) in text.char_indices()
    {   let is_delimiter = matches!(c, '.' | '!' | '?');
        if is_delimiter && !in_delimiters
        {   sentences.push(&text[start..i]);
            in_delimiters = true;
        } else if !is_delimiter && in_delimiters
        {   start = i;
            in_delimiters = false;
        }
    }

    if in_delimiters
    {   sentences.push("");
    } else
    {   sentences.push(&text[start..]);
    }
    sentences
}

/// Deterministic complexity score in [0, 1]
pub fn calculate_complexity_score(topic: &str) -> f64
{   ComplexityBreakdown::of(topic).score()
}

/// Model for a precomputed score
pub fn model_for_score(score: f64) -> &'static str
{   if score > EXPRESS_THRESHOLD
    {   crate::EXPRESS_MODEL_ID
    } else
    {   crate::LITE_MODEL_ID
    }
}

/// Model picked for a topic, with the score that picked it
#[derive(Debug, Clone, PartialEq)]
pub struct ModelChoice
{   pub model_id: &'static str
  , pub score: f64
}

pub fn select_model(topic: &str) -> ModelChoice
{   let score = calculate_complexity_score(topic);
    info!("Complexity score: {}", score);
    ModelChoice
    {   model_id: model_for_score(score)
      , score
    }
}

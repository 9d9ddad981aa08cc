//! Polarity and subjectivity from an adjective lexicon.
//!
//! Each known word produces an assessment. A known adverb ("very") rescales the
//! next known word instead of standing alone, a negation ("not") turns the
//! following assessment into half its opposite, and an exclamation mark boosts
//! the previous assessment. The document score is the mean over assessments.

use super::is_negation_contraction;
use super::lexicon::{PATTERN_LEXICON, PATTERN_NEGATIONS};

/// Negated assessments become this fraction of their opposite ("not good" is slightly bad).
const NEGATION_FACTOR: f64 = -0.5;
const EXCLAMATION_BOOST: f64 = 1.25;

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

fn is_negation(word: &str) -> bool {
    PATTERN_NEGATIONS.contains(&word) || is_negation_contraction(word)
}

/// Returns `(polarity, subjectivity)` for already tokenized text.
pub(crate) fn polarity_subjectivity(tokens: &[String]) -> (f64, f64) {
    let mut assessments: Vec<Assessment> = Vec::new();
    let mut modifier = false;
    let mut negation = false;

    for token in tokens {
        let word = token.to_lowercase();

        if word == "!" {
            if let Some(last) = assessments.last_mut() {
                last.polarity = (last.polarity * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
            }
            continue;
        }

        match PATTERN_LEXICON.get(word.as_str()) {
            Some(entry) => {
                match assessments.last_mut() {
                    Some(last) if modifier => {
                        last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                        last.subjectivity = (entry.subjectivity * last.intensity).clamp(-1.0, 1.0);
                        last.intensity = entry.intensity;
                    }
                    _ => assessments.push(Assessment {
                        polarity: entry.polarity,
                        subjectivity: entry.subjectivity,
                        intensity: entry.intensity,
                        negated: false,
                    }),
                }

                if negation {
                    if let Some(last) = assessments.last_mut() {
                        last.intensity = if last.intensity == 0.0 {
                            1.0
                        } else {
                            1.0 / last.intensity
                        };
                        last.negated = true;
                    }
                }

                modifier = entry.modifier;
                negation = is_negation(&word);
            }
            None => {
                if is_negation(&word) {
                    negation = true;
                } else if negation && word.trim_matches('\'').chars().count() > 1 {
                    // Negation survives short filler words ("not a good").
                    negation = false;
                }

                if negation && modifier {
                    // "really not good"
                    if let Some(last) = assessments.last_mut() {
                        last.negated = true;
                    }
                    negation = false;
                } else if modifier && word.chars().count() > 2 {
                    modifier = false;
                }
            }
        }
    }

    if assessments.is_empty() {
        return (0.0, 0.0);
    }

    let count = assessments.len() as f64;
    let polarity: f64 = assessments
        .iter()
        .map(|a| {
            if a.negated {
                a.polarity * NEGATION_FACTOR
            } else {
                a.polarity
            }
        })
        .sum::<f64>()
        / count;
    let subjectivity: f64 = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

    (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
}

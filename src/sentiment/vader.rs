//! Rule-based compound sentiment in the style of VADER.
//!
//! Word valences (-4..=4) are adjusted by preceding boosters, ALL-CAPS emphasis,
//! negations within three words, "but" contrast and trailing punctuation, then
//! summed and squashed into [-1, 1].

use super::is_negation_contraction;
use super::lexicon::{BOOSTERS, VADER_LEXICON, VADER_NEGATIONS};

const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
/// Approximates the maximum expected sum of valences.
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
/// Boosters further away from the sentiment word count for less.
const DISTANCE_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Compound score for `text`, given its tokens.
pub(crate) fn compound(text: &str, tokens: &[String]) -> f64 {
    let words: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|token| *token != "!" && *token != "?")
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let lower: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
    let cap_differential = has_cap_differential(&words);

    let mut sentiments = Vec::with_capacity(words.len());
    for (i, word) in lower.iter().enumerate() {
        if BOOSTERS.contains_key(word.as_str()) {
            sentiments.push(0.0);
            continue;
        }
        if word == "kind" && lower.get(i + 1).is_some_and(|next| next == "of") {
            sentiments.push(0.0);
            continue;
        }
        sentiments.push(valence(&words, &lower, i, cap_differential));
    }

    apply_but_contrast(&lower, &mut sentiments);

    let mut sum: f64 = sentiments.iter().sum();
    let emphasis = punctuation_emphasis(text);
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }

    normalize(sum)
}

fn valence(words: &[&str], lower: &[String], i: usize, cap_differential: bool) -> f64 {
    let item = lower[i].as_str();
    let Some(&base) = VADER_LEXICON.get(item) else {
        return 0.0;
    };

    // "no" in front of another sentiment word negates it instead of scoring itself
    if item == "no"
        && lower
            .get(i + 1)
            .is_some_and(|next| VADER_LEXICON.contains_key(next.as_str()))
    {
        return 0.0;
    }

    let mut valence = if preceded_by_no(lower, i) {
        base * NEGATION_SCALAR
    } else {
        base
    };

    if cap_differential && is_all_caps(words[i]) {
        valence += if valence > 0.0 {
            CAPS_INCREMENT
        } else {
            -CAPS_INCREMENT
        };
    }

    for distance in 1..=3 {
        if i < distance {
            break;
        }
        let previous = lower[i - distance].as_str();
        if VADER_LEXICON.contains_key(previous) {
            continue;
        }

        let scalar = booster_scalar(words[i - distance], previous, valence, cap_differential);
        valence += scalar * DISTANCE_DECAY[distance - 1];
        valence = negation_check(valence, lower, distance, i);
    }

    least_check(valence, lower, i)
}

fn preceded_by_no(lower: &[String], i: usize) -> bool {
    (i > 0 && lower[i - 1] == "no")
        || (i > 1 && lower[i - 2] == "no")
        || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
}

fn booster_scalar(word: &str, lower: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(&base) = BOOSTERS.get(lower) else {
        return 0.0;
    };

    let mut scalar = if valence < 0.0 { -base } else { base };
    if cap_differential && is_all_caps(word) {
        scalar += if valence > 0.0 {
            CAPS_INCREMENT
        } else {
            -CAPS_INCREMENT
        };
    }
    scalar
}

fn is_negated(word: &str) -> bool {
    VADER_NEGATIONS.contains(word) || is_negation_contraction(word)
}

fn negation_check(valence: f64, lower: &[String], distance: usize, i: usize) -> f64 {
    let at = |offset: usize| lower[i - offset].as_str();
    let softener = |word: &str| matches!(word, "so" | "this");

    match distance {
        1 if is_negated(at(1)) => valence * NEGATION_SCALAR,
        2 if at(2) == "never" && softener(at(1)) => valence * 1.25,
        2 if at(2) == "without" && at(1) == "doubt" => valence,
        2 if is_negated(at(2)) => valence * NEGATION_SCALAR,
        3 if at(3) == "never" && (softener(at(2)) || softener(at(1))) => valence * 1.25,
        3 if at(3) == "without" && (at(2) == "doubt" || at(1) == "doubt") => valence,
        3 if is_negated(at(3)) => valence * NEGATION_SCALAR,
        _ => valence,
    }
}

/// "least" negates the next word, except in "at least" and "very least".
fn least_check(valence: f64, lower: &[String], i: usize) -> f64 {
    if i == 0 || lower[i - 1] != "least" || VADER_LEXICON.contains_key("least") {
        return valence;
    }
    if i > 1 && matches!(lower[i - 2].as_str(), "at" | "very") {
        return valence;
    }
    valence * NEGATION_SCALAR
}

/// Words before the first "but" count half, words after it count one and a half.
fn apply_but_contrast(lower: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lower.iter().position(|word| word == "but") else {
        return;
    };

    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but_index {
            *sentiment *= 0.5;
        } else if index > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_WEIGHT + question_emphasis
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// Some, but not all, words are shouted.
fn has_cap_differential(words: &[&str]) -> bool {
    let shouted = words.iter().filter(|word| is_all_caps(word)).count();
    shouted > 0 && shouted < words.len()
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

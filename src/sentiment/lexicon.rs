//! Fixed word lists for both analyzers.
//!
//! The tables are compiled in and turned into lookup maps once per process.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Entry in the adjective lexicon used by the pattern analyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
    /// Adverbs that scale the next known word by `intensity`.
    pub modifier: bool,
}

const fn adj(polarity: f64, subjectivity: f64) -> PatternEntry {
    PatternEntry {
        polarity,
        subjectivity,
        intensity: 1.0,
        modifier: false,
    }
}

const fn adv(polarity: f64, subjectivity: f64, intensity: f64) -> PatternEntry {
    PatternEntry {
        polarity,
        subjectivity,
        intensity,
        modifier: true,
    }
}

#[rustfmt::skip]
const PATTERN_WORDS: &[(&str, PatternEntry)] = &[
    // Positive
    ("good", adj(0.7, 0.6)), ("great", adj(0.8, 0.75)), ("best", adj(1.0, 0.3)),
    ("better", adj(0.5, 0.5)), ("excellent", adj(1.0, 1.0)), ("amazing", adj(0.6, 0.9)),
    ("awesome", adj(1.0, 1.0)), ("wonderful", adj(1.0, 1.0)), ("fantastic", adj(0.4, 0.9)),
    ("perfect", adj(1.0, 1.0)), ("beautiful", adj(0.85, 1.0)), ("lovely", adj(0.5, 0.75)),
    ("nice", adj(0.6, 1.0)), ("happy", adj(0.8, 1.0)), ("glad", adj(0.5, 1.0)),
    ("proud", adj(0.8, 1.0)), ("brilliant", adj(0.9, 1.0)), ("impressive", adj(1.0, 1.0)),
    ("incredible", adj(0.9, 0.9)), ("love", adj(0.5, 0.6)), ("loved", adj(0.7, 0.8)),
    ("lucky", adj(0.333, 1.0)), ("fun", adj(0.3, 0.2)), ("funny", adj(0.25, 1.0)),
    ("interesting", adj(0.5, 0.5)), ("exciting", adj(0.3, 0.8)), ("excited", adj(0.375, 0.75)),
    ("cool", adj(0.35, 0.65)), ("fair", adj(0.7, 0.9)), ("favorite", adj(0.5, 1.0)),
    ("strong", adj(0.433, 0.733)), ("top", adj(0.5, 0.5)), ("winning", adj(0.5, 0.75)),
    ("easy", adj(0.433, 0.833)), ("free", adj(0.4, 0.8)), ("right", adj(0.286, 0.536)),
    ("true", adj(0.35, 0.65)), ("sure", adj(0.5, 0.889)), ("important", adj(0.4, 1.0)),
    ("superb", adj(1.0, 1.0)), ("outstanding", adj(0.5, 0.5)), ("magnificent", adj(1.0, 1.0)),
    ("pleasant", adj(0.733, 0.967)), ("positive", adj(0.227, 0.545)), ("successful", adj(0.75, 0.95)),
    ("win", adj(0.8, 0.4)), ("clean", adj(0.367, 0.683)), ("new", adj(0.136, 0.455)),
    ("real", adj(0.2, 0.3)), ("first", adj(0.25, 0.333)), ("safe", adj(0.5, 0.5)),
    ("smart", adj(0.214, 0.643)), ("kind", adj(0.6, 0.9)), ("fine", adj(0.417, 0.5)),
    ("classic", adj(0.167, 0.167)), ("thankful", adj(0.5, 0.5)), ("grateful", adj(0.5, 0.5)),
    // Negative
    ("bad", adj(-0.7, 0.667)), ("worse", adj(-0.4, 0.6)), ("worst", adj(-1.0, 1.0)),
    ("terrible", adj(-1.0, 1.0)), ("horrible", adj(-1.0, 1.0)), ("awful", adj(-1.0, 1.0)),
    ("poor", adj(-0.4, 0.6)), ("sad", adj(-0.5, 1.0)), ("angry", adj(-0.5, 1.0)),
    ("boring", adj(-1.0, 1.0)), ("stupid", adj(-0.8, 1.0)), ("ugly", adj(-0.7, 1.0)),
    ("hate", adj(-0.8, 0.9)), ("wrong", adj(-0.5, 0.9)), ("crazy", adj(-0.6, 0.9)),
    ("disappointing", adj(-0.6, 0.7)), ("disappointed", adj(-0.75, 0.75)), ("sick", adj(-0.714, 0.857)),
    ("dead", adj(-0.2, 0.4)), ("weak", adj(-0.375, 0.625)), ("serious", adj(-0.333, 0.667)),
    ("hard", adj(-0.292, 0.542)), ("little", adj(-0.1875, 0.5)), ("pathetic", adj(-1.0, 1.0)),
    ("annoying", adj(-0.8, 0.9)), ("unfair", adj(-0.5, 0.75)), ("dirty", adj(-0.6, 0.8)),
    ("dangerous", adj(-0.6, 0.9)), ("scary", adj(-0.5, 1.0)), ("negative", adj(-0.3, 0.4)),
    ("shameful", adj(-1.0, 1.0)), ("embarrassing", adj(-0.6, 0.9)), ("lame", adj(-0.5, 0.75)),
    ("ridiculous", adj(-0.333, 1.0)), ("unlucky", adj(-0.5, 0.75)), ("painful", adj(-0.7, 0.9)),
    ("tired", adj(-0.4, 0.7)), ("lost", adj(-0.2, 0.4)), ("broken", adj(-0.4, 0.4)),
    ("useless", adj(-0.5, 0.2)), ("fake", adj(-0.5, 1.0)), ("slow", adj(-0.3, 0.4)),
    // Adverb modifiers
    ("very", adv(0.2, 0.3, 1.3)), ("really", adv(0.2, 0.2, 1.3)), ("extremely", adv(0.0125, 0.5, 1.5)),
    ("so", adv(0.0, 0.0, 1.3)), ("too", adv(0.0, 0.0, 1.4)), ("quite", adv(0.0, 0.0, 1.1)),
    ("incredibly", adv(0.9, 0.9, 1.5)), ("absolutely", adv(0.2, 0.9, 1.5)), ("totally", adv(0.0, 0.75, 1.2)),
    ("highly", adv(0.16, 0.54, 1.2)), ("super", adv(0.333, 0.667, 1.2)), ("truly", adv(0.0, 0.0, 1.3)),
    ("most", adv(0.5, 0.5, 1.2)), ("more", adv(0.5, 0.5, 1.1)), ("slightly", adv(-0.167, 0.167, 0.6)),
    ("somewhat", adv(0.0, 0.0, 0.8)), ("barely", adv(0.0, 0.0, 0.5)), ("less", adv(-0.167, 0.067, 0.8)),
];

/// Words that flip the next assessment, besides any `n't` contraction.
pub const PATTERN_NEGATIONS: &[&str] = &["no", "not", "never", "cannot"];

pub static PATTERN_LEXICON: LazyLock<HashMap<&'static str, PatternEntry>> =
    LazyLock::new(|| PATTERN_WORDS.iter().copied().collect());

/// Valence on the -4..=4 scale used by the rule-based analyzer.
#[rustfmt::skip]
const VADER_WORDS: &[(&str, f64)] = &[
    // Positive
    ("good", 1.9), ("great", 3.1), ("best", 3.2), ("better", 1.9), ("excellent", 2.7),
    ("amazing", 2.8), ("awesome", 3.1), ("wonderful", 2.7), ("fantastic", 2.6), ("perfect", 2.7),
    ("beautiful", 2.9), ("lovely", 2.8), ("nice", 1.8), ("happy", 2.7), ("glad", 2.0),
    ("proud", 2.1), ("brilliant", 2.8), ("impressive", 2.3), ("incredible", 2.2), ("love", 3.2),
    ("loved", 2.9), ("loving", 2.9), ("lucky", 1.8), ("fun", 2.3), ("funny", 1.9),
    ("interesting", 1.7), ("exciting", 2.2), ("excited", 1.4), ("cool", 1.3), ("fair", 1.3),
    ("favorite", 2.0), ("strong", 2.3), ("win", 2.8), ("wins", 2.7), ("won", 2.7),
    ("winning", 2.4), ("easy", 1.9), ("free", 2.3), ("like", 1.5), ("liked", 1.8),
    ("thanks", 1.9), ("thank", 1.5), ("lol", 2.9), ("haha", 2.0), ("wow", 2.8),
    ("yes", 1.7), ("ok", 1.2), ("okay", 0.9), ("congrats", 2.4), ("congratulations", 2.9),
    ("hope", 1.9), ("joy", 2.8), ("smile", 1.5), ("celebrate", 2.7), ("victory", 2.8),
    ("superb", 3.1), ("pleasant", 2.3), ("successful", 2.8), ("success", 2.7), ("safe", 1.9),
    ("smart", 1.7), ("kind", 2.4), ("fine", 0.8), ("support", 1.7), ("grateful", 2.0),
    ("thankful", 2.7), ("enjoy", 2.2), ("enjoyed", 2.3), ("beat", 0.7), ("champion", 2.9),
    // Negative
    ("bad", -2.5), ("worse", -2.1), ("worst", -3.1), ("terrible", -2.1), ("horrible", -2.5),
    ("awful", -2.0), ("poor", -2.1), ("sad", -2.1), ("angry", -2.3), ("boring", -1.3),
    ("stupid", -2.4), ("ugly", -2.3), ("hate", -2.7), ("hated", -3.2), ("wrong", -2.1),
    ("crazy", -1.4), ("disappointing", -2.2), ("disappointed", -1.9), ("sick", -2.3),
    ("dead", -3.3), ("weak", -1.9), ("serious", -0.3), ("pathetic", -2.7), ("annoying", -1.7),
    ("unfair", -2.1), ("dirty", -1.9), ("dangerous", -2.1), ("scary", -2.2), ("shameful", -2.6),
    ("embarrassing", -1.6), ("lame", -1.8), ("ridiculous", -1.5), ("unlucky", -1.9),
    ("painful", -2.2), ("tired", -1.9), ("lost", -1.3), ("lose", -1.6), ("loss", -1.3),
    ("losing", -1.6), ("fail", -2.5), ("failed", -2.3), ("failure", -2.3), ("no", -1.2),
    ("broken", -2.1), ("useless", -1.8), ("fake", -2.1), ("cry", -2.1), ("war", -2.9),
    ("kill", -3.7), ("killed", -3.5), ("injury", -2.1), ("injured", -1.7), ("problem", -1.7),
    ("fear", -2.2), ("worried", -1.2), ("shame", -2.1), ("robbed", -2.4), ("cheat", -2.3),
    ("nightmare", -2.8), ("disaster", -3.1), ("sucks", -1.5), ("fuck", -2.5), ("damn", -1.7),
];

pub static VADER_LEXICON: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| VADER_WORDS.iter().copied().collect());

pub const BOOSTER_INCREMENT: f64 = 0.293;
pub const BOOSTER_DECREMENT: f64 = -0.293;

#[rustfmt::skip]
const BOOSTER_WORDS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT), ("amazingly", BOOSTER_INCREMENT), ("awfully", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT), ("considerably", BOOSTER_INCREMENT), ("decidedly", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT), ("enormously", BOOSTER_INCREMENT), ("entirely", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT), ("exceptionally", BOOSTER_INCREMENT), ("extremely", BOOSTER_INCREMENT),
    ("fabulously", BOOSTER_INCREMENT), ("fully", BOOSTER_INCREMENT), ("greatly", BOOSTER_INCREMENT),
    ("hella", BOOSTER_INCREMENT), ("highly", BOOSTER_INCREMENT), ("hugely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT), ("intensely", BOOSTER_INCREMENT), ("majorly", BOOSTER_INCREMENT),
    ("more", BOOSTER_INCREMENT), ("most", BOOSTER_INCREMENT), ("particularly", BOOSTER_INCREMENT),
    ("purely", BOOSTER_INCREMENT), ("quite", BOOSTER_INCREMENT), ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT), ("so", BOOSTER_INCREMENT), ("substantially", BOOSTER_INCREMENT),
    ("thoroughly", BOOSTER_INCREMENT), ("totally", BOOSTER_INCREMENT), ("tremendously", BOOSTER_INCREMENT),
    ("uber", BOOSTER_INCREMENT), ("unbelievably", BOOSTER_INCREMENT), ("unusually", BOOSTER_INCREMENT),
    ("utterly", BOOSTER_INCREMENT), ("very", BOOSTER_INCREMENT),
    ("almost", BOOSTER_DECREMENT), ("barely", BOOSTER_DECREMENT), ("hardly", BOOSTER_DECREMENT),
    ("kinda", BOOSTER_DECREMENT), ("less", BOOSTER_DECREMENT), ("little", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT), ("occasionally", BOOSTER_DECREMENT), ("partly", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT), ("slightly", BOOSTER_DECREMENT), ("somewhat", BOOSTER_DECREMENT),
    ("sorta", BOOSTER_DECREMENT),
];

pub static BOOSTERS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| BOOSTER_WORDS.iter().copied().collect());

#[rustfmt::skip]
const VADER_NEGATION_WORDS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never",
    "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt",
    "uhuh", "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

pub static VADER_NEGATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VADER_NEGATION_WORDS.iter().copied().collect());

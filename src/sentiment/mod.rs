//! Text cleaning and the two sentiment analyzers.

pub mod lexicon;
pub mod normalize;
mod pattern;
mod vader;

pub use normalize::clean;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+|[!?]").expect("token pattern is valid"));

/// Stems left behind when cleaning splits "don't" into "don t".
const CONTRACTION_STEMS: &[&str] = &[
    "ain", "aren", "can", "couldn", "didn", "doesn", "don", "hadn", "hasn", "haven", "isn",
    "mightn", "mustn", "needn", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Words plus `!`/`?` marks, case preserved. Split contractions are rejoined.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for found in TOKEN_REGEX.find_iter(text) {
        let token = found.as_str();
        if token.eq_ignore_ascii_case("t") {
            if let Some(previous) = tokens.last_mut() {
                if CONTRACTION_STEMS.contains(&previous.to_lowercase().as_str()) {
                    previous.push_str("'t");
                    continue;
                }
            }
        }
        tokens.push(token.to_string());
    }

    tokens
}

pub(crate) fn is_negation_contraction(word: &str) -> bool {
    word.ends_with("n't")
}

/// Scores from both analyzers. Zero means neutral or absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentScore {
    /// Pattern analyzer polarity in [-1, 1].
    pub polarity: f64,
    /// Pattern analyzer subjectivity in [0, 1].
    pub magnitude: f64,
    /// Rule-based compound score in [-1, 1].
    pub vader_compound: f64,
}

/// Score the whole text as one unit with both analyzers.
pub fn score(text: &str) -> SentimentScore {
    let tokens = tokenize(text);
    let (polarity, magnitude) = pattern::polarity_subjectivity(&tokens);

    SentimentScore {
        polarity,
        magnitude,
        vader_compound: vader::compound(text, &tokens),
    }
}

/// One cleaned, scored post; the unit of storage and display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Sentiment")]
    pub polarity: f64,
    #[serde(rename = "Sentiment_Magnitude")]
    pub magnitude: f64,
    #[serde(rename = "Sentiment_VADER")]
    pub vader_compound: f64,
}

impl ScoredRow {
    pub fn new(text: String, score: SentimentScore) -> Self {
        Self {
            text,
            polarity: score.polarity,
            magnitude: score.magnitude,
            vader_compound: score.vader_compound,
        }
    }

    /// Clean `raw` and score the cleaned text.
    pub fn from_raw(raw: &str) -> Self {
        let text = clean(raw);
        let score = score(&text);
        Self::new(text, score)
    }

    pub fn value(&self, column: ScoreColumn) -> f64 {
        match column {
            ScoreColumn::Polarity => self.polarity,
            ScoreColumn::Magnitude => self.magnitude,
            ScoreColumn::VaderCompound => self.vader_compound,
        }
    }
}

/// Numeric columns of a [`ScoredRow`], named as in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColumn {
    Polarity,
    Magnitude,
    VaderCompound,
}

impl ScoreColumn {
    pub const ALL: [ScoreColumn; 3] = [
        ScoreColumn::Polarity,
        ScoreColumn::Magnitude,
        ScoreColumn::VaderCompound,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScoreColumn::Polarity => "Sentiment",
            ScoreColumn::Magnitude => "Sentiment_Magnitude",
            ScoreColumn::VaderCompound => "Sentiment_VADER",
        }
    }

    /// Natural value range of the column.
    pub fn range(self) -> (f64, f64) {
        match self {
            ScoreColumn::Magnitude => (0.0, 1.0),
            ScoreColumn::Polarity | ScoreColumn::VaderCompound => (-1.0, 1.0),
        }
    }

    pub fn next(self) -> Self {
        match self {
            ScoreColumn::Polarity => ScoreColumn::Magnitude,
            ScoreColumn::Magnitude => ScoreColumn::VaderCompound,
            ScoreColumn::VaderCompound => ScoreColumn::Polarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &[&str] = &[
        "",
        "Great match! #football @fan http://x.co",
        "What a terrible, terrible referee decision!!!",
        "not bad at all, but the second half was BORING",
        "I love this team so much ❤️",
        "Worst. Game. Ever.",
        "kickoff at 8pm",
        "absolutely incredibly extremely perfect!!!! WOW",
        "no problem, never so happy",
        "least good??? hardly great",
        "RT @club: WE WON THE CUP",
    ];

    #[test]
    fn test_tokenize_rejoins_contractions() {
        assert_eq!(tokenize("I don t know"), vec!["I", "don't", "know"]);
        assert_eq!(tokenize("isn't it!"), vec!["isn't", "it", "!"]);
        assert_eq!(tokenize("t is a letter"), vec!["t", "is", "a", "letter"]);
    }

    #[test]
    fn test_score_empty_is_neutral() {
        assert_eq!(
            score(""),
            SentimentScore {
                polarity: 0.0,
                magnitude: 0.0,
                vader_compound: 0.0,
            }
        );
    }

    #[test]
    fn test_score_is_deterministic() {
        for text in CORPUS {
            assert_eq!(score(text), score(text));
        }
    }

    #[test]
    fn test_score_ranges() {
        for text in CORPUS {
            for candidate in [text.to_string(), clean(text)] {
                let s = score(&candidate);
                assert!((-1.0..=1.0).contains(&s.polarity), "{:?}", candidate);
                assert!((0.0..=1.0).contains(&s.magnitude), "{:?}", candidate);
                assert!((-1.0..=1.0).contains(&s.vader_compound), "{:?}", candidate);
            }
        }
    }

    #[test]
    fn test_great_match_scenario() {
        let row = ScoredRow::from_raw("Great match! #football @fan http://x.co");
        assert_eq!(row.text, "Great match");
        assert!(row.polarity > 0.0);
        assert!(row.vader_compound >= 0.0);
    }

    #[test]
    fn test_whole_text_is_scored_as_one_unit() {
        // Per-word scoring would average in the neutral words; the document score does not.
        let s = score("the great game");
        assert!((s.polarity - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_empty_after_cleaning_is_neutral() {
        let row = ScoredRow::from_raw("@someone #tag https://t.co/x");
        assert_eq!(row.text, "");
        assert_eq!(row.polarity, 0.0);
        assert_eq!(row.magnitude, 0.0);
        assert_eq!(row.vader_compound, 0.0);
    }

    #[test]
    fn test_column_cycle_and_labels() {
        let mut column = ScoreColumn::Polarity;
        let mut labels = Vec::new();
        for _ in 0..3 {
            labels.push(column.label());
            column = column.next();
        }
        assert_eq!(column, ScoreColumn::Polarity);
        assert_eq!(
            labels,
            vec!["Sentiment", "Sentiment_Magnitude", "Sentiment_VADER"]
        );
    }

    #[test]
    fn test_row_serializes_with_column_names() {
        let row = ScoredRow::new("ok".to_string(), SentimentScore::default());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Text"], "ok");
        assert_eq!(json["Sentiment_VADER"], 0.0);
    }
}

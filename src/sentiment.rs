// src/sentiment.rs
//
// Sentiment classification as the dashboard presents it. The score itself is
// computed upstream; we only bucket and format it.

use crate::config::consts::{SENTIMENT_NEGATIVE_MAX, SENTIMENT_POSITIVE_MIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Bucket an average score: > 0.2 positive, < -0.2 negative, else neutral.
    pub fn from_score(score: f64) -> Self {
        if score > SENTIMENT_POSITIVE_MIN {
            Sentiment::Positive
        } else if score < SENTIMENT_NEGATIVE_MAX {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Parse the wire tag (POSITIVE/NEGATIVE/anything else → neutral).
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("positive") {
            Sentiment::Positive
        } else if tag.eq_ignore_ascii_case("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral  => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }
}

/// "73%"-style rendering of a -1.0..=1.0 score; dash when absent.
pub fn percent_label(score: Option<f64>) -> String {
    match score {
        Some(v) => format!("{:.0}%", v * 100.0),
        None => s!("-"),
    }
}

/// Positive/neutral/negative shares in percent. Zero total → all zero.
pub fn split_percent(positive: i64, neutral: i64, negative: i64) -> (f32, f32, f32) {
    let total = positive + neutral + negative;
    if total == 0 {
        return (0.0, 0.0, 0.0);
    }
    let t = total as f32;
    (
        positive as f32 * 100.0 / t,
        neutral as f32 * 100.0 / t,
        negative as f32 * 100.0 / t,
    )
}

/// Dominant difficulty verdict from the three counters.
pub fn difficulty_verdict(easy: i64, medium: i64, hard: i64) -> Option<&'static str> {
    if easy + medium + hard == 0 {
        return None;
    }
    if easy >= medium && easy >= hard {
        Some("쉬움")
    } else if hard >= easy && hard >= medium {
        Some("어려움")
    } else {
        Some("보통")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_buckets_at_thresholds() {
        assert_eq!(Sentiment::from_score(0.21), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.2), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.2), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.21), Sentiment::Negative);
    }

    #[test]
    fn wire_tags_are_case_insensitive() {
        assert_eq!(Sentiment::from_tag("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_tag("NEGATIVE"), Sentiment::Negative);
        assert_eq!(Sentiment::from_tag("whatever"), Sentiment::Neutral);
    }

    #[test]
    fn split_partitions_hundred_percent() {
        let (p, u, n) = split_percent(6, 3, 1);
        assert!((p + u + n - 100.0).abs() < 0.001);
        assert!((p - 60.0).abs() < 0.001);

        assert_eq!(split_percent(0, 0, 0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn difficulty_prefers_easy_then_hard_on_ties() {
        assert_eq!(difficulty_verdict(0, 0, 0), None);
        assert_eq!(difficulty_verdict(2, 2, 1), Some("쉬움"));
        assert_eq!(difficulty_verdict(1, 2, 2), Some("어려움"));
        assert_eq!(difficulty_verdict(1, 3, 1), Some("보통"));
    }

    #[test]
    fn percent_label_formats_or_dashes() {
        assert_eq!(percent_label(Some(0.73)), "73%");
        assert_eq!(percent_label(None), "-");
    }
}

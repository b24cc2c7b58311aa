//! Emotional manipulation signal
//!
//! Lexicon-based sentiment: each known adjective carries a polarity,
//! subjectivity and intensity. Intensifiers scale the next sentiment word,
//! negations flip and damp it. The text's sentiment is the mean over all
//! assessed words.
//!
//! Coverage is deliberately narrow: the lexicon holds only strongly charged
//! adjectives, so the manipulative branch fires on heavily loaded text and
//! most ordinary reporting scores neutral.

/// Polarity below which tone counts as strongly negative
const NEGATIVE_POLARITY: f64 = -0.4;
/// Subjectivity above which text counts as opinionated
const HIGH_SUBJECTIVITY: f64 = 0.6;

const MANIPULATIVE: f64 = 0.8;
const NEUTRAL: f64 = 0.2;

/// Damping applied to a negated word's polarity
const NEGATION_FACTOR: f64 = -0.5;

/// (word, polarity, subjectivity, intensity)
const LEXICON: &[(&str, f64, f64, f64)] = &[
    ("abysmal", -1.0, 1.0, 1.0),
    ("alarming", -0.6, 0.9, 1.0),
    ("amazing", 0.6, 0.9, 1.0),
    ("angry", -0.5, 1.0, 1.0),
    ("appalling", -0.9, 1.0, 1.0),
    ("atrocious", -1.0, 1.0, 1.0),
    ("awesome", 1.0, 1.0, 1.0),
    ("awful", -1.0, 1.0, 1.0),
    ("bad", -0.7, 0.667, 1.0),
    ("beautiful", 0.85, 1.0, 1.0),
    ("best", 1.0, 0.3, 1.0),
    ("better", 0.5, 0.5, 1.0),
    ("bizarre", -0.4, 0.8, 1.0),
    ("brilliant", 0.9, 1.0, 1.0),
    ("catastrophic", -1.0, 0.9, 1.0),
    ("corrupt", -0.5, 0.5, 1.0),
    ("crazy", -0.6, 0.9, 1.0),
    ("criminal", -0.5, 0.6, 1.0),
    ("cruel", -1.0, 1.0, 1.0),
    ("dangerous", -0.6, 0.9, 1.0),
    ("deadly", -0.8, 0.8, 1.0),
    ("despicable", -1.0, 1.0, 1.0),
    ("devastating", -0.9, 0.9, 1.0),
    ("dirty", -0.6, 0.8, 1.0),
    ("disastrous", -1.0, 1.0, 1.0),
    ("disgraceful", -1.0, 1.0, 1.0),
    ("disgusting", -1.0, 1.0, 1.0),
    ("dishonest", -0.7, 0.9, 1.0),
    ("dreadful", -1.0, 1.0, 1.0),
    ("dumb", -0.4, 0.5, 1.0),
    ("evil", -1.0, 1.0, 1.0),
    ("excellent", 1.0, 1.0, 1.0),
    ("fake", -0.5, 1.0, 1.0),
    ("false", -0.4, 0.7, 1.0),
    ("fantastic", 0.4, 0.9, 1.0),
    ("fine", 0.4, 0.5, 1.0),
    ("fraudulent", -0.7, 0.8, 1.0),
    ("furious", -0.8, 1.0, 1.0),
    ("glad", 0.5, 1.0, 1.0),
    ("good", 0.7, 0.6, 1.0),
    ("great", 0.8, 0.75, 1.0),
    ("happy", 0.8, 1.0, 1.0),
    ("hateful", -0.9, 1.0, 1.0),
    ("horrible", -1.0, 1.0, 1.0),
    ("horrific", -1.0, 1.0, 1.0),
    ("hostile", -0.5, 0.7, 1.0),
    ("idiotic", -0.8, 1.0, 1.0),
    ("illegal", -0.5, 0.5, 1.0),
    ("incredible", 0.9, 0.9, 1.0),
    ("insane", -0.7, 1.0, 1.0),
    ("lovely", 0.5, 0.75, 1.0),
    ("mad", -0.6, 1.0, 1.0),
    ("massive", 0.0, 1.0, 1.0),
    ("nasty", -1.0, 1.0, 1.0),
    ("nice", 0.6, 1.0, 1.0),
    ("outrageous", -0.8, 1.0, 1.0),
    ("pathetic", -1.0, 1.0, 1.0),
    ("perfect", 1.0, 1.0, 1.0),
    ("poor", -0.4, 0.6, 1.0),
    ("positive", 0.23, 0.55, 1.0),
    ("ridiculous", -0.33, 1.0, 1.0),
    ("sad", -0.5, 1.0, 1.0),
    ("scary", -0.5, 1.0, 1.0),
    ("shameful", -0.9, 1.0, 1.0),
    ("shocking", -1.0, 1.0, 1.0),
    ("sick", -0.7, 0.9, 1.0),
    ("stupid", -0.8, 1.0, 1.0),
    ("successful", 0.75, 0.95, 1.0),
    ("terrible", -1.0, 1.0, 1.0),
    ("terrifying", -1.0, 1.0, 1.0),
    ("tragic", -0.75, 0.75, 1.0),
    ("ugly", -0.7, 1.0, 1.0),
    ("unbelievable", -0.5, 0.9, 1.0),
    ("vicious", -0.9, 1.0, 1.0),
    ("vile", -1.0, 1.0, 1.0),
    ("violent", -0.8, 0.9, 1.0),
    ("wonderful", 1.0, 1.0, 1.0),
    ("worse", -0.4, 0.6, 1.0),
    ("worst", -1.0, 1.0, 1.0),
    ("wrong", -0.5, 0.9, 1.0),
];

/// (word, multiplier) applied to the following sentiment word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("completely", 1.4),
    ("deeply", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("really", 1.3),
    ("so", 1.3),
    ("totally", 1.4),
    ("truly", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &["never", "no", "not", "n't", "nor"];

/// Sentiment of a text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Negative (-1) to positive (+1) tone
    pub polarity: f64,
    /// Objective (0) to subjective (1)
    pub subjectivity: f64,
}

/// Analyze polarity and subjectivity of `text`
pub fn sentiment(text: &str) -> Sentiment {
    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();
    let mut multiplier = 1.0;
    let mut negated = false;

    for word in words(text) {
        if NEGATIONS.contains(&word.as_str()) {
            negated = true;
            continue;
        }
        if let Some(&(_, m)) = INTENSIFIERS.iter().find(|(w, _)| *w == word) {
            multiplier *= m;
            continue;
        }
        if let Some(&(_, pol, subj, intensity)) = LEXICON.iter().find(|(w, ..)| *w == word) {
            let scale = multiplier * intensity;
            let mut pol = (pol * scale).clamp(-1.0, 1.0);
            if negated {
                pol *= NEGATION_FACTOR;
            }
            polarities.push(pol);
            subjectivities.push((subj * scale).clamp(0.0, 1.0));
        }
        multiplier = 1.0;
        negated = false;
    }

    if polarities.is_empty() {
        return Sentiment {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    let n = polarities.len() as f64;
    Sentiment {
        polarity: (polarities.iter().sum::<f64>() / n).clamp(-1.0, 1.0),
        subjectivity: (subjectivities.iter().sum::<f64>() / n).clamp(0.0, 1.0),
    }
}

/// Emotion manipulation score: 0.8 for strongly negative, opinionated text,
/// 0.2 otherwise. Deliberately a two-valued branch.
pub fn emotion_score(text: &str) -> f64 {
    let s = sentiment(text);
    if s.polarity < NEGATIVE_POLARITY && s.subjectivity > HIGH_SUBJECTIVITY {
        MANIPULATIVE
    } else {
        NEUTRAL
    }
}

/// Lowercased words, with "n't" split off as its own token
fn words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for raw in text.to_lowercase().split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
        let word = raw.trim_matches('\'');
        if word.is_empty() {
            continue;
        }
        if let Some(stem) = word.strip_suffix("n't") {
            if !stem.is_empty() {
                out.push(stem.to_string());
            }
            out.push("n't".to_string());
        } else {
            out.push(word.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_subjective_text_is_manipulative() {
        let text = "This is a terrible, disgusting and shocking betrayal by evil people.";
        let s = sentiment(text);
        assert!(s.polarity < -0.4);
        assert!(s.subjectivity > 0.6);
        assert_eq!(emotion_score(text), 0.8);
    }

    #[test]
    fn test_neutral_text() {
        let text = "The committee met on Tuesday to review the annual budget.";
        assert_eq!(sentiment(text), Sentiment { polarity: 0.0, subjectivity: 0.0 });
        assert_eq!(emotion_score(text), 0.2);
    }

    #[test]
    fn test_plain_negative_reporting_is_outside_lexicon() {
        // Bad news told without charged adjectives stays neutral
        let text = "Officials said the storm caused damage and several injuries.";
        assert_eq!(sentiment(text), Sentiment { polarity: 0.0, subjectivity: 0.0 });
        assert_eq!(emotion_score(text), 0.2);
    }

    #[test]
    fn test_positive_text_is_not_manipulative() {
        assert_eq!(emotion_score("What a wonderful and happy day!"), 0.2);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let s = sentiment("The plan is not bad");
        assert!(s.polarity > 0.0);
        let s = sentiment("The plan isn't bad");
        assert!(s.polarity > 0.0);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let plain = sentiment("a good result");
        let boosted = sentiment("a very good result");
        assert!(boosted.polarity > plain.polarity);
        assert!(sentiment("extremely terrible").polarity >= -1.0);
    }

    #[test]
    fn test_score_is_two_valued() {
        for text in ["", "!!!", "awful", "good", "not awful at all", "THE WORST"] {
            let score = emotion_score(text);
            assert!(score == 0.2 || score == 0.8);
        }
    }
}

//! Linguistic manipulation signal: shouting and exclamation marks

const CAPS_RATIO_THRESHOLD: f64 = 0.15;
const EXCLAMATION_THRESHOLD: usize = 3;
const PENALTY: f64 = 0.4;

/// Share of uppercase characters over all characters
pub fn caps_ratio(text: &str) -> f64 {
    let total = text.chars().count().max(1);
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

/// 0.4 for heavy capitalisation plus 0.4 for more than three `!`, at most 1.0
pub fn linguistic_score(text: &str) -> f64 {
    let mut score: f64 = 0.0;

    if caps_ratio(text) > CAPS_RATIO_THRESHOLD {
        score += PENALTY;
    }
    if text.matches('!').count() > EXCLAMATION_THRESHOLD {
        score += PENALTY;
    }

    score.min(1.0)
}

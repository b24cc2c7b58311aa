//! Fact keyword signal

const FACT_KEYWORDS: [&str; 5] = ["confirmed", "official", "verified", "government", "report"];

/// Matches needed to saturate the score
const SATURATION: f64 = 4.0;

/// Distinct keywords present (case-insensitive, substring match) over 4,
/// capped at 1.0. Repetitions of one keyword count once.
pub fn fact_score(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let matches = FACT_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count();

    (matches as f64 / SATURATION).min(1.0)
}

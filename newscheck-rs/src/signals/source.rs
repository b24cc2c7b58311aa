//! Source trust signal based on the article URL

/// Trusted domain substrings and their trust weight.
/// Checked in declaration order; the first contained entry wins.
pub const TRUSTED_SOURCES: &[(&str, f64)] = &[
    ("bbc.com", 0.95),
    ("ndtv.com", 0.90),
    ("thehindu.com", 0.95),
    ("indiatimes.com", 0.85),
];

/// Score when no URL was given
const UNKNOWN_SOURCE: f64 = 0.5;
/// Score for a URL matching no trusted entry
const UNVERIFIED_SOURCE: f64 = 0.4;

pub fn source_score(url: Option<&str>) -> f64 {
    let url = match url {
        Some(u) if !u.is_empty() => u,
        _ => return UNKNOWN_SOURCE,
    };

    TRUSTED_SOURCES
        .iter()
        .find(|(domain, _)| url.contains(domain))
        .map(|&(_, trust)| trust)
        .unwrap_or(UNVERIFIED_SOURCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url() {
        assert_eq!(source_score(None), 0.5);
        assert_eq!(source_score(Some("")), 0.5);
    }

    #[test]
    fn test_trusted_domains() {
        assert_eq!(source_score(Some("https://www.bbc.com/news/x")), 0.95);
        assert_eq!(source_score(Some("https://www.ndtv.com/india")), 0.90);
        assert_eq!(source_score(Some("https://timesofindia.indiatimes.com/a")), 0.85);
    }

    #[test]
    fn test_unknown_domain() {
        assert_eq!(source_score(Some("https://random.example.com")), 0.4);
    }
}

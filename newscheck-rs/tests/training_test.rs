use newscheck_rs::dataset::{ArticleLabel, LabeledArticle};
use newscheck_rs::model::{train, TextClassifier, TextModel, TrainingConfig};
use newscheck_rs::scoring::{ScoringPipeline, Submission, VerdictLabel};
use std::sync::Arc;
use tempfile::TempDir;

fn article(title: &str, text: &str, label: ArticleLabel) -> LabeledArticle {
    LabeledArticle {
        title: title.to_string(),
        text: text.to_string(),
        label,
    }
}

fn corpus() -> Vec<LabeledArticle> {
    vec![
        article("SHOCKING secret", "aliens control hidden elite conspiracy", ArticleLabel::Fake),
        article("Miracle cure", "hidden miracle doctors conspiracy exposed", ArticleLabel::Fake),
        article("Elite hoax", "secret aliens hoax exposed shocking", ArticleLabel::Fake),
        article("Parliament budget", "ministers approved annual budget parliament", ArticleLabel::Real),
        article("Trade talks", "ministers discussed trade tariffs parliament", ArticleLabel::Real),
        article("Election count", "officials published election count budget", ArticleLabel::Real),
    ]
}

#[test]
fn test_train_fits_training_set() {
    let report = train(&corpus(), &TrainingConfig::default()).unwrap();

    assert_eq!(report.documents, 6);
    assert!(report.iterations >= 1 && report.iterations <= 1000);
    assert_eq!(report.training_accuracy, 1.0);

    let proba = report.model.predict_proba("ministers approved parliament budget");
    assert!(proba[1] > proba[0]);
    let proba = report.model.predict_proba("secret aliens conspiracy exposed");
    assert!(proba[0] > proba[1]);
}

#[test]
fn test_confidence_is_max_probability() {
    let report = train(&corpus(), &TrainingConfig::default()).unwrap();
    let text = "hidden conspiracy";
    let proba = report.model.predict_proba(text);
    assert_eq!(proba.len(), 2);
    assert_eq!(report.model.confidence(text), proba[0].max(proba[1]));
    assert!(report.model.confidence(text) >= 0.5);
}

#[test]
fn test_artifacts_round_trip() {
    let dir = TempDir::new().unwrap();
    let model_path = dir.path().join("model.json");
    let vectorizer_path = dir.path().join("vectorizer.json");

    let report = train(&corpus(), &TrainingConfig::default()).unwrap();
    report.model.save(&model_path, &vectorizer_path).unwrap();

    let loaded = TextModel::load(&model_path, &vectorizer_path).unwrap();
    let text = "ministers discussed the budget";
    assert_eq!(loaded.predict_proba(text), report.model.predict_proba(text));
}

#[test]
fn test_missing_artifact_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = TextModel::load(dir.path().join("model.json"), dir.path().join("vectorizer.json"));
    assert!(result.is_err());
}

#[test]
fn test_mismatched_artifacts_rejected() {
    let dir = TempDir::new().unwrap();
    let model_path = dir.path().join("model.json");
    let vectorizer_path = dir.path().join("vectorizer.json");
    let other_vectorizer = dir.path().join("other.json");

    let report = train(&corpus(), &TrainingConfig::default()).unwrap();
    report.model.save(&model_path, &vectorizer_path).unwrap();

    let small = vec![
        article("a", "alpha beta", ArticleLabel::Fake),
        article("b", "gamma delta", ArticleLabel::Real),
    ];
    let other = train(&small, &TrainingConfig { max_df: 1.0, ..Default::default() }).unwrap();
    other.model.save(dir.path().join("unused.json"), &other_vectorizer).unwrap();

    assert!(TextModel::load(&model_path, &other_vectorizer).is_err());
}

#[test]
fn test_pipeline_with_trained_model() {
    let report = train(&corpus(), &TrainingConfig::default()).unwrap();
    let pipeline = ScoringPipeline::new(Arc::new(report.model));

    let verdict = pipeline
        .score(
            &Submission::new("Officials confirmed the government report on the budget")
                .with_url("https://www.bbc.com/news/business"),
        )
        .unwrap();
    assert!(verdict.percentage > 60.0);
    assert_eq!(verdict.label, VerdictLabel::LikelyReal);

    let verdict = pipeline
        .score(&Submission::new("SHOCKING!!!! ALIENS CONTROL THE ELITE, A TERRIBLE, EVIL CONSPIRACY!"))
        .unwrap();
    assert_eq!(verdict.label, VerdictLabel::LikelyFake);
}

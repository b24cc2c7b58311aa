use askama_axum::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::api::handlers::AppState;
use crate::scoring::{Submission, Verdict, REFERENCE_LINKS};

#[derive(Template, Default)]
#[template(path = "index.html")]
struct IndexTemplate {
    text: String,
    url: String,
    author: String,
    warning: String,
    error: String,
    result: Option<VerdictView>,
}

struct VerdictView {
    is_real: bool,
    percentage: String,
    rows: Vec<BreakdownRow>,
    references: Vec<&'static str>,
}

struct BreakdownRow {
    name: String,
    value: String,
}

impl From<&Verdict> for VerdictView {
    fn from(verdict: &Verdict) -> Self {
        Self {
            is_real: verdict.is_real(),
            percentage: format!("{:.2}", verdict.percentage),
            rows: verdict
                .breakdown
                .iter()
                .map(|row| BreakdownRow {
                    name: row.name.clone(),
                    value: format!("{:.1}", row.percentage),
                })
                .collect(),
            references: if verdict.is_real() {
                Vec::new()
            } else {
                REFERENCE_LINKS.to_vec()
            },
        }
    }
}

// Form page (GET)
pub async fn index_page() -> impl IntoResponse {
    IndexTemplate::default()
}

// Form submission (POST)
pub async fn analyze_submit(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let mut submission = Submission::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed form upload: {}", e);
                return (StatusCode::BAD_REQUEST, format!("Malformed form data: {}", e))
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        let result = match name.as_str() {
            "image" => field.bytes().await.map(|bytes| {
                // Browsers send an empty part when no file was chosen
                if !bytes.is_empty() {
                    submission.image = Some(bytes.to_vec());
                }
            }),
            "text" => field.text().await.map(|v| submission.text = v),
            // Kept raw like the JSON API; only an absent value means no URL
            "url" => field
                .text()
                .await
                .map(|v| submission.url = Some(v).filter(|u| !u.is_empty())),
            "author" => field.text().await.map(|v| submission.author = non_empty(v)),
            _ => Ok(()),
        };

        if let Err(e) = result {
            warn!("Failed to read form field '{}': {}", name, e);
            return (StatusCode::BAD_REQUEST, format!("Malformed form data: {}", e))
                .into_response();
        }
    }

    let mut page = IndexTemplate {
        url: submission.url.clone().unwrap_or_default(),
        author: submission.author.clone().unwrap_or_default(),
        ..Default::default()
    };

    if submission.is_blank() {
        page.warning = "Please enter news text".to_string();
        return page.into_response();
    }

    match state.pipeline.score(&submission) {
        Ok(verdict) => page.result = Some(VerdictView::from(&verdict)),
        Err(e) => {
            warn!("Scoring failed: {}", e);
            page.error = e.to_string();
        }
    }
    page.text = submission.text;

    page.into_response()
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// src/api.rs
//! HTTP shell: JSON/text endpoints over the analyzer plus the static web form.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};

use crate::analyze::{AnalysisResult, TextAnalyzer, WordCount};
use crate::config::AppConfig;
use crate::error::AnalyzerError;
use crate::metrics::{ANALYZE_DURATION_MS, ANALYZE_REQUESTS, ANALYZE_TOKENS, ANALYZE_UNAVAILABLE};
use crate::report::{render_report, Locale};
use crate::sentiment::SentimentResult;
use crate::telemetry::anon_hash;

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<TextAnalyzer>,
    locale: Locale,
    ui_dir: PathBuf,
}

impl AppState {
    pub fn new(analyzer: TextAnalyzer, locale: Locale, ui_dir: impl Into<PathBuf>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            locale,
            ui_dir: ui_dir.into(),
        }
    }

    /// Build from config; fails if the configured lexicon cannot be loaded.
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self::new(cfg.build_analyzer()?, cfg.locale, cfg.ui_dir.clone()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        let cfg = AppConfig::default();
        Self::new(TextAnalyzer::default(), cfg.locale, cfg.ui_dir)
    }
}

pub fn router(state: AppState) -> Router {
    let ui = ServeDir::new(&state.ui_dir);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .route("/report", post(report))
        .fallback_service(ui)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeReq {
    pub text: String,
    #[serde(default)]
    pub locale: Option<Locale>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResp {
    pub total_words: usize,
    pub frequencies: Vec<WordCount>,
    pub modal_word: String,
    pub sentiment: SentimentResult,
    pub report: String,
}

impl AnalyzeResp {
    fn new(result: AnalysisResult, locale: Locale) -> Self {
        let report = render_report(&result, locale);
        Self {
            total_words: result.total_words,
            frequencies: result.frequencies.as_slice().to_vec(),
            modal_word: result.modal_word,
            sentiment: result.sentiment,
            report,
        }
    }
}

/// 503 body when the sentiment engine is down.
pub struct Unavailable(AnalyzerError);

impl IntoResponse for Unavailable {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": "analysis unavailable",
            "detail": self.0.to_string(),
        }));
        (StatusCode::SERVICE_UNAVAILABLE, body).into_response()
    }
}

fn run(state: &AppState, text: &str) -> Result<AnalysisResult, Unavailable> {
    counter!(ANALYZE_REQUESTS).increment(1);
    let started = Instant::now();

    let outcome = state.analyzer.analyze(text);
    histogram!(ANALYZE_DURATION_MS).record(started.elapsed().as_secs_f64() * 1000.0);

    match outcome {
        Ok(r) => {
            histogram!(ANALYZE_TOKENS).record(r.total_words as f64);
            info!(
                target: "api",
                id = %anon_hash(text),
                words = r.total_words,
                label = ?r.sentiment.label,
                "analyzed"
            );
            Ok(r)
        }
        Err(e) => {
            counter!(ANALYZE_UNAVAILABLE).increment(1);
            warn!(target: "api", id = %anon_hash(text), error = %e, "analysis unavailable");
            Err(Unavailable(e))
        }
    }
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalyzeResp>, Unavailable> {
    let locale = body.locale.unwrap_or(state.locale);
    let result = run(&state, &body.text)?;
    Ok(Json(AnalyzeResp::new(result, locale)))
}

async fn report(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<impl IntoResponse, Unavailable> {
    let locale = body.locale.unwrap_or(state.locale);
    let result = run(&state, &body.text)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_report(&result, locale),
    ))
}

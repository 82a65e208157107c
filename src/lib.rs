// src/lib.rs
//! Word frequency, modal word and lexicon-based sentiment for free-form text.
//!
//! ```
//! let r = text_sentiment_analyzer::analyze("Hello hello WORLD!");
//! assert_eq!(r.total_words, 3);
//! assert_eq!(r.modal_word, "hello");
//! ```

pub mod analyze;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod sentiment;
pub mod session;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze, AnalysisResult, FrequencyTable, TextAnalyzer, NO_MODAL_WORD};
pub use crate::api::router;
pub use crate::error::AnalyzerError;
pub use crate::report::{render_report, Locale};
pub use crate::sentiment::{Lexicon, PolarityEstimator, Sentiment, SentimentResult};
pub use crate::session::{InputRegion, OutputRegion, TextBuffer, UiSession};

use axum::Router;
use tracing::info;

/// Full application router: config from env/file, API, web form and `/metrics`.
pub async fn app() -> anyhow::Result<Router> {
    let cfg = config::AppConfig::load_default()?;
    let state = api::AppState::from_config(&cfg)?;
    let metrics = metrics::Metrics::init()?;

    info!(
        target: "api",
        locale = ?cfg.locale,
        negation_window = cfg.negation_window,
        custom_lexicon = cfg.lexicon_path.is_some(),
        "analyzer ready"
    );

    Ok(metrics.router().merge(api::router(state)))
}

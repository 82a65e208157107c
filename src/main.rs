//! Text analysis web form: binary entrypoint.
//! Boots the Axum HTTP server with the analyzer, the static UI and `/metrics`.

use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    text_sentiment_analyzer::telemetry::init_tracing();

    // A broken lexicon or config stops startup instead of serving neutral results.
    let router = text_sentiment_analyzer::app()
        .await
        .map_err(shuttle_runtime::Error::Custom)?;

    Ok(router.into())
}

// tests/config_load.rs
//
// Config lookup (env path, default file, built-in defaults), env overrides,
// and custom lexicons wired through the config.

use std::{env, fs};

use text_sentiment_analyzer::config::{AppConfig, ENV_CONFIG_PATH, ENV_LOCALE};
use text_sentiment_analyzer::{Locale, Sentiment};

fn clear_env() {
    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_LOCALE);
}

#[serial_test::serial]
#[test]
fn defaults_when_no_file_and_no_env() {
    // Isolate CWD in a temp dir so the repo's config/ is not picked up.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    let cfg = AppConfig::load_default().unwrap();
    assert_eq!(cfg, AppConfig::default());

    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn env_path_takes_precedence_and_locale_env_overrides() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("analyzer.toml");
    fs::write(&p, "locale = \"en\"\nnegation_window = 1\n").unwrap();

    env::set_var(ENV_CONFIG_PATH, p.display().to_string());
    let cfg = AppConfig::load_default().unwrap();
    assert_eq!(cfg.locale, Locale::En);
    assert_eq!(cfg.negation_window, 1);

    env::set_var(ENV_LOCALE, "es");
    let cfg = AppConfig::load_default().unwrap();
    assert_eq!(cfg.locale, Locale::Es);

    env::set_var(ENV_LOCALE, "klingon");
    assert!(AppConfig::load_default().is_err());

    clear_env();
}

#[serial_test::serial]
#[test]
fn env_path_to_missing_file_is_an_error() {
    clear_env();
    env::set_var(ENV_CONFIG_PATH, "/definitely/not/here/analyzer.toml");
    assert!(AppConfig::load_default().is_err());
    clear_env();
}

#[serial_test::serial]
#[test]
fn repo_config_file_parses() {
    clear_env();
    let cfg = AppConfig::load_from_file("config/analyzer.toml").unwrap();
    assert_eq!(cfg.locale, Locale::Es);
    assert!(cfg.lexicon_path.is_none());
    assert!(cfg.build_analyzer().is_ok());
}

#[test]
fn custom_lexicon_relative_to_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("lex.json"),
        r#"{"words": {"sunny": -0.5}, "negators": ["not"]}"#,
    )
    .unwrap();
    let p = tmp.path().join("analyzer.toml");
    fs::write(&p, "lexicon_path = \"lex.json\"\n").unwrap();

    let cfg = AppConfig::load_from_file(&p).unwrap();
    assert_eq!(cfg.lexicon_path, Some(tmp.path().join("lex.json")));

    let analyzer = cfg.build_analyzer().unwrap();
    let r = analyzer.analyze("Sunny sunny day").unwrap();
    assert_eq!(r.sentiment.label, Sentiment::Negative);
    assert_eq!(r.modal_word, "sunny");
}

#[test]
fn broken_custom_lexicon_fails_instead_of_defaulting() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("lex.json"), r#"{"words": {"x": 9.0}}"#).unwrap();
    let p = tmp.path().join("analyzer.toml");
    fs::write(&p, "lexicon_path = \"lex.json\"\n").unwrap();

    let cfg = AppConfig::load_from_file(&p).unwrap();
    let err = cfg.build_analyzer().unwrap_err();
    assert!(err.to_string().contains("lexicon"), "{err}");
}

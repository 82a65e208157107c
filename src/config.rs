// src/config.rs
//! Application configuration (TOML).
//!
//! Lookup order:
//! 1) $ANALYZER_CONFIG_PATH (must exist)
//! 2) config/analyzer.toml
//! 3) built-in defaults
//!
//! $ANALYZER_LOCALE overrides `locale` from the file.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::analyze::TextAnalyzer;
use crate::report::Locale;
use crate::sentiment::{Lexicon, DEFAULT_NEGATION_WINDOW, MAX_NEGATION_WINDOW};

pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_LOCALE: &str = "ANALYZER_LOCALE";
pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";

fn default_negation_window() -> usize {
    DEFAULT_NEGATION_WINDOW
}
fn default_ui_dir() -> PathBuf {
    PathBuf::from("ui")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Tokens after a negator that get flipped. 0 disables negation.
    #[serde(default = "default_negation_window")]
    pub negation_window: usize,
    /// Replacement for the bundled lexicon (JSON).
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Static web form served at `/`.
    #[serde(default = "default_ui_dir")]
    pub ui_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            negation_window: default_negation_window(),
            lexicon_path: None,
            ui_dir: default_ui_dir(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: AppConfig = toml::from_str(s).context("parsing analyzer config")?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config from {}", path.display()))?;
        let mut cfg = Self::from_toml_str(&data)?;

        // Relative lexicon paths are resolved against the config file's directory.
        if let (Some(lex), Some(dir)) = (cfg.lexicon_path.as_ref(), path.parent()) {
            if lex.is_relative() && !dir.as_os_str().is_empty() {
                cfg.lexicon_path = Some(dir.join(lex));
            }
        }
        Ok(cfg)
    }

    /// Env + fallbacks, then env overrides.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            Self::load_from_file(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from_file(&default_p)?
            } else {
                Self::default()
            }
        };

        if let Ok(raw) = std::env::var(ENV_LOCALE) {
            cfg.locale = raw
                .parse()
                .with_context(|| format!("{ENV_LOCALE}={raw}"))?;
        }
        Ok(cfg)
    }

    fn sanitize(&mut self) {
        if self.negation_window > MAX_NEGATION_WINDOW {
            warn!(
                target: "analyzer",
                value = self.negation_window,
                "negation_window out of range, using default"
            );
            self.negation_window = default_negation_window();
        }
        if self
            .lexicon_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.lexicon_path = None;
        }
    }

    /// Lexicon from `lexicon_path` or the bundled one, with the configured window.
    /// A broken lexicon file is an error, never a silent fallback.
    pub fn lexicon(&self) -> Result<Lexicon> {
        let base = match &self.lexicon_path {
            Some(p) => Lexicon::from_path(p)?,
            None => Lexicon::bundled().clone(),
        };
        Ok(base.with_negation_window(self.negation_window))
    }

    pub fn build_analyzer(&self) -> Result<TextAnalyzer> {
        Ok(TextAnalyzer::new(self.lexicon()?))
    }
}

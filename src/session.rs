// src/session.rs
//! Presentation session: the input/output regions of one shell window,
//! plus the "analyze" and "new text" actions.
//!
//! Handlers receive the session explicitly; nothing lives in globals.
//! At most one analysis result is honoured per session: every new request
//! and every reset bumps the generation, and results carrying an older
//! generation are dropped (last request wins).

use tracing::{debug, info, warn};

use crate::analyze::{AnalysisResult, TextAnalyzer};
use crate::error::AnalyzerError;
use crate::report::{render_report, render_unavailable, Locale};
use crate::telemetry::anon_hash;

/// Where the user types.
pub trait InputRegion {
    fn contents(&self) -> String;
    fn clear(&mut self);
}

/// Where the report is shown (read-only for the user).
pub trait OutputRegion {
    fn show(&mut self, text: &str);
    fn clear(&mut self);
}

/// Plain in-memory region, usable on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl InputRegion for TextBuffer {
    fn contents(&self) -> String {
        self.text.clone()
    }
    fn clear(&mut self) {
        self.text.clear();
    }
}

impl OutputRegion for TextBuffer {
    fn show(&mut self, text: &str) {
        self.text = text.to_string();
    }
    fn clear(&mut self) {
        self.text.clear();
    }
}

/// Snapshot of the input taken when an analysis was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
    text: String,
}

impl AnalysisTicket {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct UiSession<I, O> {
    analyzer: TextAnalyzer,
    locale: Locale,
    input: I,
    output: O,
    generation: u64,
}

impl<I: InputRegion, O: OutputRegion> UiSession<I, O> {
    pub fn new(analyzer: TextAnalyzer, locale: Locale, input: I, output: O) -> Self {
        Self {
            analyzer,
            locale,
            input,
            output,
            generation: 0,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Start an analysis of the current input. Any earlier ticket becomes stale.
    pub fn begin_analysis(&mut self) -> AnalysisTicket {
        self.generation += 1;
        let text = self.input.contents().trim().to_string();
        debug!(target: "session", generation = self.generation, id = %anon_hash(&text), "analysis requested");
        AnalysisTicket {
            generation: self.generation,
            text,
        }
    }

    /// Render the outcome of `ticket` unless it was superseded. Returns
    /// whether the output region was updated.
    pub fn complete(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, AnalyzerError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                target: "session",
                stale = ticket.generation,
                current = self.generation,
                "dropping superseded analysis"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                self.output.show(&render_report(&result, self.locale));
            }
            Err(e) => {
                warn!(target: "session", error = %e, "analysis unavailable");
                self.output.show(render_unavailable(self.locale));
            }
        }
        true
    }

    /// "Analizar" button: synchronous begin + analyze + complete.
    pub fn analyze(&mut self) -> Result<AnalysisResult, AnalyzerError> {
        let ticket = self.begin_analysis();
        let outcome = self.analyzer.analyze(ticket.text());
        self.complete(ticket, outcome.clone());
        if let Ok(r) = &outcome {
            info!(target: "session", words = r.total_words, label = ?r.sentiment.label, "analysis shown");
        }
        outcome
    }

    /// "Nuevo texto" button: clear both regions and invalidate in-flight work.
    /// Does not touch the analyzer.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.input.clear();
        self.output.clear();
        debug!(target: "session", generation = self.generation, "session reset");
    }
}

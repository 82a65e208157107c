//! Human-readable report for an [`AnalysisResult`].
//!
//! Spanish is the reference layout:
//!
//! ```text
//! Total de palabras: 3
//! Palabra modal: hello
//!
//! Frecuencia de palabras:
//! - hello: 2
//! - world: 1
//!
//! Sentimiento: Neutral
//! Polaridad: 0.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

use crate::analyze::AnalysisResult;
use crate::sentiment::Sentiment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" | "spanish" | "español" => Ok(Locale::Es),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => anyhow::bail!("unsupported locale: {other}"),
        }
    }
}

struct Labels {
    total: &'static str,
    modal: &'static str,
    frequency: &'static str,
    sentiment: &'static str,
    polarity: &'static str,
    positive: &'static str,
    negative: &'static str,
    neutral: &'static str,
    unavailable: &'static str,
}

const ES: Labels = Labels {
    total: "Total de palabras",
    modal: "Palabra modal",
    frequency: "Frecuencia de palabras",
    sentiment: "Sentimiento",
    polarity: "Polaridad",
    positive: "Positivo",
    negative: "Negativo",
    neutral: "Neutral",
    unavailable: "Análisis no disponible",
};

const EN: Labels = Labels {
    total: "Total words",
    modal: "Modal word",
    frequency: "Word frequency",
    sentiment: "Sentiment",
    polarity: "Polarity",
    positive: "Positive",
    negative: "Negative",
    neutral: "Neutral",
    unavailable: "Analysis unavailable",
};

impl Locale {
    fn labels(self) -> &'static Labels {
        match self {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }

    pub fn sentiment_label(self, s: Sentiment) -> &'static str {
        let l = self.labels();
        match s {
            Sentiment::Positive => l.positive,
            Sentiment::Negative => l.negative,
            Sentiment::Neutral => l.neutral,
        }
    }
}

/// Two decimals; a value that rounds to zero never prints as "-0.00".
pub fn format_polarity(p: f64) -> String {
    let s = format!("{:.2}", p);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

pub fn render_report(result: &AnalysisResult, locale: Locale) -> String {
    let l = locale.labels();
    let mut out = String::new();

    let _ = writeln!(out, "{}: {}", l.total, result.total_words);
    let _ = writeln!(out, "{}: {}", l.modal, result.modal_word);
    out.push('\n');
    let _ = writeln!(out, "{}:", l.frequency);
    for wc in result.frequencies.iter() {
        let _ = writeln!(out, "- {}: {}", wc.word, wc.count);
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "{}: {}",
        l.sentiment,
        locale.sentiment_label(result.sentiment.label)
    );
    let _ = write!(
        out,
        "{}: {}",
        l.polarity,
        format_polarity(result.sentiment.polarity)
    );
    out
}

/// Shown instead of a report when the sentiment engine failed.
pub fn render_unavailable(locale: Locale) -> &'static str {
    locale.labels().unavailable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    #[test]
    fn reference_layout_in_spanish() {
        let r = analyze("Hello hello WORLD!");
        let expected = "Total de palabras: 3\n\
                        Palabra modal: hello\n\
                        \n\
                        Frecuencia de palabras:\n\
                        - hello: 2\n\
                        - world: 1\n\
                        \n\
                        Sentimiento: Neutral\n\
                        Polaridad: 0.00";
        assert_eq!(render_report(&r, Locale::Es), expected);
    }

    #[test]
    fn english_labels() {
        let r = analyze("This is terrible, I hate it");
        let s = render_report(&r, Locale::En);
        assert!(s.starts_with("Total words: 6\nModal word: this\n"));
        assert!(s.contains("Sentiment: Negative\n"));
        assert!(s.ends_with("Polarity: -0.90"));
    }

    #[test]
    fn empty_report_has_sentinel_and_no_rows() {
        let s = render_report(&analyze(""), Locale::Es);
        assert_eq!(
            s,
            "Total de palabras: 0\nPalabra modal: N/A\n\nFrecuencia de palabras:\n\nSentimiento: Neutral\nPolaridad: 0.00"
        );
    }

    #[test]
    fn polarity_formatting() {
        assert_eq!(format_polarity(0.456), "0.46");
        assert_eq!(format_polarity(-0.001), "0.00");
        assert_eq!(format_polarity(-0.0), "0.00");
        assert_eq!(format_polarity(-1.0), "-1.00");
    }

    #[test]
    fn unavailable_notice_is_fully_localized() {
        assert_eq!(render_unavailable(Locale::Es), "Análisis no disponible");
        assert_eq!(render_unavailable(Locale::En), "Analysis unavailable");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("ES".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}

//! Terminal shell: type text, then `:analizar`; `:nuevo` clears; `:salir` closes.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use text_sentiment_analyzer::config::AppConfig;
use text_sentiment_analyzer::report::Locale;
use text_sentiment_analyzer::session::{OutputRegion, TextBuffer, UiSession};

/// Output region that prints the report between rulers.
struct Terminal;

impl OutputRegion for Terminal {
    fn show(&mut self, text: &str) {
        println!("{}\n{}\n{}", "-".repeat(40), text, "-".repeat(40));
    }
    fn clear(&mut self) {
        println!();
    }
}

enum Command {
    Analyze,
    New,
    Quit,
    Line,
}

fn parse(line: &str) -> Command {
    match line.trim() {
        ":analizar" | ":analyze" | ":a" => Command::Analyze,
        ":nuevo" | ":new" | ":n" => Command::New,
        ":salir" | ":quit" | ":q" => Command::Quit,
        _ => Command::Line,
    }
}

fn prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Ingrese un texto (:analizar, :nuevo, :salir):",
        Locale::En => "Enter some text (:analyze, :new, :quit):",
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    text_sentiment_analyzer::telemetry::init_tracing();

    let cfg = AppConfig::load_default()?;
    let analyzer = cfg.build_analyzer().context("loading sentiment lexicon")?;
    let mut session = UiSession::new(analyzer, cfg.locale, TextBuffer::new(), Terminal);

    println!("{}", prompt(session.locale()));
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse(&line) {
            Command::Analyze => {
                // The report (or the unavailable notice) goes to the output region.
                let _ = session.analyze();
            }
            Command::New => {
                session.reset();
                println!("{}", prompt(session.locale()));
            }
            Command::Quit => break,
            Command::Line => session.input_mut().push_line(&line),
        }
        io::stdout().flush()?;
    }
    Ok(())
}

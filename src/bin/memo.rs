//! Terminal front end for memo-match.
//!
//! Cards are numbered in display order. Type a number to click that card,
//! an empty line (or `b`) to click the background, `r` to play again,
//! `h` for a harder table, `q` to quit.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use memo_match::{
    Catalog, CardKind, CardTheme, DismissMode, Locale, RecordingRenderer, Session, SessionConfig,
};

#[derive(Parser, Debug)]
#[command(name = "memo", version, about = "Find the pairs of titles and descriptions")]
struct Args {
    /// Number of games (pairs) to deal.
    #[arg(long)]
    games: Option<usize>,

    /// Fill a short catalog with versioned copies.
    #[arg(long)]
    repeat: bool,

    /// How mismatches are cleared: toggle or background.
    #[arg(long, value_parser = parse_mode)]
    mode: Option<DismissMode>,

    /// Fixed seed for a reproducible deal.
    #[arg(long)]
    seed: Option<u64>,

    /// Message language: en or es.
    #[arg(long, value_parser = parse_locale)]
    lang: Option<Locale>,

    /// Catalog file (JSON array or `rawGameData=` script). Defaults to a
    /// built-in sample.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// URL-style query such as `games=8&repeat`, applied before the flags.
    #[arg(long)]
    query: Option<String>,
}

fn parse_mode(raw: &str) -> Result<DismissMode, String> {
    DismissMode::parse(raw).ok_or_else(|| format!("unknown mode '{raw}' (toggle, background)"))
}

fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::parse(raw).ok_or_else(|| format!("unknown language '{raw}' (en, es)"))
}

impl Args {
    fn config(&self) -> SessionConfig {
        // A `--mode` flag goes ahead of the query so it wins the lookup and
        // a query without `games` still gets that mode's default count.
        let mode = self.mode.map(|m| format!("mode={}", m.as_str()));
        let query = [mode.as_deref(), self.query.as_deref().map(|q| q.trim_start_matches('?'))]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("&");
        let mut config = SessionConfig::from_query(&query);
        // Non-positive counts keep the default.
        if let Some(games) = self.games.filter(|&n| n > 0) {
            config.game_count = games;
        }
        config.repeat_games |= self.repeat;
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(locale) = self.lang {
            config.locale = locale;
        }
        config
    }
}

fn draw(session: &Session<RecordingRenderer>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    for (i, surface) in session.renderer().mounted().enumerate() {
        let face = if surface.shown {
            let marker = if surface.theme == CardTheme::Won { '*' } else { ' ' };
            let kind = match surface.card.kind {
                CardKind::Title => "T",
                CardKind::Desc => "D",
            };
            format!("{marker}{kind} {}", surface.face)
        } else {
            "  ??".to_string()
        };
        writeln!(out, "{:>3}. {face}", i + 1)?;
    }
    if let Some(message) = session.renderer().message() {
        writeln!(out, "\n{message}")?;
    }
    if session.is_complete() && !session.games().is_empty() {
        writeln!(
            out,
            "r: play again ({})   h: harder ({})",
            session.restart_link(),
            session.harder_link()
        )?;
    }
    write!(out, "> ")?;
    out.flush()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample(),
    };
    let mut config = args.config();
    debug!(?config, catalog = catalog.len(), "starting");

    let mut session = Session::new(config.clone(), &catalog, RecordingRenderer::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    draw(&session, &mut stdout).context("failed to write to terminal")?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match line.trim() {
            "q" => break,
            "" | "b" => {
                session.dismiss();
            }
            "r" => {
                session = Session::new(config.clone(), &catalog, RecordingRenderer::new());
            }
            "h" if session.is_complete() => {
                config = session.harder_config();
                session = Session::new(config.clone(), &catalog, RecordingRenderer::new());
            }
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => {
                    let outcome = session.click_at(n - 1);
                    debug!(?outcome, position = n, "input");
                }
                _ => writeln!(stdout, "type a card number, b, r, h or q")?,
            },
        }
        draw(&session, &mut stdout).context("failed to write to terminal")?;
    }
    Ok(())
}

// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::{self, WrapErr, bail, eyre};
use log::LevelFilter;

use crate::config::Game;
use crate::config::options::{FetchOptions, OutputFormat};
use crate::core::FileSource;
use crate::engine::RosterService;
use crate::progress::Progress;
use crate::roster::Roster;
use crate::runner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub games: Vec<String>,
    pub html: Option<PathBuf>,
    pub format: OutputFormat,
    pub timeout: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub verbose: u8,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            games: Vec::new(),
            html: None,
            format: OutputFormat::Lines,
            timeout: None,
            log_file: None,
            verbose: 0,
            help: false,
        }
    }
}

impl CliOptions {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn fetch_options(&self) -> FetchOptions {
        let opts = FetchOptions::default();
        match self.timeout {
            Some(secs) => opts.with_timeout(Duration::from_secs(secs)),
            None => opts,
        }
    }
}

pub fn parse_args<I>(args: I) -> eyre::Result<CliOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = CliOptions::default();
    let mut all = false;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-g" | "--game" => opts.games.push(args.next().ok_or_else(|| eyre!("Missing value for --game"))?),
            "-a" | "--all" => all = true,
            "--html" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --html"))?;
                opts.html = Some(PathBuf::from(v));
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "lines" => OutputFormat::Lines,
                    "csv" => OutputFormat::Csv,
                    "tsv" => OutputFormat::Tsv,
                    other => bail!("Unknown format: {other}"),
                };
            }
            "--timeout" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --timeout"))?;
                let secs: u64 = v.parse().wrap_err_with(|| format!("Bad --timeout: {v}"))?;
                if secs == 0 {
                    bail!("--timeout must be at least 1 second");
                }
                opts.timeout = Some(secs);
            }
            "--log" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --log"))?;
                opts.log_file = Some(PathBuf::from(v));
            }
            "-v" | "--verbose" => opts.verbose = opts.verbose.saturating_add(1),
            "-vv" => opts.verbose = opts.verbose.saturating_add(2),
            "-h" | "--help" => opts.help = true,
            flag if flag.starts_with('-') => bail!("Unknown arg: {flag}"),
            id => opts.games.push(s!(id)),
        }
    }

    if all && !opts.games.is_empty() {
        bail!("--all cannot be combined with explicit games");
    }
    if opts.html.is_some() {
        if all || opts.games.len() != 1 {
            bail!("--html needs exactly one game");
        }
    } else if all || opts.games.is_empty() {
        opts.games = Game::ALL.iter().map(|g| s!(g.id())).collect();
    }
    Ok(opts)
}

/// Print one roster in the chosen format.
pub fn render<W: Write>(out: &mut W, id: &str, roster: &Roster, format: OutputFormat) -> io::Result<()> {
    match format.delim() {
        None => {
            let names: Vec<&str> = roster.iter().collect();
            writeln!(out, "{id}: {}", names.join(", "))
        }
        Some(d) => {
            for name in roster {
                writeln!(out, "{id}{d}{name}")?;
            }
            Ok(())
        }
    }
}

struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        log::info!("looking up {total} game(s)");
    }
    fn item_done(&mut self, id: &str, names: usize) {
        log::info!("{id}: done ({names})");
    }
    fn item_empty(&mut self, id: &str) {
        log::info!("{id}: empty");
    }
}

pub fn run() -> eyre::Result<()> {
    let opts = parse_args(std::env::args().skip(1))?;
    if opts.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    crate::log::init(opts.level(), opts.log_file.clone()).wrap_err("Could not open log file")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &opts.html {
        let id = &opts.games[0];
        let game = Game::parse(id).ok_or_else(|| eyre!("Unknown game: {id}"))?;
        let roster = RosterService::new(FileSource::new(path))
            .try_roster(game)
            .wrap_err_with(|| format!("{game}: no roster from {}", path.display()))?;
        render(&mut out, game.id(), &roster, opts.format)?;
        return Ok(());
    }

    let service = RosterService::http(&opts.fetch_options())?;
    let results = runner::collect_all(&service, &opts.games, Some(&mut StderrProgress));

    let mut failed = Vec::new();
    for (id, roster) in &results {
        if Game::parse(id).is_none() {
            log::warn!("unknown game id {id:?}, skipped");
            continue;
        }
        if roster.is_empty() {
            failed.push(id.as_str());
            continue;
        }
        render(&mut out, id, roster, opts.format)?;
    }
    out.flush()?;

    if !failed.is_empty() {
        bail!("No rate-up characters found for: {}", failed.join(", "));
    }
    Ok(())
}

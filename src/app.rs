//! Drives one lookup: fetch, parse, format, print.

use crate::cli::{Cli, Mode, usage};
use crate::config::Config;
use crate::error::{Result, WowError};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::format::{Formatter, OutputMode};
use crate::model::capitalize;
use crate::parser::{parse_character, parse_realm_feed};
use std::io::Write;
use tracing::debug;

/// How a run ended, for the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request was served, or guidance was printed
    Success,
    /// The flags cannot be satisfied as given
    UserError,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::UserError => 2,
        }
    }
}

/// Run the lookup `cli` asks for, writing user-facing output to `out`.
///
/// Modes that cannot or need not reach the network print their guidance
/// without reading the config file or building an HTTP client.
pub fn start<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    let mode = Mode::from_cli(cli);
    if !mode.needs_fetch() {
        if let Some((text, outcome)) = guidance(&mode) {
            write!(out, "{text}")?;
            return Ok(outcome);
        }
    }

    let config = Config::load_with_custom_path(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    // Color is decided once here and handed to the formatter
    let color = config.output.color.resolve_from_env();
    let formatter = Formatter::new(cli.output_mode(), color);

    let fetcher = HttpFetcher::new(&config.http)?;
    App::new(fetcher, config, formatter).run(&mode, out)
}

/// Message and outcome for modes that only print guidance.
pub fn guidance(mode: &Mode) -> Option<(String, Outcome)> {
    match mode {
        Mode::UnclearRealm(realm) => Some((
            format!(
                "I don't know what you want me to find out about {}!\n\n{}",
                capitalize(realm),
                usage()
            ),
            Outcome::Success,
        )),
        Mode::MissingRealm => Some((
            format!("{}\n\n{}", WowError::MissingRealm, usage()),
            Outcome::UserError,
        )),
        Mode::Unclear => Some((
            format!("I don't know what you want me to do!\n\n{}", usage()),
            Outcome::Success,
        )),
        Mode::Character { .. } | Mode::RealmStatus { .. } => None,
    }
}

pub struct App<F: Fetcher> {
    fetcher: F,
    config: Config,
    formatter: Formatter,
}

impl<F: Fetcher> App<F> {
    pub fn new(fetcher: F, config: Config, formatter: Formatter) -> Self {
        Self {
            fetcher,
            config,
            formatter,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Execute `mode`, writing everything meant for the user to `out`.
    ///
    /// Guidance for unsatisfiable or unmatched requests is written to `out`
    /// and reported through [`Outcome`]. Network and parse failures are
    /// returned before anything is written.
    pub fn run<W: Write>(&self, mode: &Mode, out: &mut W) -> Result<Outcome> {
        debug!(?mode, "running");
        if let Some((text, outcome)) = guidance(mode) {
            write!(out, "{text}")?;
            return Ok(outcome);
        }

        let result = match mode {
            Mode::Character { realm, name } => self.character_info(realm, name),
            Mode::RealmStatus { realm } => self.realm_status(realm.as_deref()),
            _ => Ok(String::new()),
        };

        match result {
            Ok(output) => {
                write!(out, "{output}")?;
                Ok(Outcome::Success)
            }
            Err(e) if e.is_user_error() => {
                writeln!(out, "{e}")?;
                Ok(Outcome::Success)
            }
            Err(e) => Err(e),
        }
    }

    fn character_info(&self, realm: &str, name: &str) -> Result<String> {
        let armory = &self.config.armory;
        let body = self
            .fetcher
            .fetch(&armory.host, &armory.path, &[("r", realm), ("n", name)])?;
        let character = parse_character(&body)?;

        let mut output = self.formatter.render(&character)?;
        output.push('\n');
        Ok(output)
    }

    fn realm_status(&self, filter: Option<&str>) -> Result<String> {
        let status = &self.config.status;
        let body = self.fetcher.fetch(&status.host, &status.path, &[])?;
        let realms = parse_realm_feed(&body, filter)?;

        if let Some(realm) = filter {
            if realms.is_empty() {
                return Err(WowError::NoMatchingRealms(realm.to_string()));
            }
        }

        let human = self.formatter.mode() == OutputMode::Human;
        let mut output = String::new();
        if human {
            match filter {
                Some(realm) => output.push_str(&format!("Getting realm status for {realm}.\n")),
                None => output.push_str("Status of all realms:\n"),
            }
        }

        for realm in &realms {
            let rendered = self.formatter.render(realm)?;
            if human {
                output.push('\t');
                output.push_str(&rendered);
                output.push('\n');
            } else {
                output.push_str(&rendered);
            }
        }
        Ok(output)
    }
}

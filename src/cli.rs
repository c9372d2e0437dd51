use crate::format::OutputMode;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[clap(name = "wowtool")]
#[clap(version)]
#[clap(about = "World of Warcraft character and realm status lookups", long_about = None)]
pub struct Cli {
    /// Filter by REALM (required for character info)
    #[clap(short, long, value_name = "REALM")]
    pub realm: Option<String>,

    /// Grab details for the character NAME
    #[clap(short, long, value_name = "NAME")]
    pub character: Option<String>,

    /// Display the status of a realm, or of all realms without --realm
    #[clap(short, long)]
    pub status: bool,

    /// Provide YAML output
    #[clap(short, long)]
    pub yaml: bool,

    /// Path to custom configuration file
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log requests and parsing details to stderr
    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.yaml {
            OutputMode::Yaml
        } else {
            OutputMode::Human
        }
    }
}

/// What the user asked for, resolved from the flag combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Look up one character on a realm
    Character { realm: String, name: String },
    /// Realm status, for one realm or all of them
    RealmStatus { realm: Option<String> },
    /// A realm was given but nothing to do with it
    UnclearRealm(String),
    /// A character was given without its realm
    MissingRealm,
    /// No flag says what to do
    Unclear,
}

impl Mode {
    pub fn from_cli(cli: &Cli) -> Self {
        match (&cli.realm, &cli.character, cli.status) {
            (Some(realm), Some(name), _) => Mode::Character {
                realm: realm.clone(),
                name: name.clone(),
            },
            (Some(realm), None, true) => Mode::RealmStatus {
                realm: Some(realm.clone()),
            },
            (Some(realm), None, false) => Mode::UnclearRealm(realm.clone()),
            (None, Some(_), _) => Mode::MissingRealm,
            (None, None, true) => Mode::RealmStatus { realm: None },
            (None, None, false) => Mode::Unclear,
        }
    }

    /// Whether this mode needs a network request.
    pub fn needs_fetch(&self) -> bool {
        matches!(self, Mode::Character { .. } | Mode::RealmStatus { .. })
    }
}

/// Full help text, as printed for `--help`.
pub fn usage() -> String {
    let mut buf = Vec::new();
    let _ = Cli::command().write_help(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Text to print and exit code for flags clap rejected.
///
/// `--help` and `--version` exit 0 and go to stdout. Anything else is a
/// usage error: clap's message followed by the full help, exit 2.
pub fn parse_failure(err: &clap::Error) -> (String, i32) {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => (err.to_string(), 0),
        _ => (format!("{err}\n{}", usage()), 2),
    }
}

use clap::Parser;
use std::io::{self, Write};
use wowtool::{
    app,
    cli::{Cli, parse_failure},
};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let (message, code) = parse_failure(&e);
            if code == 0 {
                print!("{message}");
            } else {
                eprintln!("{message}");
            }
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> wowtool::Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = app::start(cli, &mut out)?;
    out.flush()?;

    Ok(outcome.exit_code())
}

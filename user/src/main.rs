//! `lessons`: run a lesson solution on integers given as arguments or on
//! stdin, and print the answer. Missing answers print `-1`, yes/no answers
//! print `1`/`0`.

mod cli;
mod run;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let out = run::run(cli.command, &mut std::io::stdin().lock())?;
    println!("{out}");
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

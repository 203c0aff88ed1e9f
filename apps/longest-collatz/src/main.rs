use clap::Parser;
use longest_collatz::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = run(&cli)?;
    for line in report.lines() {
        println!("{}", line);
    }
    Ok(())
}

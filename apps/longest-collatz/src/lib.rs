use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use collatz::{find_longest, find_longest_parallel, Longest, ParallelConfig, DEFAULT_CHUNK_SIZE};
use eyre::bail;
use tracing::info;

pub const DEFAULT_LIMIT: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "longest-collatz")]
#[command(about = "Find the number below a limit with the longest Collatz chain")]
pub struct Cli {
    /// Exclusive upper bound of the scanned range
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u64,

    #[arg(short, long, value_enum, default_value_t = Mode::Sequential)]
    pub mode: Mode,

    /// Worker threads for the parallel search (defaults to one per CPU)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Starting values handed to a worker at a time
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: u64,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Sequential,
    Parallel,
    /// Run both searches and fail if they disagree
    Compare,
}

/// Outcome of one invocation, ready to print.
#[derive(Debug)]
pub struct Report {
    pub limit: u64,
    pub longest: Longest,
    pub sequential_elapsed: Option<Duration>,
    pub parallel_elapsed: Option<Duration>,
}

impl Report {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "The number under {} with the longest Collatz sequence is {}, with a length of {}.",
            self.limit, self.longest.number, self.longest.length
        )];
        if let Some(elapsed) = self.sequential_elapsed {
            lines.push(format!("Sequential search finished in {:?}.", elapsed));
        }
        if let Some(elapsed) = self.parallel_elapsed {
            lines.push(format!("Parallel search finished in {:?}.", elapsed));
        }
        lines
    }
}

pub fn run(cli: &Cli) -> eyre::Result<Report> {
    let config = ParallelConfig {
        threads: cli.threads,
        chunk_size: cli.chunk_size,
    };

    let report = match cli.mode {
        Mode::Sequential => Report {
            limit: cli.limit,
            longest: find_longest(cli.limit)?,
            sequential_elapsed: None,
            parallel_elapsed: None,
        },
        Mode::Parallel => {
            let (longest, elapsed) = timed(|| find_longest_parallel(cli.limit, &config))?;
            Report {
                limit: cli.limit,
                longest,
                sequential_elapsed: None,
                parallel_elapsed: Some(elapsed),
            }
        }
        Mode::Compare => {
            let (sequential, sequential_elapsed) = timed(|| find_longest(cli.limit))?;
            let (parallel, parallel_elapsed) =
                timed(|| find_longest_parallel(cli.limit, &config))?;
            if sequential != parallel {
                bail!(
                    "sequential and parallel searches disagree: {:?} vs {:?}",
                    sequential,
                    parallel
                );
            }
            Report {
                limit: cli.limit,
                longest: sequential,
                sequential_elapsed: Some(sequential_elapsed),
                parallel_elapsed: Some(parallel_elapsed),
            }
        }
    };

    info!(
        limit = report.limit,
        number = report.longest.number,
        length = report.longest.length,
        mode = ?cli.mode,
        "search complete"
    );
    Ok(report)
}

fn timed<T, E>(search: impl FnOnce() -> Result<T, E>) -> Result<(T, Duration), E> {
    let start = Instant::now();
    let value = search()?;
    Ok((value, start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["longest-collatz"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.limit, DEFAULT_LIMIT);
        assert_eq!(cli.mode, Mode::Sequential);
        assert_eq!(cli.threads, None);
        assert_eq!(cli.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_sequential_report() {
        let report = run(&cli(&["--limit", "10"])).unwrap();
        assert_eq!(report.longest, Longest { number: 9, length: 19 });
        assert_eq!(
            report.lines(),
            vec!["The number under 10 with the longest Collatz sequence is 9, with a length of 19."]
        );
    }

    #[test]
    fn test_parallel_report_includes_elapsed() {
        let report = run(&cli(&["-l", "1000", "-m", "parallel", "-t", "2"])).unwrap();
        let lines = report.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "The number under 1000 with the longest Collatz sequence is 871, with a length of 178."
        );
        assert!(lines[1].starts_with("Parallel search finished in "));
    }

    #[test]
    fn test_compare_mode() {
        let report = run(&cli(&["--limit", "5000", "--mode", "compare", "--chunk-size", "64"])).unwrap();
        assert_eq!(report.longest, collatz::find_longest(5000).unwrap());
        assert_eq!(report.lines().len(), 3);
    }

    #[test]
    fn test_invalid_limit_is_an_error() {
        let err = run(&cli(&["--limit", "1"])).unwrap_err();
        assert!(err.to_string().contains("limit must be greater than 1"));
    }

    #[test]
    fn test_zero_chunk_size_is_an_error() {
        assert!(run(&cli(&["-m", "parallel", "--chunk-size", "0", "-l", "10"])).is_err());
    }

    #[test]
    fn test_rejects_negative_limit() {
        let argv = ["longest-collatz", "--limit", "-5"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}

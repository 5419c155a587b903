use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use hotsearch::{RunError, Saved};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "hotsearch")]
#[command(
    about = "Save the Baidu realtime hot search board as JSON snapshots",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        help = "Set the logging level"
    )]
    log_level: LogLevel,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Prints the run outcome and returns the process exit status.
fn report(outcome: Result<Saved, RunError>, out: &mut impl Write, err: &mut impl Write) -> i32 {
    match outcome {
        Ok(saved) => {
            let _ = writeln!(
                out,
                "Saved {} hot search items to {}",
                saved.item_count,
                saved.archive_path.display()
            );
            0
        }
        Err(e) => {
            let _ = writeln!(err, "{e}");
            e.exit_code()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Every failure exits 1, argument errors included
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .target(env_logger::Target::Stderr)
        .init();

    let outcome = hotsearch::run(hotsearch::HOT_SEARCH_URL, hotsearch::DATA_DIR).await;
    let code = report(outcome, &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use nlm::cli::args::Cli;
use nlm::cli::commands::execute_command;
use nlm::cli::output;
use nlm::exitcode;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match execute_command(&cli) {
        Ok(()) => std::process::exit(exitcode::OK),
        Err(e) => {
            if e.is_aborted() {
                output::aborted();
            } else {
                output::error(&e);
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -vvv");
            LevelFilter::TRACE
        }
    };

    // Formatted output goes to stderr so stdout stays scriptable
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

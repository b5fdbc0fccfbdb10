//! fisl-crawler - command line front end
//!
//! Parses flags into a [`Config`], opens the output sink, runs the crawl and
//! maps the outcome to an exit status: 0 on success, 2 for bad flags or
//! settings (nothing is fetched), 1 when the results cannot be written.

use clap::{CommandFactory, Parser};
use fisl_crawler::{
    BASE_PROPOSAL_URL, Config, Crawler, Error, HttpConfig, IdRange, OutputConfig, OutputFormat,
};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status for invalid flags or settings
const USAGE_EXIT_CODE: u8 = 2;

/// FISL Crawler: crawl pages from the FISL 11 Papers NG proposal platform
#[derive(Parser, Debug)]
#[command(name = "fisl-crawler", version)]
#[command(about = "Crawl FISL Papers NG proposals and export them as CSV or JSON", long_about = None)]
struct Cli {
    /// From id
    #[arg(short, long, default_value_t = 1)]
    start: u64,

    /// To id
    #[arg(short, long, default_value_t = 5)]
    end: u64,

    /// The output format. Available formats: csv, json
    #[arg(short, long, default_value = "csv")]
    format: OutputFormat,

    /// If the output format can be pretty printed (json), the number of spaces per indent level
    #[arg(short, long)]
    indent: Option<usize>,

    /// Save the output to the given file instead of stdout
    #[arg(short = 'o', long = "output-file")]
    output_file: Option<PathBuf>,

    /// Print extra info while performing the tasks
    #[arg(short, long)]
    verbose: bool,

    /// Proposal page URL the `id` query parameter is appended to
    #[arg(long, default_value = BASE_PROPOSAL_URL)]
    base_url: String,

    /// Request timeout in seconds (default: no timeout)
    #[arg(long)]
    timeout: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            base_url: self.base_url,
            range: IdRange::new(self.start, self.end),
            output: OutputConfig {
                format: self.format,
                indent: self.indent,
                path: self.output_file,
            },
            http: HttpConfig {
                timeout_secs: self.timeout,
                ..Default::default()
            },
            verbose: self.verbose,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Like `--help`, running without any flag only prints usage.
    if std::env::args_os().len() < 2 {
        Cli::command().print_help().ok();
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.into_config();

    if let Err(e) = config.validate() {
        return usage_error(&e);
    }
    let sink = match open_sink(config.output.path.as_deref()) {
        Ok(sink) => sink,
        Err(e) => return usage_error(&e),
    };
    let crawler = match Crawler::from_config(&config) {
        Ok(crawler) => crawler,
        Err(e) => return usage_error(&e),
    };

    match crawler.run(sink).await {
        Ok(summary) => {
            info!(
                extracted = summary.extracted,
                visited = summary.visited,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "fisl_crawler=debug"
    } else {
        "fisl_crawler=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Output file if one was given, stdout otherwise
fn open_sink(path: Option<&Path>) -> fisl_crawler::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::config(
                    "output_file",
                    format!("cannot create '{}': {}", path.display(), e),
                )
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

fn usage_error(err: &Error) -> ExitCode {
    eprintln!("error: {err}\n");
    Cli::command().write_help(&mut io::stderr()).ok();
    ExitCode::from(USAGE_EXIT_CODE)
}

// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use jelox::output::sink::DEFAULT_OUTPUT;
use jelox::utils::banner::print_banner;
use jelox::utils::logging::{Notice, init_logger};
use jelox::{Config, Mode, Orchestrator, OutputSink, SourceFlags};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "jelox")]
#[command(version)]
#[command(
    about = "Collect file paths from git repositories or local directories into a wordlist",
    long_about = "Collect file paths from git repositories or local directories into a wordlist.\n\n\
                  Source priority: -u, then -d, then -l. Without any of them, repository URLs \
                  are read from standard input, one per line."
)]
struct Cli {
    /// Output file; pass an empty value to skip writing
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        env = "JELOX_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    output: String,

    /// Local directory to process
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// File containing repository URLs, one per line
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    list: Option<String>,

    /// Single repository URL to process
    #[arg(short = 'u', long = "url", value_name = "URL")]
    url: Option<String>,

    /// Force ANSI colors on or off; NO_COLOR and CLICOLOR apply when omitted
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    color: Option<bool>,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    fn source_flags(&self) -> SourceFlags {
        SourceFlags {
            url: self.url.clone(),
            directory: self.directory.as_ref().map(PathBuf::from),
            list: self.list.as_ref().map(PathBuf::from),
        }
    }
}

fn main() -> Result<()> {
    if std::env::args_os().len() <= 1 {
        print_banner();
        println!("No arguments provided, showing help...");
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print_banner();
            err.exit();
        }
    };

    if let Some(color) = cli.color {
        colored::control::set_override(color);
    }
    let colored_output = colored::control::SHOULD_COLORIZE.should_colorize();
    init_logger(colored_output, cli.verbose);
    print_banner();

    let config = Config::load().context("Failed to load configuration")?;
    debug!("Configuration: {:?}", config);

    let mode = Mode::select(&cli.source_flags());
    let outcome = Orchestrator::new(&config)
        .with_color(colored_output)
        .run(&mode)
        .context("Enumeration failed")?;

    let sink = OutputSink::new(Some(PathBuf::from(&cli.output)));
    match sink.emit(&outcome.files).context("Failed to write output")? {
        Some(written) => {
            if let Some(path) = sink.output_path() {
                Notice::Saved.emit(&format!("Saved {} paths to {}", written, path.display()));
            }
        }
        None => Notice::Skipped.emit("Output file disabled, nothing saved"),
    }

    Ok(())
}

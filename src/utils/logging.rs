// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Diagnostics go to stderr; stdout is reserved for collected paths.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// User-facing status line on stderr, separate from tracing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    Failed,
    Skipped,
    Processing,
}

impl Notice {
    pub fn render(self, msg: &str) -> String {
        match self {
            Notice::Saved => format!("{} {}", "✓".green().bold(), msg.green()),
            Notice::Failed => format!("{} {}", "✗".red().bold(), msg.red()),
            Notice::Skipped => format!("{} {}", "⚠".yellow().bold(), msg.yellow()),
            Notice::Processing => format!("{} {}", "»".magenta().bold(), msg.magenta()),
        }
    }

    pub fn emit(self, msg: &str) {
        eprintln!("{}", self.render(msg));
    }
}

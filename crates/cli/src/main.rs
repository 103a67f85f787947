use anyhow::Result;
use bindings_core::report::{ReportFormat, ReportOptions, DEFAULT_SEPARATOR};
use bindings_report::commands::{report_command, show_command, skipped_command};
use bindings_report::init_logging;
use clap::{ArgAction, Parser, Subcommand};

/// Summarise JNDI bindings exports from MQ administration tooling.
///
/// This CLI is a thin wrapper around `bindings-core` (exposed in code as
/// `bindings_core`). Parsing, aggregation and classification all live in the
/// library.
#[derive(Parser, Debug)]
#[command(
    name = "bindings-report",
    version,
    about = "Summarise JNDI bindings exports",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one line per binding: name, queue, target client, ccsid.
    ///
    /// Bindings are sorted by name. Comment and malformed lines are skipped.
    Report {
        /// Path to the bindings file (e.g. `.bindings`).
        #[arg(long)]
        file: String,

        /// Field separator for text output.
        #[arg(long, default_value = DEFAULT_SEPARATOR)]
        separator: String,

        /// Output format: text, json or yaml.
        #[arg(long, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Show every property of a single binding.
    Show {
        /// Path to the bindings file.
        #[arg(long)]
        file: String,

        /// Binding (JNDI) name to show.
        #[arg(long)]
        name: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List lines that were skipped while parsing, with the reason.
    ///
    /// Also reports how many assignments named an unknown attribute.
    Skipped {
        /// Path to the bindings file.
        #[arg(long)]
        file: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Report { file, separator, format } => {
            report_command(&file, &ReportOptions::new(separator, format))?
        }
        Command::Show { file, name, json } => show_command(&file, &name, json)?,
        Command::Skipped { file, json } => skipped_command(&file, json)?,
    }

    Ok(())
}

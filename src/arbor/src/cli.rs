use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::*;

pub mod helpers;

pub mod io;
pub use io::*;

mod processor;
pub use processor::*;

pub const HYPHEN: &str = "-";

/// The CLI interface for the Arbor application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: ArborCommand,

    #[clap(flatten)]
    pub verbosity: Verbosity,
}

/// The top-level commands supported by Arbor.
#[derive(Debug, Subcommand)]
pub enum ArborCommand {
    Find(find::Find),
    Ini(ini::Ini),
    Json(json::Json),
    Keys(keys::Keys),
    Merge(merge::Merge),
    Show(show::Show),
    Stats(stats::Stats),
}

impl Command for ArborCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Find(find) => find.handle(),
            Self::Ini(ini) => ini.handle(),
            Self::Json(json) => json.handle(),
            Self::Keys(keys) => keys.handle(),
            Self::Merge(merge) => merge.handle(),
            Self::Show(show) => show.handle(),
            Self::Stats(stats) => stats.handle(),
        }
    }
}

use std::path::PathBuf;

use clap::Args;

use super::Command;
use crate::cli::{helpers, read_one, InputSource, LoadArgs, OutputSource, HYPHEN};

/// Subcommand for layering configuration documents on top of each other.
///
/// Later documents replace values of the same name in earlier ones.
/// Nothing is ever removed by a merge.
#[derive(Debug, Args)]
pub struct Merge {
    /// The document to start from.
    base: PathBuf,

    /// The documents to merge into the base, in order.
    #[clap(required = true)]
    overlays: Vec<PathBuf>,

    /// The file to write the merged document to.
    ///
    /// Defaults to "-" for printing output to stdout.
    #[clap(short, default_value = HYPHEN)]
    output: PathBuf,

    #[clap(flatten)]
    load: LoadArgs,
}

impl Command for Merge {
    fn handle(self) -> eyre::Result<()> {
        let options = self.load.options();
        let read = |path: PathBuf| {
            read_one(InputSource::File(path), |r| helpers::read_config(r, &options))
        };

        let mut merged = read(self.base)?;
        for overlay in self.overlays {
            log::info!("Merging '{}'", overlay.display());
            let config = read(overlay)?;
            merged.overwrite_with_config(&config);
        }

        helpers::write_as_json(None, merged, OutputSource::single(self.output))
    }
}

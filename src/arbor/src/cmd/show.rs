use clap::Args;

use super::Command;
use crate::cli::{helpers, read_one, Input, LoadArgs};

/// Subcommand for printing the values of a configuration tree.
#[derive(Debug, Args)]
pub struct Show {
    #[clap(flatten)]
    input: Input,

    /// Only prints the subconfig at this slash-separated path.
    #[clap(long)]
    path: Option<String>,

    #[clap(flatten)]
    load: LoadArgs,
}

impl Command for Show {
    fn handle(self) -> eyre::Result<()> {
        let options = self.load.options();
        let config = read_one(self.input.source(), |r| helpers::read_config(r, &options))?;
        let node = super::descend(&config, self.path.as_deref())?;

        println!("{}", node.all_vals_as_string("\n").trim_start_matches('\n'));
        Ok(())
    }
}

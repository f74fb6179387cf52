use clap::Args;
use serde::Serialize;

use super::Command;
use crate::cli::{helpers, read_one, Input, LoadArgs, OutputSource};

/// Subcommand for counting the entries of a configuration tree.
#[derive(Debug, Args)]
pub struct Stats {
    #[clap(flatten)]
    input: Input,

    #[clap(flatten)]
    load: LoadArgs,
}

#[derive(Serialize)]
struct Counts {
    values: usize,
    subconfigs: usize,
    entries: usize,
    tree_values: usize,
    tree_subconfigs: usize,
    tree_entries: usize,
}

impl Command for Stats {
    fn handle(self) -> eyre::Result<()> {
        let options = self.load.options();
        let config = read_one(self.input.source(), |r| helpers::read_config(r, &options))?;

        let counts = Counts {
            values: config.num_values(),
            subconfigs: config.num_subconfigs(),
            entries: config.num_entries(),
            tree_values: config.config_tree_num_values(),
            tree_subconfigs: config.config_tree_num_subconfigs(),
            tree_entries: config.config_tree_num_entries(),
        };

        helpers::write_as_json(None, counts, OutputSource::Stdout)
    }
}

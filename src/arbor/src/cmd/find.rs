use clap::Args;

use super::Command;
use crate::cli::{helpers, read_one, Input, LoadArgs};

/// Subcommand for locating a value anywhere in a configuration tree.
///
/// Values of a subconfig are searched before its children, and children
/// in document order. The path to the first match is printed.
#[derive(Debug, Args)]
pub struct Find {
    /// The name of the value to look for.
    key: String,

    #[clap(flatten)]
    input: Input,

    #[clap(flatten)]
    load: LoadArgs,
}

impl Command for Find {
    fn handle(self) -> eyre::Result<()> {
        let options = self.load.options();
        let config = read_one(self.input.source(), |r| helpers::read_config(r, &options))?;

        let breadcrumb = config.find_value(&self.key);
        let Some((key, path)) = breadcrumb.split_last() else {
            eyre::bail!("no value named '{}' in configuration", self.key);
        };

        let mut node = &config;
        for name in path {
            node = node.subconfig_view(name);
        }

        println!("{} = {}", breadcrumb.join("/"), node.get_as_string(key));
        Ok(())
    }
}

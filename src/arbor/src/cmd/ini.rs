use clap::Args;

use super::Command;
use crate::cli::{helpers, process_par, InputsOutputs, LoadArgs};

/// Subcommand for converting configuration documents to INI files.
#[derive(Debug, Args)]
pub struct Ini {
    #[clap(flatten)]
    args: InputsOutputs,

    #[clap(flatten)]
    load: LoadArgs,
}

impl Command for Ini {
    fn handle(self) -> eyre::Result<()> {
        let options = self.load.options();

        let (inputs, outputs) = self.args.evaluate("ini")?;
        process_par(
            inputs,
            outputs,
            |r| {
                let config = helpers::read_config(r, &options)?;
                Ok(config.config_group().to_string())
            },
            helpers::write_as_text,
        )
    }
}

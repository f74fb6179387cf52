use arbor_config::JsonOptions;
use clap::Args;

use super::Command;
use crate::cli::{helpers, process_par, InputsOutputs, LoadArgs};

/// Subcommand for normalizing configuration documents.
///
/// Fields that cannot be represented as configuration values are
/// dropped, values are written before subconfigs and typed values
/// use their canonical form.
#[derive(Debug, Args)]
pub struct Json {
    #[clap(flatten)]
    args: InputsOutputs,

    /// Writes angles as plain numbers and quaternions as plain arrays.
    ///
    /// Such documents lose type information when read again.
    #[clap(long)]
    plain: bool,

    #[clap(flatten)]
    load: LoadArgs,
}

impl Command for Json {
    fn handle(self) -> eyre::Result<()> {
        let options = JsonOptions {
            typed_wrappers: !self.plain,
            ..self.load.options()
        };

        let (inputs, outputs) = self.args.evaluate("json")?;
        process_par(
            inputs,
            outputs,
            |r| {
                let config = helpers::read_config(r, &options)?;
                Ok(config.write_to_json_with(&options))
            },
            helpers::write_as_json,
        )
    }
}

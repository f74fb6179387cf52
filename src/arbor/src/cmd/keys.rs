use arbor_config::ConfigValType;
use clap::Args;

use super::Command;
use crate::cli::{helpers, read_one, Input, LoadArgs};

fn parse_type(name: &str) -> Result<ConfigValType, String> {
    ConfigValType::from_name(name).ok_or_else(|| {
        let names: Vec<_> = ConfigValType::ALL.iter().map(|ty| ty.name()).collect();
        format!("expected one of {}", names.join(", "))
    })
}

/// Subcommand for listing the keys of a configuration.
#[derive(Debug, Args)]
pub struct Keys {
    #[clap(flatten)]
    input: Input,

    /// Only lists values of this type.
    #[clap(long = "type", value_parser = parse_type)]
    ty: Option<ConfigValType>,

    /// Lists subconfig names instead of values.
    #[clap(long, conflicts_with = "ty")]
    subconfigs: bool,

    /// Lists the keys of the subconfig at this slash-separated path.
    #[clap(long)]
    path: Option<String>,

    #[clap(flatten)]
    load: LoadArgs,
}

impl Command for Keys {
    fn handle(self) -> eyre::Result<()> {
        let options = self.load.options();
        let config = read_one(self.input.source(), |r| helpers::read_config(r, &options))?;
        let node = super::descend(&config, self.path.as_deref())?;

        if self.subconfigs {
            for name in node.subconfig_keys() {
                println!("{name}");
            }
        } else if let Some(ty) = self.ty {
            for key in node.stored_keys(ty) {
                println!("{key}");
            }
        } else {
            for (key, ty) in node.value_types() {
                println!("{key}: {ty}");
            }
        }

        Ok(())
    }
}

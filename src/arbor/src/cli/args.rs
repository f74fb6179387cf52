use arbor_config::JsonOptions;
use clap::{ArgAction, Args};

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Configures the log verbosity of Arbor.
    ///
    /// `-v` is Debug, `-vv` is Trace.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) -> eyre::Result<()> {
        let level = self.log_level();
        simple_logger::init_with_level(level)?;
        Ok(())
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Options for reading configuration documents.
#[derive(Clone, Copy, Debug, Args)]
pub struct LoadArgs {
    /// How deeply objects may be nested in input documents.
    ///
    /// Deeper objects are skipped with a warning.
    #[clap(long, default_value_t = i8::MAX)]
    pub recursion_limit: i8,
}

impl LoadArgs {
    pub fn options(self) -> JsonOptions {
        JsonOptions {
            recursion_limit: self.recursion_limit,
            ..Default::default()
        }
    }
}

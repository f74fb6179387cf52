use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use arbor_config::{Configuration, JsonOptions};

use super::{OutputSource, Reader};
use crate::utils;

/// Parses a configuration document from `reader`.
pub fn read_config(reader: Reader, options: &JsonOptions) -> eyre::Result<Configuration> {
    let config = Configuration::from_reader_with(reader, options)?;
    log::debug!("Read configuration with {} values", config.config_tree_num_values());
    Ok(config)
}

fn resolve_output(inpath: Option<PathBuf>, out: OutputSource) -> eyre::Result<Option<PathBuf>> {
    match (out, inpath) {
        (OutputSource::Stdout, _) => Ok(None),
        (OutputSource::File(path), _) => Ok(Some(path)),
        (OutputSource::Dir(mut out, suffix), Some(path)) => {
            // Create a file named after the input in the output directory.
            let infile = path.with_extension(suffix);
            let name = infile
                .file_name()
                .ok_or_else(|| eyre::eyre!("'{}' does not name a file", path.display()))?;
            out.push(name);

            Ok(Some(out))
        }

        (OutputSource::Dir(..), None) => Err(eyre::eyre!(
            "output path for stdin input is directory; specify a file path instead"
        )),
    }
}

/// Helper function to be used with [`process`](super::process) for
/// mapping any serializable `T` value to an output source.
///
/// Files and pipes get minified JSON. Output to a terminal is always
/// pretty-printed.
pub fn write_as_json<T: serde::Serialize>(
    inpath: Option<PathBuf>,
    value: T,
    out: OutputSource,
) -> eyre::Result<()> {
    match resolve_output(inpath, out)? {
        Some(path) => {
            let mut writer = utils::create_output(&path)?;
            serde_json::to_writer(&mut writer, &value)?;
            writer.flush()?;
        }

        None => {
            let mut stdout = io::stdout().lock();
            if stdout.is_terminal() {
                serde_json::to_writer_pretty(&mut stdout, &value)?;
                writeln!(stdout)?;
            } else {
                serde_json::to_writer(&mut stdout, &value)?;
            }
        }
    }

    Ok(())
}

/// Helper function to be used with [`process`](super::process) for
/// writing plain text to an output source.
pub fn write_as_text(inpath: Option<PathBuf>, value: String, out: OutputSource) -> eyre::Result<()> {
    let out = resolve_output(inpath, out)?;
    utils::write_to_output_source(out, &value)
}

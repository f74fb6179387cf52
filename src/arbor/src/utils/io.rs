use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::{Path, PathBuf},
    process,
};

use clap::CommandFactory;

use crate::cli::Cli;

/// Obtains a buffered reader over the contents of stdin.
///
/// This function will terminate the process and print the running
/// command's help if stdin is connected to a terminal.
pub fn stdin_reader() -> io::BufReader<io::StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    io::BufReader::new(stdin.lock())
}

/// Creates `path` for buffered writing, truncating any existing file.
pub fn create_output(path: &Path) -> eyre::Result<BufWriter<fs::File>> {
    let file = fs::File::create(path)
        .map_err(|e| eyre::eyre!("failed to create '{}': {e}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Writes the given text to a file or to stdout.
pub fn write_to_output_source(out: Option<PathBuf>, text: &str) -> eyre::Result<()> {
    if let Some(out) = out {
        let mut writer = create_output(&out)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
    }

    Ok(())
}

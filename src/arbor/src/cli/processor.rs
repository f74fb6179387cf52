use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use eyre::Context;
use rayon::prelude::*;

use super::{InputSource, OutputSource};
use crate::utils;

/// A reader over a compatible input source.
pub enum Reader {
    Stdin(io::Cursor<Vec<u8>>),
    File(io::BufReader<fs::File>),
}

impl Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(i) => i.read(buf),
            Self::File(i) => i.read(buf),
        }
    }

    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        match self {
            Self::Stdin(i) => i.read_to_end(buf),
            Self::File(i) => i.read_to_end(buf),
        }
    }
}

fn open_stdin() -> eyre::Result<Reader> {
    let mut stdin = utils::stdin_reader();
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;

    Ok(Reader::Stdin(io::Cursor::new(buf)))
}

fn open_file(path: &Path) -> eyre::Result<Reader> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    Ok(Reader::File(io::BufReader::new(file)))
}

/// Reads a single input that must not be a glob of several files.
pub fn read_one<T>(
    input: InputSource,
    read: impl FnOnce(Reader) -> eyre::Result<T>,
) -> eyre::Result<T> {
    match input {
        InputSource::Stdin => read(open_stdin()?),
        InputSource::File(path) => read(open_file(&path)?)
            .with_context(|| format!("failed to process '{}'", path.display())),
        InputSource::Files(..) => Err(eyre::eyre!("expected a single input document")),
    }
}

/// Processes inputs sequentially.
pub fn process<T>(
    input: InputSource,
    output: OutputSource,
    mut read: impl FnMut(Reader) -> eyre::Result<T>,
    mut write: impl FnMut(Option<PathBuf>, T, OutputSource) -> eyre::Result<()>,
) -> eyre::Result<()> {
    match (input, output) {
        (InputSource::Stdin, out) => {
            let value = read(open_stdin()?)?;
            write(None, value, out)
        }

        (InputSource::File(path), out) => {
            let value = read(open_file(&path)?)?;
            write(Some(path), value, out)
        }

        (InputSource::Files(paths), OutputSource::Dir(dir, suffix)) => {
            fs::create_dir_all(&dir)?;
            for path in paths {
                let value = read(open_file(&path)?)?;
                write(Some(path), value, OutputSource::Dir(dir.clone(), suffix))?;
            }

            Ok(())
        }

        (InputSource::Files(..), _) => Err(eyre::eyre!(
            "several inputs need an output directory"
        )),
    }
}

/// Processes inputs with rayon parallelism for batch operations.
pub fn process_par<T, R, W>(
    input: InputSource,
    output: OutputSource,
    read: R,
    write: W,
) -> eyre::Result<()>
where
    T: Send,
    R: Fn(Reader) -> eyre::Result<T> + Sync,
    W: Fn(Option<PathBuf>, T, OutputSource) -> eyre::Result<()> + Sync,
{
    match (input, output) {
        (InputSource::Files(paths), OutputSource::Dir(dir, suffix)) => {
            fs::create_dir_all(&dir)?;
            paths.into_par_iter().try_for_each(|path| {
                let value = read(open_file(&path)?)
                    .with_context(|| format!("failed to process '{}'", path.display()))?;
                write(Some(path), value, OutputSource::Dir(dir.clone(), suffix))
            })
        }

        (input, output) => process(input, output, read, write),
    }
}

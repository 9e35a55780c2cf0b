use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod day01;

/// Puzzle input lives next to wherever the binary is run from.
pub const INPUT_PATH: &str = "input";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("can't parse integer on line {line}: {text:?}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Log to stderr so stdout only ever carries the answer.
/// `RUST_LOG` overrides the default of `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn read_input_file() -> Result<String> {
    read_file(INPUT_PATH)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| Error::Utf8 {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_input_lines<T, F>(f: F) -> Result<Vec<T>>
where
    F: FnMut(&str) -> Result<T, ParseIntError>,
{
    let s = read_input_file()?;
    let nums = parse_lines(&s, f)?;
    debug!(path = INPUT_PATH, count = nums.len(), "read input");
    Ok(nums)
}

/// Runs `f` on every line. Surrounding whitespace is trimmed first and blank
/// lines are skipped; a line `f` rejects is an error.
pub fn parse_lines<T, F>(s: &str, mut f: F) -> Result<Vec<T>>
where
    F: FnMut(&str) -> Result<T, ParseIntError>,
{
    s.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| {
            f(text).map_err(|source| Error::Parse {
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

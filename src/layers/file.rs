//! Configuration file ingestion.
//!
//! Reading a file and parsing its dialect are separate concerns: [`load_file`]
//! does the I/O (an unreadable file is a
//! [`SourceUnavailable`](crate::SettingError::SourceUnavailable) failure) and
//! hands the contents to a [`Dialect`], which turns them into flat key/value
//! pairs. The store never sees file syntax.
//!
//! One trivial dialect ships here: [`PropertiesDialect`], `key=value` lines
//! with `#`/`!` comments. Anything richer belongs to the embedding
//! application.

use camino::Utf8Path;

use crate::error::SettingError;
use crate::source::Source;
use crate::store::SettingsStore;

/// Turns file contents into flat key/value pairs.
///
/// Implementations decide what malformed input means for their dialect; the
/// trivial ones simply skip lines they do not understand.
pub trait Dialect {
    /// Parses the full contents of a configuration file.
    fn parse(&self, contents: &str) -> Vec<(String, String)>;
}

/// `key=value` lines. `#` and `!` start comments, blank lines are skipped,
/// whitespace around keys and values is trimmed, and a line without `=` is a
/// key with an empty value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesDialect;

impl Dialect for PropertiesDialect {
    fn parse(&self, contents: &str) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) => {
                    pairs.push((key.trim_end().to_string(), value.trim_start().to_string()));
                }
                None => pairs.push((line.to_string(), String::new())),
            }
        }
        pairs
    }
}

/// Reads the file at `path`, parses it with `dialect` and feeds the pairs
/// into `store` under a `config file at "<path>"` source.
pub fn load_file(
    store: &mut SettingsStore,
    path: impl AsRef<Utf8Path>,
    dialect: &dyn Dialect,
) -> Result<(), SettingError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|cause| {
        SettingError::source_unavailable(format!("config file at \"{path}\""), cause)
    })?;

    let source = Source::config_file(path);
    let pairs = dialect.parse(&contents);
    tracing::debug!(path = %path, entries = pairs.len(), "ingesting config file");
    store.add_all(pairs, &source);
    Ok(())
}

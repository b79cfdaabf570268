//! Provenance labels for stored entries.
//!
//! A [`Source`] is a free-text description of where a configuration entry came
//! from. It is attached to every entry at ingestion time and surfaces later in
//! provenance messages such as
//! `Key "serverPort" was read as "SERVER_PORT" from environment variables`.

use std::fmt;
use std::panic::Location;

use camino::Utf8Path;

/// A human-readable provenance label attached to a stored entry.
///
/// Sources are cheap to clone and compare; equality is on the description
/// text, which is all a source carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    description: String,
}

impl Source {
    /// A source describing a configuration file at the given path.
    ///
    /// The description reads `config file at "<path>"`.
    pub fn config_file(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            description: format!("config file at \"{}\"", path.as_ref()),
        }
    }

    /// The source used for entries read from the process environment.
    pub fn environment() -> Self {
        Self {
            description: "environment variables".to_string(),
        }
    }

    /// The source used for entries parsed from command-line tokens.
    pub fn command_line() -> Self {
        Self {
            description: "command line parameters".to_string(),
        }
    }

    /// A source with a caller-supplied description.
    pub fn custom(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// A source describing the code location of the caller.
    ///
    /// Used for programmatic insertions that did not supply an explicit
    /// label; the description reads `programmatic insert at <file>:<line>`.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            description: format!(
                "programmatic insert at {}:{}",
                location.file(),
                location.line()
            ),
        }
    }

    /// The description text.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

//! Error types for settings resolution.
//!
//! Every failure of a single resolution attempt surfaces as a [`SettingError`].
//! Errors are terminal for the attempt that triggered them: there is no retry
//! and no partial result, and the library itself never logs — surfacing an
//! unrecovered error is the caller's responsibility.

use std::fmt;
use std::io;

/// An error produced while resolving or ingesting a setting.
#[derive(Debug)]
#[non_exhaustive]
pub enum SettingError {
    /// The requested key has no matching entry and the binding carries no
    /// default.
    MissingKey {
        /// The effective lookup key that was requested.
        key: String,
        /// A similarly-spelled stored key, when one exists (see [`help`](Self::help)).
        suggestion: Option<String>,
    },

    /// A matched entry's raw value could not be coerced to the requested type.
    Parse {
        /// The stored key the matcher resolved to.
        key: String,
        /// The raw string value that failed to coerce.
        value: String,
        /// The coercer's short, type-specific reason.
        reason: String,
    },

    /// An ingestion collaborator could not obtain its raw data.
    SourceUnavailable {
        /// Description of the unavailable resource, e.g. `config file at "/etc/app.conf"`.
        resource: String,
        /// The underlying I/O failure.
        cause: io::Error,
    },
}

impl SettingError {
    pub(crate) fn missing(key: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::MissingKey {
            key: key.into(),
            suggestion,
        }
    }

    pub(crate) fn parse(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn source_unavailable(resource: impl Into<String>, cause: io::Error) -> Self {
        Self::SourceUnavailable {
            resource: resource.into(),
            cause,
        }
    }

    /// Returns true if this is a missing-key failure.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }

    /// Returns additional help text for this error, if any.
    ///
    /// The help text is not part of [`Display`](fmt::Display) output; callers
    /// that surface errors interactively can append it themselves.
    pub fn help(&self) -> Option<String> {
        match self {
            Self::MissingKey {
                suggestion: Some(suggestion),
                ..
            } => Some(format!("did you mean \"{suggestion}\"?")),
            _ => None,
        }
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key, .. } => {
                write!(f, "Required key \"{key}\" is missing")
            }
            Self::Parse { key, value, reason } => {
                write!(
                    f,
                    "Failed to parse setting \"{key}\", the value is \"{value}\", but {reason}"
                )
            }
            Self::SourceUnavailable { resource, cause } => {
                write!(f, "Cannot read settings from {resource}: {cause}")
            }
        }
    }
}

impl std::error::Error for SettingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

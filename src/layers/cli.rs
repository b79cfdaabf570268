//! Command-line token ingestion.
//!
//! The convention, owned by whoever assembled the argv slice:
//! a token beginning with `-` introduces a key, with leading dashes stripped.
//! If the following token does not itself begin with `-`, it is the key's
//! value; otherwise the key is a flag, present with the implicit value
//! `"true"`. Tokens that arrive without a preceding key are skipped.
//!
//! Entries are tagged with the `command line parameters` source.

use crate::source::Source;
use crate::store::SettingsStore;

/// Feeds a sequence of command-line tokens into `store`.
///
/// ```
/// use quince::{layers::cli, SettingsStore};
///
/// let mut store = SettingsStore::new();
/// cli::load_args(&mut store, ["-port", "8080", "-verbose"]);
/// assert_eq!(store.find_by_exact_key("port").unwrap().value(), "8080");
/// assert_eq!(store.find_by_exact_key("verbose").unwrap().value(), "true");
/// ```
pub fn load_args<I, S>(store: &mut SettingsStore, args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        let Some(stripped) = token.strip_prefix('-') else {
            tracing::debug!(token = %token, "skipping token without a key");
            index += 1;
            continue;
        };
        let key = stripped.trim_start_matches('-');
        if key.is_empty() {
            tracing::debug!(token = %token, "skipping bare dash token");
            index += 1;
            continue;
        }

        match tokens.get(index + 1) {
            Some(next) if !next.starts_with('-') => {
                tracing::debug!(key = %key, value = %next, "ingesting command-line pair");
                store.add(key, next.as_str(), Source::command_line());
                index += 2;
            }
            _ => {
                tracing::debug!(key = %key, "ingesting command-line flag");
                store.add_flag(key, Source::command_line());
                index += 1;
            }
        }
    }
}

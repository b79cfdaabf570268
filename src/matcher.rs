//! Convention-agnostic key matching.
//!
//! Sources rarely agree on a naming convention: a config file says
//! `server-port`, the environment says `SERVER_PORT`, application code asks
//! for `serverPort`. The matcher makes them meet in the middle by comparing
//! *canonical forms*: keys folded to lowercase with hyphens and underscores
//! dropped, dot-separated segments kept apart.
//!
//! Resolution order for a requested key:
//! 1. An entry whose stored key equals the request exactly.
//! 2. Otherwise, the first entry (in insertion order) whose canonical form
//!    equals the request's canonical form. The stored key is recorded so
//!    provenance messages can say `read as "<storedKey>"`.
//! 3. Otherwise, no match.

use heck::ToSnakeCase;

use crate::store::{Entry, SettingsStore};

/// Computes the canonical form of a key.
///
/// Each dot-separated segment is split into word tokens at case boundaries,
/// hyphens and underscores, then rejoined lowercase with no separator. Dots
/// are *not* separators: they delimit namespace segments and survive as-is.
///
/// `foo-bar`, `FOO_BAR`, `fooBar` and `foo_bar` all canonicalize to `foobar`.
pub fn canonical(key: &str) -> String {
    key.split('.')
        .map(|segment| segment.to_snake_case().replace('_', ""))
        .collect::<Vec<_>>()
        .join(".")
}

/// A successful lookup: the winning entry, and whether it won exactly.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    entry: &'a Entry,
    exact: bool,
}

impl<'a> Match<'a> {
    /// The entry resolution settled on.
    pub fn entry(&self) -> &'a Entry {
        self.entry
    }

    /// True when the stored key equalled the requested key verbatim.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// The literal stored key, when the match was canonical rather than
    /// exact. Feeds the `read as "<storedKey>"` part of provenance messages.
    pub fn read_as(&self) -> Option<&'a str> {
        if self.exact {
            None
        } else {
            Some(self.entry.key())
        }
    }
}

/// Finds the best entry for a requested key: exact match first, canonical
/// match second, none otherwise.
pub fn find<'a>(store: &'a SettingsStore, key: &str) -> Option<Match<'a>> {
    if let Some(entry) = store.find_by_exact_key(key) {
        return Some(Match { entry, exact: true });
    }
    store
        .find_by_normalized_key(&canonical(key))
        .map(|entry| Match {
            entry,
            exact: false,
        })
}

/// Matches a requested identifier against a list of constant names, as used
/// for enumeration coercion: exact match first, then an ASCII-case-insensitive
/// fold. Returns the declared name that matched.
pub fn match_constant<'a>(requested: &str, names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .find(|name| **name == requested)
        .or_else(|| {
            names
                .iter()
                .find(|name| name.eq_ignore_ascii_case(requested))
        })
        .copied()
}

/// Looks for a stored key whose canonical form is a near-miss of the
/// requested key's, for "did you mean" hints on missing-key errors.
pub(crate) fn similar_key(store: &SettingsStore, requested: &str) -> Option<String> {
    let wanted = canonical(requested);
    store
        .iter()
        .find(|entry| is_similar(&canonical(entry.key()), &wanted))
        .map(|entry| entry.key().to_string())
}

/// Check if two strings are similar (differ by at most 2 edits).
fn is_similar(a: &str, b: &str) -> bool {
    if a == b {
        return false; // an equal canonical form would have matched already
    }
    let len_diff = (a.len() as isize - b.len() as isize).abs();
    if len_diff > 2 {
        return false;
    }

    let mut diffs = 0;
    for (ac, bc) in a.chars().zip(b.chars()) {
        if ac != bc {
            diffs += 1;
        }
    }
    diffs += len_diff as usize;
    diffs <= 2
}

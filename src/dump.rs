//! Debug dump of the store's resolvable keys.
//!
//! [`render`] produces a human-oriented listing of every currently
//! resolvable key with its raw value and the source that supplied it — the
//! kind of output an application prints behind a `--print-config` switch.
//! Formatting only; nothing here logs or mutates the store.

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::color::should_use_color;
use crate::store::SettingsStore;

/// Renders every resolvable key with its value and source, one per line,
/// colored when stdout supports it.
pub fn render(store: &SettingsStore) -> String {
    render_with_color(store, should_use_color())
}

/// [`render`] with explicit control over coloring, for tests and for writing
/// to places that are not stdout.
pub fn render_with_color(store: &SettingsStore, color: bool) -> String {
    let rows: Vec<(String, String, String)> = store
        .all()
        .into_iter()
        .map(|(key, value)| {
            // The last-added exact entry is the one `all()` reported.
            let source = store
                .find_by_exact_key(&key)
                .map(|entry| entry.source().to_string())
                .unwrap_or_default();
            (key, value, source)
        })
        .collect();

    let key_width = rows.iter().map(|(key, _, _)| key.len()).max().unwrap_or(0);

    let mut output = String::new();
    for (key, value, source) in rows {
        let padding = " ".repeat(key_width - key.len());
        if color {
            writeln!(
                output,
                "  {}{padding} = {value}  {}",
                key.bold(),
                format!("({source})").dimmed()
            )
            .expect("writing to a String cannot fail");
        } else {
            writeln!(output, "  {key}{padding} = {value}  ({source})")
                .expect("writing to a String cannot fail");
        }
    }
    output
}

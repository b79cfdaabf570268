//! Provenance queries: every resolved value can name the source that
//! produced it, including the stored spelling when the match was
//! convention-normalized.

use quince::{Setting, SettingsStore, Source, coerce, string_setting};

#[test]
fn exact_match_from_a_config_file() {
    let mut store = SettingsStore::new();
    store.add("foo", "1", Source::config_file("/etc/app.conf"));

    assert_eq!(
        string_setting("foo").describe(&store).unwrap(),
        "Key \"foo\" was read from config file at \"/etc/app.conf\""
    );
}

#[test]
fn normalized_match_reports_the_stored_spelling() {
    let mut store = SettingsStore::new();
    store.add("SERVER_PORT", "8080", Source::config_file("/etc/app.conf"));

    assert_eq!(
        string_setting("serverPort").describe(&store).unwrap(),
        "Key \"serverPort\" was read as \"SERVER_PORT\" from config file at \"/etc/app.conf\""
    );
}

#[test]
fn renamed_and_grouped_bindings_describe_their_effective_key() {
    let mut store = SettingsStore::new();
    store.add("server.bind-address", "0.0.0.0", Source::custom("fixture"));

    let server = quince::Group::new("server");
    let address = string_setting("address")
        .rename("bindAddress")
        .group(&server);

    assert_eq!(
        address.describe(&store).unwrap(),
        "Key \"server.bindAddress\" was read as \"server.bind-address\" from fixture"
    );
}

#[test]
fn unresolved_query_fails_with_missing_key() {
    let store = SettingsStore::new();
    let err = string_setting("absent").describe(&store).unwrap_err();
    assert_eq!(err.to_string(), "Required key \"absent\" is missing");
}

#[test]
fn caller_location_labels_unattributed_inserts() {
    let mut store = SettingsStore::new();
    store.add("tuning-knob", "11", Source::caller());

    let description = Setting::new("tuningKnob", coerce::string())
        .describe(&store)
        .unwrap();
    assert!(
        description.contains("programmatic insert at"),
        "caller sources should name the inserting location: {description}"
    );
    assert!(description.contains("provenance.rs"));
}

#[test]
fn the_shared_store_supports_the_same_flow() {
    // The one test that touches the process-wide store; it holds the write
    // lock for the whole scenario so it cannot race other tests.
    let shared = SettingsStore::shared();
    let mut store = shared.write().expect("shared store lock");
    store.clear();
    store.add("shared-key", "42", Source::custom("shared fixture"));

    let setting = Setting::new("sharedKey", coerce::numeric::<i32>());
    assert_eq!(setting.get(&store).unwrap(), 42);

    store.clear();
    assert!(setting.get(&store).unwrap_err().is_missing_key());
}

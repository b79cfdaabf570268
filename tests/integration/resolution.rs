//! Resolution properties: convention-agnostic matching, flag semantics,
//! collection coercion and enumeration errors, end to end.

use std::collections::BTreeSet;

use quince::{Setting, SettingsStore, Source, coerce, flag, string_setting};

const STYLES: [&str; 4] = ["server-port", "SERVER_PORT", "serverPort", "server_port"];

#[test]
fn any_separator_style_resolves_against_any_other() {
    for stored in STYLES {
        let mut store = SettingsStore::new();
        store.add(stored, "8080", Source::custom("style fixture"));

        for requested in STYLES {
            let setting = Setting::new(requested, coerce::numeric::<u16>());
            assert_eq!(
                setting.get(&store).unwrap(),
                8080,
                "stored {stored}, requested {requested}"
            );
        }
    }
}

#[test]
fn exact_match_wins_when_both_rules_apply() {
    let mut store = SettingsStore::new();
    store.add("SERVER_PORT", "1111", Source::custom("first"));
    store.add("serverPort", "2222", Source::custom("second"));

    // `serverPort` matches the second entry exactly even though the first
    // also matches after normalization — and came earlier.
    let setting = Setting::new("serverPort", coerce::numeric::<u16>());
    assert_eq!(setting.get(&store).unwrap(), 2222);
}

#[test]
fn empty_store_fails_every_non_defaulted_binding() {
    let mut store = SettingsStore::new();
    store.add("anything", "x", Source::custom("fixture"));
    store.clear();

    for name in ["anything", "serverPort", "a.b.c"] {
        let err = string_setting(name).get(&store).unwrap_err();
        assert_eq!(err.to_string(), format!("Required key \"{name}\" is missing"));
    }
    assert_eq!(
        string_setting("anything").default("fallback".into()).get(&store).unwrap(),
        "fallback"
    );
}

#[test]
fn flag_semantics_end_to_end() {
    let mut store = SettingsStore::new();
    assert!(!flag("verbose").get(&store).unwrap(), "absent flag is false");

    store.add_flag("verbose", Source::command_line());
    assert!(flag("verbose").get(&store).unwrap(), "present flag is true");

    // Presence decides, not the value: even a falsey-looking raw string
    // reads as true through a flag binding.
    store.add("quiet", "0", Source::custom("fixture"));
    assert!(flag("quiet").get(&store).unwrap());
}

#[test]
fn list_and_set_semantics_differ_on_the_same_raw_value() {
    let mut store = SettingsStore::new();
    store.add("ids", "1,2,3,2,1", Source::custom("fixture"));

    let as_list = Setting::new("ids", coerce::list(coerce::numeric::<i32>()));
    assert_eq!(as_list.get(&store).unwrap(), vec![1, 2, 3, 2, 1]);

    let as_set = Setting::new("ids", coerce::set(coerce::numeric::<i32>()));
    assert_eq!(as_set.get(&store).unwrap(), BTreeSet::from([1, 2, 3]));
}

#[derive(Debug, Clone, PartialEq, strum::EnumString, strum::VariantNames)]
enum Channel {
    Alpha,
    Beta,
}

#[test]
fn enumeration_resolution_and_failure_message() {
    let mut store = SettingsStore::new();
    store.add("channel", "beTA", Source::custom("fixture"));

    let channel = Setting::new("channel", coerce::enumeration::<Channel>());
    assert_eq!(channel.get(&store).unwrap(), Channel::Beta);

    store.add("channel", "Gamma", Source::custom("override"));
    let err = channel.get(&store).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to parse setting \"channel\", the value is \"Gamma\", but \
         possible values are [Alpha, Beta]"
    );
}

#[test]
fn temporal_settings_resolve() {
    let mut store = SettingsStore::new();
    store.add("started-at", "2023-01-02T03:04:05+00:00", Source::custom("fixture"));
    store.add("timeout", "30s", Source::custom("fixture"));

    let started = Setting::new("startedAt", coerce::instant());
    assert_eq!(
        started.get(&store).unwrap().to_rfc3339(),
        "2023-01-02T03:04:05+00:00"
    );

    let timeout = Setting::new("timeout", coerce::duration());
    assert_eq!(timeout.get(&store).unwrap(), chrono::Duration::seconds(30));
}

#[test]
fn missing_key_help_suggests_a_near_miss() {
    let mut store = SettingsStore::new();
    store.add("server-ports", "8080", Source::custom("fixture"));

    let err = string_setting("serverPort").get(&store).unwrap_err();
    assert_eq!(err.to_string(), "Required key \"serverPort\" is missing");
    assert_eq!(err.help().as_deref(), Some("did you mean \"server-ports\"?"));
}

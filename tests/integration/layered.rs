//! Settings accumulated from several sources: a config file, environment
//! variables and command-line tokens, resolved through one store.

use std::io::Write as _;

use camino::Utf8PathBuf;
use quince::layers::cli;
use quince::layers::env::{EnvLayer, MockEnv};
use quince::layers::file::{PropertiesDialect, load_file};
use quince::{Setting, SettingsStore, Source, coerce, dump, flag};

/// Writes a properties file into `dir` and returns its UTF-8 path.
fn write_config(dir: &tempfile::TempDir, contents: &str) -> Utf8PathBuf {
    let path = dir.path().join("app.conf");
    let mut file = std::fs::File::create(&path).expect("create config file");
    file.write_all(contents.as_bytes()).expect("write config");
    Utf8PathBuf::from_path_buf(path).expect("utf-8 temp path")
}

fn populated_store(dir: &tempfile::TempDir) -> SettingsStore {
    let path = write_config(
        dir,
        "# demo configuration\nserver-host = localhost\nserver-port = 3000\n",
    );

    let mut store = SettingsStore::new();
    load_file(&mut store, &path, &PropertiesDialect).expect("config file loads");

    let env = MockEnv::from_pairs([("APP_SERVER_PORT", "4000"), ("APP_LOG_LEVEL", "debug")]);
    EnvLayer::new().prefix("APP_").load(&mut store, &env);

    cli::load_args(&mut store, ["-verbose", "-server-port", "5000"]);
    store
}

#[test]
fn earliest_source_wins_a_normalized_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = populated_store(&dir);

    // Three sources claim the canonical key `serverport`; the file was
    // ingested first, so its spelling and value win the normalized lookup.
    let port = Setting::new("serverPort", coerce::numeric::<u32>());
    assert_eq!(port.get(&store).unwrap(), 3000);
}

#[test]
fn exact_spelling_reaches_a_specific_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = populated_store(&dir);

    // `server-port` exists verbatim in both file and CLI entries; exact
    // matching is last-inserted-wins, so the CLI override is visible.
    let port = Setting::new("server-port", coerce::numeric::<u32>());
    assert_eq!(port.get(&store).unwrap(), 5000);
}

#[test]
fn every_source_contributes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = populated_store(&dir);

    let host = Setting::new("serverHost", coerce::string());
    assert_eq!(host.get(&store).unwrap(), "localhost");

    let level = Setting::new("logLevel", coerce::string());
    assert_eq!(level.get(&store).unwrap(), "debug");

    assert!(flag("verbose").get(&store).unwrap());
}

#[test]
fn reload_replaces_the_world() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = populated_store(&dir);

    let level = Setting::new("logLevel", coerce::string());
    assert_eq!(level.get(&store).unwrap(), "debug");

    store.clear();
    assert!(
        level.get(&store).unwrap_err().is_missing_key(),
        "after clear(), non-defaulted resolution must fail"
    );

    store.add("log-level", "warn", Source::custom("reload fixture"));
    assert_eq!(
        level.get(&store).unwrap(),
        "warn",
        "bindings resolve fresh against the re-populated store"
    );
}

#[test]
fn dump_lists_the_accumulated_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = populated_store(&dir);

    let rendered = dump::render_with_color(&store, false);
    for key in ["server-host", "server-port", "SERVER_PORT", "LOG_LEVEL", "verbose"] {
        assert!(rendered.contains(key), "dump should list {key}:\n{rendered}");
    }
    assert!(
        rendered.contains("command line parameters"),
        "dump should show sources:\n{rendered}"
    );
}

//! Environment variable ingestion.
//!
//! [`EnvLayer`] copies variables from an [`EnvSource`] into a store under the
//! `environment variables` provenance label. Keys are stored verbatim — the
//! matcher's canonical form makes `SERVER_PORT` resolvable as `serverPort`
//! later, so no renaming happens at ingestion time.
//!
//! An optional prefix restricts ingestion to variables that start with it and
//! strips it from the stored key, so with prefix `APP_` the variable
//! `APP_SERVER_PORT` is stored as `SERVER_PORT`.

use indexmap::IndexMap;

use crate::source::Source;
use crate::store::SettingsStore;

// ============================================================================
// EnvSource trait
// ============================================================================

/// Trait for abstracting over environment variable sources.
///
/// This allows testing without modifying the actual environment.
pub trait EnvSource {
    /// Get the value of an environment variable by name.
    fn get(&self, name: &str) -> Option<String>;

    /// Iterate over all environment variables.
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_>;
}

/// Environment source that reads from the actual process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnv;

impl EnvSource for StdEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(std::env::vars())
    }
}

/// Environment source backed by a map (for testing).
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: IndexMap<String, String>,
}

impl MockEnv {
    /// Create a new empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock environment from an iterator of key-value pairs.
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set an environment variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for MockEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(self.vars.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

// ============================================================================
// EnvLayer
// ============================================================================

/// Ingestion of environment variables into a [`SettingsStore`].
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    prefix: Option<String>,
}

impl EnvLayer {
    /// Creates a layer that ingests every variable the source yields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts ingestion to variables starting with `prefix` and strips it
    /// from the stored key. The prefix is matched literally, so include a
    /// trailing separator: `EnvLayer::new().prefix("APP_")`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Feeds the variables of `env` into `store`.
    pub fn load(&self, store: &mut SettingsStore, env: &dyn EnvSource) {
        for (name, value) in env.vars() {
            let key = match &self.prefix {
                Some(prefix) => match name.strip_prefix(prefix.as_str()) {
                    Some(rest) if !rest.is_empty() => rest.to_string(),
                    _ => continue,
                },
                None => name.clone(),
            };
            tracing::debug!(var = %name, key = %key, "ingesting environment variable");
            store.add(key, value, Source::environment());
        }
    }

    /// [`load`](Self::load) from the real process environment.
    pub fn load_process(&self, store: &mut SettingsStore) {
        self.load(store, &StdEnv);
    }
}

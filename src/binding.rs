//! Setting bindings: the public resolution entry point.
//!
//! A [`Setting`] binds an application-facing identifier to a coercer, an
//! optional explicit name, an optional owning [`Group`] and an optional
//! default. It holds no resolved value: every [`get`](Setting::get) resolves
//! afresh against whatever the store currently contains, so clearing and
//! re-populating the store is immediately visible to existing bindings.
//!
//! Names are always explicit — there is no reflection inferring them from the
//! declaration site.

use crate::coerce::{self, Coercer};
use crate::error::SettingError;
use crate::group::Group;
use crate::matcher;
use crate::store::SettingsStore;

/// A typed binding from an application identifier to a stored raw value.
///
/// ```
/// use quince::{coerce, Setting, SettingsStore, Source};
///
/// let mut store = SettingsStore::new();
/// store.add("SERVER_PORT", "8080", Source::environment());
///
/// let port = Setting::new("serverPort", coerce::numeric::<u16>());
/// assert_eq!(port.get(&store).unwrap(), 8080);
/// ```
#[derive(Clone)]
pub struct Setting<T> {
    name: String,
    rename: Option<String>,
    group: Option<Group>,
    coercer: Coercer<T>,
    default: Option<T>,
}

impl<T: Clone> Setting<T> {
    /// Declares a binding for `name` resolved through `coercer`.
    pub fn new(name: impl Into<String>, coercer: Coercer<T>) -> Self {
        Self {
            name: name.into(),
            rename: None,
            group: None,
            coercer,
            default: None,
        }
    }

    /// Overrides the lookup name while keeping the declared identifier.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Places the binding inside a group; the group's prefix is prepended to
    /// the lookup key.
    pub fn group(mut self, group: &Group) -> Self {
        self.group = Some(group.clone());
        self
    }

    /// Supplies a default returned — without consulting the coercer — when no
    /// entry matches.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// The effective lookup key: the owning group's prefix and the binding's
    /// name (the explicit rename when set), joined with a dot.
    pub fn key(&self) -> String {
        let name = self.rename.as_deref().unwrap_or(&self.name);
        match &self.group {
            Some(group) => format!("{}.{}", group.prefix(), name),
            None => name.to_string(),
        }
    }

    /// Resolves the binding against `store`.
    ///
    /// Exact key match is preferred, then a convention-normalized match; the
    /// winning raw value runs through the coercer. With no match, the default
    /// is returned if one was supplied, otherwise resolution fails with
    /// [`SettingError::MissingKey`].
    pub fn get(&self, store: &SettingsStore) -> Result<T, SettingError> {
        let key = self.key();
        match matcher::find(store, &key) {
            Some(found) => {
                let entry = found.entry();
                self.coercer
                    .coerce(entry.value())
                    .map_err(|err| SettingError::parse(entry.key(), entry.value(), err.reason()))
            }
            None => match &self.default {
                Some(default) => Ok(default.clone()),
                None => Err(SettingError::missing(
                    key.clone(),
                    matcher::similar_key(store, &key),
                )),
            },
        }
    }

    /// Resolves like [`get`](Setting::get) but returns a provenance
    /// description instead of a value:
    ///
    /// - `Key "<name>" was read from <source>` for an exact match,
    /// - `Key "<name>" was read as "<storedKey>" from <source>` for a
    ///   normalized match.
    ///
    /// Fails with [`SettingError::MissingKey`] when nothing matches, even if
    /// the binding has a default: a defaulted value has no source to report.
    pub fn describe(&self, store: &SettingsStore) -> Result<String, SettingError> {
        let key = self.key();
        let found = matcher::find(store, &key).ok_or_else(|| {
            SettingError::missing(key.clone(), matcher::similar_key(store, &key))
        })?;
        let source = found.entry().source();
        Ok(match found.read_as() {
            Some(stored) => format!("Key \"{key}\" was read as \"{stored}\" from {source}"),
            None => format!("Key \"{key}\" was read from {source}"),
        })
    }
}

/// Declares a boolean flag: absent resolves to `false`, present — under any
/// stored value — resolves to `true`.
///
/// Flags pair with [`SettingsStore::add_flag`] and the command-line layer,
/// which record presence with an implicit `"true"` value. Use
/// [`coerce::boolean`] with a plain [`Setting`] instead when the *text* of
/// the value should decide.
pub fn flag(name: impl Into<String>) -> Setting<bool> {
    Setting::new(name, Coercer::new(|_| Ok(true))).default(false)
}

/// Convenience for a string setting, the most common binding.
pub fn string_setting(name: impl Into<String>) -> Setting<String> {
    Setting::new(name, coerce::string())
}

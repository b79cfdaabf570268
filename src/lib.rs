#![warn(missing_docs)]
#![deny(unsafe_code)]
//! # quince - Layered Settings Resolution for Rust
//!
//! quince resolves application configuration from heterogeneous sources —
//! files, environment variables, command-line tokens, in-memory maps — into
//! named, typed values, while tolerating naming-convention mismatches between
//! sources and code, and recording for every resolved value which source
//! produced it.
//!
//! The moving parts:
//! - [`SettingsStore`] — an ordered store of raw `(key, value, source)`
//!   entries, keys kept verbatim
//! - [`matcher`] — convention-agnostic lookup: `SERVER_PORT`, `server-port`
//!   and `serverPort` all reach the same entry
//! - [`coerce`] — composable string-to-typed-value coercers
//! - [`Group`] — hierarchical key prefixes
//! - [`Setting`] — the typed binding application code reads through,
//!   re-resolved on every access
//!
//! ## Quick Start
//!
//! ```rust
//! use quince::layers::cli;
//! use quince::{coerce, flag, Setting, SettingsStore, Source};
//!
//! let mut store = SettingsStore::new();
//! store.add("SERVER_PORT", "8080", Source::environment());
//! cli::load_args(&mut store, ["-verbose"]);
//!
//! // The stored key uses SCREAMING_SNAKE, the code asks in camelCase:
//! let port = Setting::new("serverPort", coerce::numeric::<u16>()).default(80);
//! assert_eq!(port.get(&store).unwrap(), 8080);
//!
//! // Flags default to false on absence and read true on presence:
//! assert!(flag("verbose").get(&store).unwrap());
//!
//! // Every resolved value can tell you where it came from:
//! assert_eq!(
//!     port.describe(&store).unwrap(),
//!     "Key \"serverPort\" was read as \"SERVER_PORT\" from environment variables"
//! );
//! ```
//!
//! ## Groups
//!
//! Groups compose dotted key prefixes for settings declared within them:
//!
//! ```rust
//! use quince::{coerce, Group, Setting, SettingsStore, Source};
//!
//! let mut store = SettingsStore::new();
//! store.add("outer.subgroup.key", "value", Source::custom("fixture"));
//!
//! let outer = Group::new("outer");
//! let setting = Setting::new("key", coerce::string()).group(&outer.subgroup("subgroup"));
//! assert_eq!(setting.get(&store).unwrap(), "value");
//! ```
//!
//! ## Coercers compose
//!
//! A collection coercer is built from any other coercer, recursively:
//!
//! ```rust
//! use quince::coerce;
//!
//! let ports = coerce::list(coerce::numeric::<u16>());
//! assert_eq!(ports.coerce("8080, 8081").unwrap(), vec![8080, 8081]);
//! ```
//!
//! ## Lifecycle
//!
//! Bindings cache nothing. [`SettingsStore::clear`] followed by re-population
//! is immediately visible to every existing [`Setting`], which is how
//! configuration reload works in tests and at startup. A process-wide store
//! is available behind [`SettingsStore::shared`] for applications that want
//! one; libraries should take a `&SettingsStore` parameter instead.

pub mod coerce;
pub mod dump;
pub mod layers;
pub mod matcher;

mod binding;
mod color;
mod error;
mod group;
mod source;
mod store;

pub use binding::{Setting, flag, string_setting};
pub use coerce::{CoerceError, Coercer, Separator};
pub use error::SettingError;
pub use group::Group;
pub use source::Source;
pub use store::{Entry, SettingsStore};

//! String-to-typed-value coercion.
//!
//! A [`Coercer<T>`] is a total function from a raw string to either a `T` or a
//! [`CoerceError`] carrying a short, type-specific reason (`must be an i32
//! number`, `possible values are [Alpha, Beta]`). Coercers are plain values:
//! build them with the constructor functions in this module and compose them
//! freely — a [`list`] of [`duration`]s, a [`set`] of enumerations, a list of
//! lists.
//!
//! Coercers never see missing keys; by the time one runs, the matcher has
//! already produced a raw value. Defaults bypass coercion entirely.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;

use crate::matcher;

/// Why a raw value could not be coerced.
///
/// Carries only the reason clause; the binding that ran the coercer wraps it
/// into the full `Failed to parse setting ...` message together with the
/// resolved key and the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoerceError {
    reason: String,
}

impl CoerceError {
    /// Creates an error with the given reason clause.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason clause, e.g. `must be an i32 number`.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for CoerceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for CoerceError {}

/// A reusable string-to-`T` conversion.
pub struct Coercer<T> {
    parse: Arc<dyn Fn(&str) -> Result<T, CoerceError> + Send + Sync>,
}

impl<T> Coercer<T> {
    /// Wraps a conversion function into a coercer.
    ///
    /// Library users rarely call this directly — the constructor functions in
    /// this module cover the common types — but it is the extension point for
    /// application-specific value types.
    pub fn new(parse: impl Fn(&str) -> Result<T, CoerceError> + Send + Sync + 'static) -> Self {
        Self {
            parse: Arc::new(parse),
        }
    }

    /// Applies the coercer to a raw string.
    pub fn coerce(&self, raw: &str) -> Result<T, CoerceError> {
        (self.parse)(raw)
    }
}

impl<T> Clone for Coercer<T> {
    fn clone(&self) -> Self {
        Self {
            parse: Arc::clone(&self.parse),
        }
    }
}

impl<T> fmt::Debug for Coercer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coercer<{}>", std::any::type_name::<T>())
    }
}

// ============================================================================
// Scalars
// ============================================================================

/// A coercer for any numeric type, delegating to the standard parser.
///
/// The failure reason is fixed per numeric kind: `must be an i32 number`,
/// `must be an f64 number`, and so on.
pub fn numeric<T>() -> Coercer<T>
where
    T: FromStr + 'static,
{
    let type_name = std::any::type_name::<T>();
    Coercer::new(move |raw| {
        raw.parse::<T>()
            .map_err(|_| CoerceError::new(format!("must be an {type_name} number")))
    })
}

/// The boolean coercer: the literals `"true"`, `"yes"` and `"1"`, compared
/// case-sensitively, yield `true`; anything else yields `false`.
///
/// There is no failure case — unrecognized strings are simply `false`.
pub fn boolean() -> Coercer<bool> {
    Coercer::new(|raw| Ok(matches!(raw, "true" | "yes" | "1")))
}

/// The identity coercer. Total.
pub fn string() -> Coercer<String> {
    Coercer::new(|raw| Ok(raw.to_string()))
}

/// A coercer for an enumeration deriving [`strum::EnumString`] and
/// [`strum::VariantNames`].
///
/// Matching follows the declared constant names: exact first, then an
/// ASCII-case-insensitive fold, so `beTA` resolves to a `Beta` variant. When
/// nothing matches, the reason lists every name in declaration order:
/// `possible values are [Alpha, Beta]`.
pub fn enumeration<T>() -> Coercer<T>
where
    T: strum::VariantNames + FromStr + 'static,
{
    Coercer::new(|raw| match matcher::match_constant(raw, T::VARIANTS) {
        Some(name) => T::from_str(name).map_err(|_| possible_values::<T>()),
        None => Err(possible_values::<T>()),
    })
}

fn possible_values<T: strum::VariantNames>() -> CoerceError {
    CoerceError::new(format!("possible values are [{}]", T::VARIANTS.join(", ")))
}

// ============================================================================
// Temporal types
// ============================================================================

/// A coercer for an absolute point in time, parsed from RFC 3339.
pub fn instant() -> Coercer<DateTime<Utc>> {
    Coercer::new(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| CoerceError::new("must be an RFC 3339 timestamp"))
    })
}

/// A coercer for a calendar date in `YYYY-MM-DD` form.
pub fn local_date() -> Coercer<NaiveDate> {
    Coercer::new(|raw| {
        raw.parse::<NaiveDate>()
            .map_err(|_| CoerceError::new("must be a date in YYYY-MM-DD form"))
    })
}

/// A coercer for a wall-clock time in `HH:MM:SS` form.
pub fn local_time() -> Coercer<NaiveTime> {
    Coercer::new(|raw| {
        raw.parse::<NaiveTime>()
            .map_err(|_| CoerceError::new("must be a time in HH:MM:SS form"))
    })
}

/// A coercer for a date-time without offset, `YYYY-MM-DDTHH:MM:SS`.
pub fn local_date_time() -> Coercer<NaiveDateTime> {
    Coercer::new(|raw| {
        raw.parse::<NaiveDateTime>()
            .map_err(|_| CoerceError::new("must be a date-time in YYYY-MM-DDTHH:MM:SS form"))
    })
}

/// A coercer for durations written as digits followed by a unit:
/// `250ms`, `30s`, `5m`, `2h`, `7d`.
pub fn duration() -> Coercer<Duration> {
    fn reason() -> CoerceError {
        CoerceError::new("must be a duration (digits followed by ms, s, m, h or d)")
    }

    Coercer::new(|raw| {
        let split = raw
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(reason)?;
        let (digits, unit) = raw.split_at(split);
        let amount: i64 = digits.parse().map_err(|_| reason())?;
        match unit {
            "ms" => Ok(Duration::milliseconds(amount)),
            "s" => Ok(Duration::seconds(amount)),
            "m" => Ok(Duration::minutes(amount)),
            "h" => Ok(Duration::hours(amount)),
            "d" => Ok(Duration::days(amount)),
            _ => Err(reason()),
        }
    })
}

// ============================================================================
// Collections
// ============================================================================

static DEFAULT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*").expect("default separator pattern is valid"));

/// How a collection coercer splits its raw value into element strings.
///
/// The default is a comma optionally followed by whitespace, so `"1,2"` and
/// `"1, 2"` split the same way.
#[derive(Debug, Clone)]
pub enum Separator {
    /// Split on a literal string.
    Literal(String),
    /// Split on a regular expression.
    Pattern(Regex),
}

impl Separator {
    /// A separator that splits on the given literal string.
    pub fn literal(separator: impl Into<String>) -> Self {
        Self::Literal(separator.into())
    }

    /// A separator that splits on the given pattern.
    pub fn pattern(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }

    fn split<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        match self {
            Self::Literal(literal) => raw.split(literal.as_str()).collect(),
            Self::Pattern(pattern) => pattern.split(raw).collect(),
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::Pattern(DEFAULT_SEPARATOR.clone())
    }
}

/// A coercer for an ordered sequence: order and duplicates preserved.
///
/// Splits on the default separator and coerces each piece with `element`;
/// the first failing piece aborts the whole collection with its reason.
pub fn list<T: 'static>(element: Coercer<T>) -> Coercer<Vec<T>> {
    list_with(element, Separator::default())
}

/// [`list`] with an explicit separator.
pub fn list_with<T: 'static>(element: Coercer<T>, separator: Separator) -> Coercer<Vec<T>> {
    Coercer::new(move |raw| {
        separator
            .split(raw)
            .into_iter()
            .map(|piece| element.coerce(piece))
            .collect()
    })
}

/// A coercer for an unordered, deduplicated set.
pub fn set<T: Ord + 'static>(element: Coercer<T>) -> Coercer<BTreeSet<T>> {
    set_with(element, Separator::default())
}

/// [`set`] with an explicit separator.
pub fn set_with<T: Ord + 'static>(
    element: Coercer<T>,
    separator: Separator,
) -> Coercer<BTreeSet<T>> {
    Coercer::new(move |raw| {
        separator
            .split(raw)
            .into_iter()
            .map(|piece| element.coerce(piece))
            .collect()
    })
}

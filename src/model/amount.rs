//! Amount type for handling monetary values that may appear in the data file either as JSON
//! numbers or as numeric strings.
//!
//! This module provides the `Amount` type which wraps `Decimal` and remembers the text it was read
//! from, so that `12.5` is searched and displayed as `12.5` and `"12.50"` as `12.50`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents a transaction amount.
///
/// Equality considers the text, so for numeric comparisons you should access the `Decimal` value
/// and use that.
///
/// # Examples
///
/// ```
/// # use finance_tracker::model::Amount;
/// # use std::str::FromStr;
/// let a = Amount::from_str("12.50").unwrap();
/// let b = Amount::from_str("12.5").unwrap();
/// assert_ne!(a, b);
/// assert_eq!(a.to_string(), "12.50");
/// assert_eq!(a.value(), b.value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    /// The parsed numerical value.
    value: Decimal,
    /// The text the value was parsed from.
    text: String,
}

impl Amount {
    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the text the amount was read from.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Why a string could not be parsed into an `Amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmountErrorKind {
    NotANumber,
    OutOfRange,
}

/// An error that can occur when parsing strings into `Amount` values.
pub struct AmountError {
    text: String,
    kind: AmountErrorKind,
    source: Option<rust_decimal::Error>,
}

impl AmountError {
    fn new(text: &str, kind: AmountErrorKind, source: Option<rust_decimal::Error>) -> Self {
        Self {
            text: text.to_string(),
            kind,
            source,
        }
    }
}

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmountError")
            .field("text", &self.text)
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            AmountErrorKind::NotANumber => write!(f, "'{}' is not a decimal number", self.text),
            AmountErrorKind::OutOfRange => {
                write!(f, "'{}' is out of range for an amount", self.text)
            }
        }
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn Error + 'static))
    }
}

/// Parses `s` (already trimmed) into a `Decimal`.
///
/// Numbers written by JSON encoders may use an exponent, e.g. `1e-7`. Values too small to be
/// represented become zero; values too large are an error.
fn parse_decimal(s: &str) -> Result<Decimal, AmountError> {
    let err = match Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    match s.parse::<f64>() {
        Ok(f) if f.is_nan() => Err(AmountError::new(
            s,
            AmountErrorKind::NotANumber,
            Some(err),
        )),
        Ok(f) if f.is_infinite() => Err(AmountError::new(
            s,
            AmountErrorKind::OutOfRange,
            Some(err),
        )),
        Ok(f) if f.abs() < MIN_MAGNITUDE => Ok(Decimal::ZERO),
        Ok(f) => Decimal::from_f64(f)
            .ok_or_else(|| AmountError::new(s, AmountErrorKind::OutOfRange, Some(err))),
        Err(_) => Err(AmountError::new(s, AmountErrorKind::NotANumber, Some(err))),
    }
}

/// The smallest magnitude a `Decimal` can hold, 28 decimal places.
const MIN_MAGNITUDE: f64 = 1e-28;

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError::new(s, AmountErrorKind::NotANumber, None));
        }

        let value = parse_decimal(trimmed).map_err(|e| AmountError {
            text: s.to_string(),
            ..e
        })?;
        Ok(Amount {
            value,
            text: s.to_string(),
        })
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // serde_json is built with `arbitrary_precision`, so a number keeps the exact text it
        // had in the file.
        let text = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            other => {
                return Err(serde::de::Error::custom(format!(
                    "invalid amount {other}, expected a number or a numeric string"
                )))
            }
        };
        Amount::from_str(&text).map_err(serde::de::Error::custom)
    }
}

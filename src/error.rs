//! Error types. Internally everything is an `anyhow::Error`; errors that cross the public command
//! boundary are tagged with an `ErrorType` so callers can tell bad data from a failed read.

use serde::{Deserialize, Serialize};

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The broad class of a failure that is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The transactions file exists but does not have the expected shape, or an amount is not a
    /// number.
    Data,
    /// The transactions file could not be read for a reason other than it being absent.
    Io,
    /// The user typed something that could not be understood.
    Input,
}

serde_plain::derive_display_from_serialize!(ErrorType);
serde_plain::derive_fromstr_from_deserialize!(ErrorType);

/// Attaches an `ErrorType` to the error of a `Result` so that it can be recovered later with
/// `error_type`.
pub trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| e.into().context(error_type))
    }
}

/// Finds the `ErrorType` that was attached with `pub_result`, if any.
pub fn error_type(e: &Error) -> Option<ErrorType> {
    e.downcast_ref::<ErrorType>().copied()
}

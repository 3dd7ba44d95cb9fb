use std::error;
use std::fmt;
use std::result;

/// Errors returned by the ordered sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The queried key is not stored in the set.
    NotFound,
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::NotFound => "key not found",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "key not found"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

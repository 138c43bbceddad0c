//! When converting Scheme source into ESTree JSON goes wrong.

use std::fmt::{self, Debug, Display};
use std::{error, io, result};

use scmjs::parse;
pub use scmjs::parse::error::Location;

/// This type represents all possible errors that can occur when parsing
/// Scheme source or serializing the resulting tree.
pub struct Error(Box<ErrorImpl>);

/// Alias for a `Result` with the error type `serde_scmjs::Error`.
pub type Result<T> = result::Result<T, Error>;

enum ErrorImpl {
    Parse(parse::Error),
    Json(serde_json::Error),
}

impl Error {
    /// Location of the error in the source text, for parse errors.
    pub fn location(&self) -> Option<Location> {
        match &*self.0 {
            ErrorImpl::Parse(e) => Some(e.location()),
            ErrorImpl::Json(_) => None,
        }
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to write the JSON text to an IO stream
    /// - `Category::Syntax` - source text that is not a valid program
    /// - `Category::Data` - a tree that could not be represented as JSON
    pub fn classify(&self) -> Category {
        match &*self.0 {
            ErrorImpl::Parse(_) => Category::Syntax,
            ErrorImpl::Json(e) if e.is_io() => Category::Io,
            ErrorImpl::Json(_) => Category::Data,
        }
    }

    /// The underlying parse error, if parsing the source failed.
    pub fn as_parse_error(&self) -> Option<&parse::Error> {
        match &*self.0 {
            ErrorImpl::Parse(e) => Some(e),
            ErrorImpl::Json(_) => None,
        }
    }
}

/// Categorizes the cause of a `serde_scmjs::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to write bytes to an output stream.
    Io,

    /// The error was caused by source text that is not a valid program.
    Syntax,

    /// The error was caused by a tree that JSON cannot represent.
    Data,
}

impl From<Error> for io::Error {
    /// Convert a `serde_scmjs::Error` into an `io::Error`.
    ///
    /// Syntax and data errors are turned into `InvalidData` IO errors.
    fn from(e: Error) -> Self {
        if let ErrorImpl::Json(json) = *e.0 {
            json.into()
        } else {
            io::Error::new(io::ErrorKind::InvalidData, e)
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &*self.0 {
            ErrorImpl::Parse(e) => Some(e),
            ErrorImpl::Json(e) => Some(e),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self.0 {
            ErrorImpl::Parse(e) => Display::fmt(e, f),
            ErrorImpl::Json(e) => Display::fmt(e, f),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match &*self.0 {
            ErrorImpl::Parse(e) => formatter.debug_tuple("Parse").field(e).finish(),
            ErrorImpl::Json(e) => formatter.debug_tuple("Json").field(e).finish(),
        }
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error(Box::new(ErrorImpl::Parse(e)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error(Box::new(ErrorImpl::Json(e)))
    }
}

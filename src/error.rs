use std::fmt;

/// Errors returned by the curve engine
///
/// Every failure is a synchronous caller contract violation, surfaced before
/// any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// Wrong number of points supplied to a control-point or arc-length computation
    InvalidArity { expected: usize, provided: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        Self::new(std::io::ErrorKind::InvalidData, error)
    }
}

impl std::error::Error for Error {}

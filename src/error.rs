/// Errors returned by blocking queue operations.
///
/// Not-found outcomes (missing key, empty queue on a non-blocking poll) are
/// never errors; they are reported through `Option`/`bool` returns.
/// Configuration mistakes (absent hasher, zero capacity) panic at
/// construction instead of returning a value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The caller-supplied deadline elapsed before the operation could
    /// complete. The operation's side effect did not happen.
    DeadlineExceeded,
    /// The wait was cancelled through its [`CancelHandle`](crate::CancelHandle)
    /// before the operation could complete. The operation's side effect did
    /// not happen.
    Cancelled,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DeadlineExceeded => write!(f, "deadline exceeded while waiting"),
            Error::Cancelled => write!(f, "wait cancelled"),
        }
    }
}

impl std::error::Error for Error {}

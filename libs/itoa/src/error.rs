use std::collections::TryReserveError;
use std::error::Error as StdError;
use std::fmt;

type Cause = Box<dyn StdError + Send + Sync>;

/// An error that can occur while converting an integer.
pub struct Error {
    inner: Box<ErrorImpl>,
}

struct ErrorImpl {
    kind: Kind,
    cause: Option<Cause>,
}

#[derive(Debug)]
enum Kind {
    Alloc,
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Self {
            inner: Box::new(ErrorImpl {
                kind: Kind::Alloc,
                cause: Some(Box::new(err)),
            }),
        }
    }
}

impl Error {
    /// Returns true if the output buffer could not be allocated.
    pub fn is_alloc(&self) -> bool {
        matches!(self.inner.kind, Kind::Alloc)
    }

    /// The error's standalone message, without the message from the source.
    pub fn message(&self) -> impl fmt::Display + '_ {
        self.description()
    }

    fn description(&self) -> &str {
        match self.inner.kind {
            Kind::Alloc => "failed to allocate output buffer",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.cause.as_ref().map(|cause| &**cause as _)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("ft_itoa::Error");
        f.field(&self.inner.kind);
        if let Some(ref cause) = self.inner.cause {
            f.field(cause);
        }
        f.finish()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

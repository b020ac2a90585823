use std::error::Error as StdError;
use std::fmt;
use std::num::ParseIntError;

use crate::constants::{ERROR_CONFIG, ERROR_CONVERT, ERROR_PARSE};

type Cause = Box<dyn StdError + Send + Sync>;

/// An error that can occur while running the converter front end.
pub struct Error {
    inner: Box<ErrorImpl>,
}

struct ErrorImpl {
    kind: Kind,
    cause: Option<Cause>,
}

#[derive(Debug)]
enum Kind {
    Config,
    Parse(String),
    Convert,
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self {
            inner: Box::new(ErrorImpl {
                kind: Kind::Config,
                cause: Some(Box::new(err)),
            }),
        }
    }
}

impl From<ft_itoa::Error> for Error {
    fn from(err: ft_itoa::Error) -> Self {
        Self {
            inner: Box::new(ErrorImpl {
                kind: Kind::Convert,
                cause: Some(Box::new(err)),
            }),
        }
    }
}

impl Error {
    pub(crate) fn parse(arg: &str, err: ParseIntError) -> Self {
        Self {
            inner: Box::new(ErrorImpl {
                kind: Kind::Parse(arg.to_owned()),
                cause: Some(Box::new(err)),
            }),
        }
    }

    /// Returns the offending argument if this is a parse error.
    pub fn argument(&self) -> Option<&str> {
        match self.inner.kind {
            Kind::Parse(ref arg) => Some(arg),
            _ => None,
        }
    }

    /// The error's standalone message, without the message from the source.
    pub fn message(&self) -> impl fmt::Display + '_ {
        self.description()
    }

    fn description(&self) -> &str {
        match self.inner.kind {
            Kind::Config => ERROR_CONFIG,
            Kind::Parse(_) => ERROR_PARSE,
            Kind::Convert => ERROR_CONVERT,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())?;

        if let Kind::Parse(ref arg) = self.inner.kind {
            write!(f, " `{}`", arg)?;
        }

        if let Some(ref cause) = self.inner.cause {
            write!(f, ": {}", cause)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.cause.as_ref().map(|cause| &**cause as _)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("ft_itoa_cli::Error");
        f.field(&self.inner.kind);
        if let Some(ref cause) = self.inner.cause {
            f.field(cause);
        }
        f.finish()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let cause = "12a".parse::<i32>().unwrap_err();
        let err = Error::parse("12a", cause);

        assert_eq!(err.argument(), Some("12a"));
        assert_eq!(err.message().to_string(), ERROR_PARSE);
        assert_eq!(
            err.to_string(),
            "invalid integer argument `12a`: invalid digit found in string"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::from(config::ConfigError::Message("missing key".into()));

        assert_eq!(err.argument(), None);
        assert_eq!(err.to_string(), "failed to load configuration: missing key");
    }
}

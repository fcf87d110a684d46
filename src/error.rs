use std::convert::From;
use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    InvalidLayout,
    NotPopulated,
    DateParse,
    ConfigError,
    IOError(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }

    pub fn is_invalid_layout(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidLayout)
    }

    pub fn is_not_populated(&self) -> bool {
        matches!(self.kind, ErrorKind::NotPopulated)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::ErrorKind> for Error {
    fn from(kind: io::ErrorKind) -> Error {
        Error::from(io::Error::from(kind))
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(parse_error: chrono::ParseError) -> Error {
        Error::new(
            ErrorKind::DateParse,
            format!("Could not parse date: {}", parse_error).as_str(),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(
            ErrorKind::ConfigError,
            format!("Could not parse config: {}", toml_error).as_str(),
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        if let ErrorKind::IOError(err) = err.kind {
            err
        } else {
            let kind = err.kind.as_str();
            io::Error::new(io::ErrorKind::InvalidInput, err.message.unwrap_or(kind))
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::InvalidLayout => "invalid grid layout".to_owned(),
            ErrorKind::NotPopulated => "grid has not been populated".to_owned(),
            ErrorKind::DateParse => "invalid date format".to_owned(),
            ErrorKind::ConfigError => "invalid configuration".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_message() {
        let bare = Error::from(ErrorKind::NotPopulated);
        assert_eq!(bare.to_string(), "grid has not been populated");

        let detailed = Error::new(ErrorKind::InvalidLayout, "33 dates");
        assert_eq!(detailed.to_string(), "invalid grid layout: 33 dates");
        assert!(detailed.is_invalid_layout());
    }

    #[test]
    fn io_roundtrip_keeps_kind() {
        let err = Error::from(io::ErrorKind::NotFound);
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let io_err: io::Error = Error::new(ErrorKind::ConfigError, "bad").into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}

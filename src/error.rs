//! Error enum
use std::{fmt, string::FromUtf8Error};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Regex(regex::Error),
    /// A kept archive member is not valid UTF-8.
    Decode {
        path: String,
        source: FromUtf8Error,
    },
    /// A path that does not follow `<root>/<split>/<sentiment>/<id>_<grade>.txt`.
    UnexpectedPath(String),
    Markup(html2text::Error),
    /// Rejected pipeline parameters.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Regex(e) => write!(f, "invalid member pattern: {}", e),
            Error::Decode { path, source } => {
                write!(f, "member {} is not valid utf-8: {}", path, source)
            }
            Error::UnexpectedPath(path) => write!(f, "unexpected member path: {}", path),
            Error::Markup(e) => write!(f, "could not render review markup: {:?}", e),
            Error::Config(s) => write!(f, "invalid configuration: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<html2text::Error> for Error {
    fn from(e: html2text::Error) -> Error {
        Error::Markup(e)
    }
}

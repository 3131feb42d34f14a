use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    EmptyCorpusError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::EmptyCorpusError(msg) => write!(f, "Empty Corpus Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

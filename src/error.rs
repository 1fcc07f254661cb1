use roxmltree::Error as XmlError;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Xml(XmlError),
    NotSvg,
    InvalidCoordinate(String),
    Utf8(std::str::Utf8Error),
    Gzip(std::io::Error),
}

impl From<XmlError> for Error {
    fn from(e: XmlError) -> Self {
        Error::Xml(e)
    }
}
impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::Utf8(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Xml(ref e) => write!(f, "malformed XML: {}", e),
            Error::NotSvg => write!(f, "root element is not <svg>"),
            Error::InvalidCoordinate(ref tok) => {
                write!(f, "invalid coordinate in path data: {:?}", tok)
            }
            Error::Utf8(ref e) => write!(f, "input is not UTF-8: {}", e),
            Error::Gzip(ref e) => write!(f, "failed to inflate input: {}", e),
        }
    }
}

impl std::error::Error for Error {}

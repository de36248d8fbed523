// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    /// The file was read but the imaging library could not decode it.
    Decode(String),
    /// The imaging library refused to encode the buffer in the requested format.
    Encode(String),
    /// The path does not carry an extension this viewer handles.
    UnsupportedFormat(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Svg(_) => "error-svg",
            Error::Config(_) => "error-config",
            Error::Decode(_) => "error-decode",
            Error::Encode(_) => "error-encode",
            Error::UnsupportedFormat(_) => "error-unsupported-format",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
            Error::UnsupportedFormat(e) => write!(f, "Unsupported format: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        use image_rs::ImageError;

        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            ImageError::Decoding(e) => Error::Decode(e.to_string()),
            ImageError::Encoding(e) => Error::Encode(e.to_string()),
            ImageError::Unsupported(e) => Error::UnsupportedFormat(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

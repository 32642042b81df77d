// SPDX-License-Identifier: MPL-2.0
use crate::domain::editing::DimensionError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("Encode Error: {0}")]
    Encode(String),
    #[error("Invalid Dimension: {0}")]
    InvalidDimension(#[from] DimensionError),
    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-io-error",
            Error::Decode(_) => "notification-load-error",
            Error::Encode(_) => "notification-save-error",
            Error::InvalidDimension(err) => err.i18n_key(),
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

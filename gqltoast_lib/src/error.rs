//! Error types for the library layer.

use std::fmt;

use crate::template::TemplateError;

/// Errors produced by the library layer, wrapping envelope validation
/// failures and adding template, configuration and I/O failures.
#[derive(Debug)]
pub enum ToastError {
    /// The error envelope failed boundary validation.
    Envelope(gqltoast_envelope::Error),
    /// A message template could not be parsed or rendered.
    Template(TemplateError),
    /// The configuration file was unreadable as TOML or had bad values.
    Config(String),
    /// Reading configuration or input failed.
    Io(std::io::Error),
}

impl fmt::Display for ToastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Envelope(e) => write!(f, "Envelope error: {}", e),
            Self::Template(e) => write!(f, "Template error: {}", e),
            Self::Config(msg) => write!(f, "Config error: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ToastError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Envelope(e) => Some(e),
            Self::Template(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<gqltoast_envelope::Error> for ToastError {
    fn from(e: gqltoast_envelope::Error) -> Self {
        Self::Envelope(e)
    }
}

impl From<TemplateError> for ToastError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}

impl From<std::io::Error> for ToastError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

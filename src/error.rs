use std::fmt::{Display, Formatter};

use crate::config::ConfigError;
use crate::output::OutputError;
use crate::source::AcquireError;

/// Anything that can stop a complete run from configuration to output
#[derive(Debug)]
pub enum ExtractorError {
    Config(ConfigError),
    Acquire(AcquireError),
    Output(OutputError),
    /// A command line value that couldn't be parsed
    InvalidArgument {
        name: &'static str,
        value: String
    }
}

impl Display for ExtractorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractorError::Config(error) => error.fmt(f),
            ExtractorError::Acquire(error) => error.fmt(f),
            ExtractorError::Output(error) => error.fmt(f),
            ExtractorError::InvalidArgument { name, value } =>
                write!(f, "Invalid value \"{}\" for --{}", value, name)
        }
    }
}

impl std::error::Error for ExtractorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractorError::Config(error) => Some(error),
            ExtractorError::Acquire(error) => Some(error),
            ExtractorError::Output(error) => Some(error),
            ExtractorError::InvalidArgument { .. } => None
        }
    }
}

impl From<ConfigError> for ExtractorError {
    fn from(err: ConfigError) -> Self {
        ExtractorError::Config(err)
    }
}

impl From<AcquireError> for ExtractorError {
    fn from(err: AcquireError) -> Self {
        ExtractorError::Acquire(err)
    }
}

impl From<OutputError> for ExtractorError {
    fn from(err: OutputError) -> Self {
        ExtractorError::Output(err)
    }
}

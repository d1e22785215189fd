//! Errors raised while extracting the natdoc config.

use figment::providers::{Format, Toml};
use std::{collections::HashSet, error::Error, fmt};

/// The first line of every [`ExtractConfigError`] message.
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract natdoc config:";

/// A failed attempt to extract [`Config`](crate::Config) from its figment.
///
/// Displays each distinct underlying error on its own line.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    error: figment::Error,
}

impl ExtractConfigError {
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// Returns the distinct errors in the order figment reported them.
    pub fn errors(&self) -> Vec<NatdocConfigError> {
        let mut seen = HashSet::new();
        self.error
            .clone()
            .into_iter()
            .map(NatdocConfigError::from)
            .filter(|err| seen.insert(err.to_string()))
            .collect()
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FAILED_TO_EXTRACT_CONFIG_MSG)?;
        for err in self.errors() {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}

/// A single config error, by where the offending value came from.
#[derive(Clone, Debug, PartialEq)]
pub enum NatdocConfigError {
    /// The value was read from `natdoc.toml`.
    Toml(figment::Error),
    /// The value came from the environment or the defaults.
    Other(figment::Error),
}

impl NatdocConfigError {
    fn inner(&self) -> &figment::Error {
        match self {
            Self::Toml(err) | Self::Other(err) => err,
        }
    }
}

impl From<figment::Error> for NatdocConfigError {
    fn from(err: figment::Error) -> Self {
        if err.metadata.as_ref().is_some_and(|meta| meta.name.contains(Toml::NAME)) {
            Self::Toml(err)
        } else {
            Self::Other(err)
        }
    }
}

impl fmt::Display for NatdocConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = match self {
            Self::Toml(_) => "natdoc.toml",
            Self::Other(_) => "natdoc config",
        };
        let err = self.inner();
        write!(f, "{origin} error: {err}")?;
        // e.g. `outputs`
        if !err.path.is_empty() {
            write!(f, " for setting `{}`", err.path.join("."))?;
        }
        Ok(())
    }
}

impl Error for NatdocConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(self.inner())
    }
}

//! # natdoc-config
//!
//! natdoc configuration, read from `natdoc.toml` and `NATDOC_` environment variables.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Figment, Provider,
    providers::{Env, Format, Serialized, Toml},
};
use natdoc::DocumentationType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
pub use error::{ExtractConfigError, FAILED_TO_EXTRACT_CONFIG_MSG, NatdocConfigError};

/// natdoc configuration.
///
/// Values are merged in order, later sources taking precedence:
///
/// 1. the defaults,
/// 2. `natdoc.toml` in the project root,
/// 3. environment variables prefixed with `NATDOC_`, e.g. `NATDOC_OUT=artifacts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory the emitted outputs are written to.
    pub out: PathBuf,
    /// The outputs emitted for every contract.
    pub outputs: Vec<DocumentationType>,
}

impl Config {
    /// The name of the config file.
    pub const FILE_NAME: &'static str = "natdoc.toml";

    /// The prefix of the environment variables that override config values.
    pub const ENV_PREFIX: &'static str = "NATDOC_";

    /// Loads the config for the current working directory.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment())
    }

    /// Loads the config with `root` as the project root.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment_with_root(root))
    }

    /// Returns the default figment: defaults, `natdoc.toml` in the current working directory and
    /// `NATDOC_` environment variables.
    pub fn figment() -> Figment {
        Self::figment_with_root(".")
    }

    /// Returns the default figment with `natdoc.toml` read from `root`.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(root.as_ref().join(Self::FILE_NAME)))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Attempts to extract a `Config` from `provider`.
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        Figment::from(provider).extract::<Self>().map_err(ExtractConfigError::new)
    }

    /// Returns the path the `kind` output of `contract` is written to.
    pub fn output_path(&self, contract: &str, kind: DocumentationType) -> PathBuf {
        self.out.join(format!("{contract}.{}", kind.extension()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { out: PathBuf::from("out"), outputs: DocumentationType::ALL.to_vec() }
    }
}

use crate::{cmd::Cmd, utils::read_contract};
use clap::Parser;
use eyre::{Result, WrapErr};
use natdoc::DocumentationType;
use natdoc_config::Config;
use std::{fs, path::PathBuf};

/// CLI arguments for `natdoc emit`.
#[derive(Clone, Debug, Parser)]
pub struct EmitArgs {
    /// Path to the JSON contract definition.
    #[arg(value_name = "CONTRACT")]
    pub contract: PathBuf,

    /// The directory the outputs are written to.
    ///
    /// Overrides `out` in `natdoc.toml`.
    #[arg(long, short, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// The outputs to write, comma separated.
    ///
    /// Overrides `outputs` in `natdoc.toml`.
    #[arg(long, value_delimiter = ',', value_name = "OUTPUTS")]
    pub outputs: Vec<DocumentationType>,

    /// The project root `natdoc.toml` is read from.
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

impl EmitArgs {
    /// Loads the config and applies the command line overrides.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.root {
            Some(root) => Config::load_with_root(root)?,
            None => Config::load()?,
        };
        if let Some(out) = &self.out {
            config.out.clone_from(out);
        }
        if !self.outputs.is_empty() {
            config.outputs.clone_from(&self.outputs);
        }
        Ok(config)
    }
}

impl Cmd for EmitArgs {
    /// The written files.
    type Output = Vec<PathBuf>;

    fn run(self) -> Result<Self::Output> {
        let config = self.config()?;
        let contract = read_contract(&self.contract)?;

        fs::create_dir_all(&config.out).wrap_err_with(|| {
            format!("failed to create output directory {}", config.out.display())
        })?;

        let mut written = Vec::with_capacity(config.outputs.len());
        for &kind in &config.outputs {
            let rendered = natdoc::documentation(&contract, kind)
                .wrap_err_with(|| format!("failed to generate {kind} for `{}`", contract.name))?;
            let path = config.output_path(&contract.name, kind);
            fs::write(&path, rendered)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            debug!(target: "natdoc::cli", %kind, path = %path.display(), "wrote output");
            written.push(path);
        }
        Ok(written)
    }
}

use crate::{cmd::Cmd, utils::read_contract};
use clap::Parser;
use eyre::{Result, WrapErr};
use natdoc::DocumentationType;
use std::path::PathBuf;

/// CLI arguments for `natdoc inspect`.
#[derive(Clone, Debug, Parser)]
pub struct InspectArgs {
    /// Path to the JSON contract definition.
    #[arg(value_name = "CONTRACT")]
    pub contract: PathBuf,

    /// The output to print.
    ///
    /// One of `userdoc`, `devdoc`, `abi` or `interface`.
    #[arg(value_name = "OUTPUT")]
    pub output: DocumentationType,
}

impl Cmd for InspectArgs {
    type Output = String;

    fn run(self) -> Result<String> {
        let Self { contract, output } = self;
        let contract = read_contract(&contract)?;
        trace!(target: "natdoc::cli", contract = %contract.name, %output, "running natdoc inspect");

        natdoc::documentation(&contract, output)
            .wrap_err_with(|| format!("failed to generate {output} for `{}`", contract.name))
    }
}

use crate::cmd::{emit::EmitArgs, inspect::InspectArgs};
use clap::{Parser, Subcommand};

/// Generate NatSpec documentation, JSON ABIs and Solidity interfaces from contract definitions.
#[derive(Debug, Parser)]
#[command(name = "natdoc", version, next_display_order = None)]
pub struct Natdoc {
    #[command(subcommand)]
    pub cmd: NatdocSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum NatdocSubcommand {
    /// Print a single output of a contract.
    #[command(visible_alias = "in")]
    Inspect(InspectArgs),

    /// Write the configured outputs of a contract to the output directory.
    #[command(visible_alias = "e")]
    Emit(EmitArgs),
}

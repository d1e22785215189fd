//! Subcommands of the `natdoc` binary.

pub mod emit;
pub mod inspect;

/// A parsed subcommand that can be executed.
pub trait Cmd: clap::Parser + Sized {
    type Output;

    fn run(self) -> eyre::Result<Self::Output>;
}

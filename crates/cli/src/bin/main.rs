//! The `natdoc` binary.

use clap::Parser;
use eyre::Result;
use natdoc_cli::{
    cmd::Cmd,
    handler,
    opts::{Natdoc, NatdocSubcommand},
    utils,
};

fn main() -> Result<()> {
    handler::install();
    utils::subscriber();

    let args = Natdoc::parse();
    match args.cmd {
        NatdocSubcommand::Inspect(cmd) => {
            println!("{}", cmd.run()?);
        }
        NatdocSubcommand::Emit(cmd) => {
            for path in cmd.run()? {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

use eyre::{Result, WrapErr};
use natdoc::ContractDefinition;
use std::{fs, path::Path};
use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber writing to stderr, filtered by `RUST_LOG`.
pub fn subscriber() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the JSON contract definition at `path`.
pub fn read_contract(path: &Path) -> Result<ContractDefinition> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read contract definition {}", path.display()))?;
    let contract = ContractDefinition::from_json(&json)
        .wrap_err_with(|| format!("failed to parse contract definition {}", path.display()))?;
    trace!(target: "natdoc::cli", path = %path.display(), contract = %contract.name, "read contract");
    Ok(contract)
}

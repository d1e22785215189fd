//! # natdoc
//!
//! NatSpec documentation and contract interface generation.
//!
//! Given an already resolved [`ContractDefinition`], [`documentation`] renders one of the four
//! [`DocumentationType`] outputs: the JSON ABI, the minimal Solidity interface text, and the user
//! and developer NatSpec documents.
//!
//! ```
//! use natdoc::{ContractDefinition, DocumentationType, FunctionDefinition};
//!
//! let contract = ContractDefinition::new("Greeter").with_function(
//!     FunctionDefinition::new("greet").with_documentation("@notice Says hello"),
//! );
//! let userdoc = natdoc::documentation(&contract, DocumentationType::NatspecUser)?;
//! assert!(userdoc.contains("Says hello"));
//! # Ok::<_, natdoc::DocError>(())
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod abi;
pub mod interface;
pub mod natspec;
pub mod tree;

mod contract;
pub use contract::{
    ConstructorDefinition, ContractDefinition, EnumDefinition, EventDefinition, EventParameter,
    FunctionDefinition, StructDefinition, StructMember,
};

mod error;
pub use error::{DocError, DocErrorKind, DocResult};

mod mode;
pub use mode::DocumentationType;

/// Renders the requested documentation output for `contract`.
///
/// Every call works on its own parser state, so outputs never depend on previous calls.
pub fn documentation(contract: &ContractDefinition, kind: DocumentationType) -> DocResult<String> {
    trace!(target: "natdoc", contract = %contract.name, %kind, "generating documentation");
    match kind {
        DocumentationType::NatspecUser => natspec::user_documentation(contract),
        DocumentationType::NatspecDev => natspec::dev_documentation(contract),
        DocumentationType::AbiInterface => abi::abi_interface(contract),
        DocumentationType::SolidityInterface => interface::solidity_interface(contract),
    }
}

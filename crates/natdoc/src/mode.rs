use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The documentation output to generate for a contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentationType {
    /// The end-user NatSpec document (`notice` per method).
    #[serde(rename = "userdoc", alias = "userDoc", alias = "user-doc")]
    NatspecUser,
    /// The developer NatSpec document (`details`, `author`, `params`, `return`).
    #[serde(rename = "devdoc", alias = "devDoc", alias = "dev-doc")]
    NatspecDev,
    /// The compact JSON ABI.
    #[serde(rename = "abi", alias = "abi-interface")]
    AbiInterface,
    /// The minimal Solidity interface text.
    #[serde(rename = "interface", alias = "sol", alias = "solidity-interface")]
    SolidityInterface,
}

// === impl DocumentationType ===

impl DocumentationType {
    /// All documentation outputs, in their conventional emission order.
    pub const ALL: [Self; 4] =
        [Self::AbiInterface, Self::SolidityInterface, Self::NatspecUser, Self::NatspecDev];

    /// Returns the file extension an output of this type is written with.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::NatspecUser => "docuser",
            Self::NatspecDev => "docdev",
            Self::AbiInterface => "abi",
            Self::SolidityInterface => "sol",
        }
    }
}

impl fmt::Display for DocumentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NatspecUser => f.write_str("userdoc"),
            Self::NatspecDev => f.write_str("devdoc"),
            Self::AbiInterface => f.write_str("abi"),
            Self::SolidityInterface => f.write_str("interface"),
        }
    }
}

impl FromStr for DocumentationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "userdoc" | "userDoc" | "user-doc" => Ok(Self::NatspecUser),
            "devdoc" | "devDoc" | "dev-doc" => Ok(Self::NatspecDev),
            "abi" | "abi-interface" => Ok(Self::AbiInterface),
            "interface" | "sol" | "solidity-interface" => Ok(Self::SolidityInterface),
            _ => Err(format!("unknown documentation type: {s}")),
        }
    }
}

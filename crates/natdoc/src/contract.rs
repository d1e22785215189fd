//! Resolved contract declarations, as handed over by the compiler front-end.

use crate::{DocError, DocResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A contract or library whose interface and documentation are rendered.
///
/// Inheritance, visibility and overload resolution have already been applied: `functions` and
/// `events` are exactly the externally visible members, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDefinition {
    /// The contract name.
    pub name: String,
    /// Whether the contract is declared as a `library`.
    #[serde(default)]
    pub is_library: bool,
    /// The raw NatSpec comment attached to the contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// The constructor, if one is declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor: Option<ConstructorDefinition>,
    /// The interface functions.
    #[serde(default)]
    pub functions: Vec<FunctionDefinition>,
    /// The interface events.
    #[serde(default)]
    pub events: Vec<EventDefinition>,
    /// The structs defined in the contract.
    #[serde(default)]
    pub structs: Vec<StructDefinition>,
    /// The enums defined in the contract.
    #[serde(default)]
    pub enums: Vec<EnumDefinition>,
}

impl ContractDefinition {
    /// Creates a new, empty contract.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Creates a new, empty library.
    pub fn library(name: impl Into<String>) -> Self {
        Self { is_library: true, ..Self::new(name) }
    }

    /// Deserializes a contract from its JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Returns the contract keyword, `library` or `contract`.
    pub fn keyword(&self) -> &'static str {
        if self.is_library { "library" } else { "contract" }
    }

    /// Returns the contract comment, if it is present and not empty.
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref().filter(|doc| !doc.is_empty())
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDefinition) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn with_function(mut self, function: FunctionDefinition) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_event(mut self, event: EventDefinition) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_struct(mut self, def: StructDefinition) -> Self {
        self.structs.push(def);
        self
    }

    pub fn with_enum(mut self, def: EnumDefinition) -> Self {
        self.enums.push(def);
        self
    }
}

/// The external view of an interface function.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    /// The external function name.
    pub name: String,
    /// Whether the function is `constant`/`view`.
    #[serde(default)]
    pub constant: bool,
    #[serde(default)]
    pub parameter_names: Vec<String>,
    /// The canonical parameter type names, parallel to `parameter_names`.
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub return_parameter_names: Vec<String>,
    /// The canonical return type names, parallel to `return_parameter_names`.
    #[serde(default)]
    pub return_parameter_types: Vec<String>,
    /// The external call signature. Derived from the name and parameter types when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signature: String,
    /// The raw NatSpec comment attached to the function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl FunctionDefinition {
    /// Creates a new function without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Appends a parameter.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameter_types.push(ty.into());
        self.parameter_names.push(name.into());
        self
    }

    /// Appends a return parameter.
    pub fn returns(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.return_parameter_types.push(ty.into());
        self.return_parameter_names.push(name.into());
        self
    }

    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Returns the function comment, if it is present and not empty.
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref().filter(|doc| !doc.is_empty())
    }

    /// Returns the external call signature, e.g. `transfer(address,uint256)`.
    pub fn external_signature(&self) -> Cow<'_, str> {
        if self.signature.is_empty() {
            Cow::Owned(format!("{}({})", self.name, self.parameter_types.iter().join(",")))
        } else {
            Cow::Borrowed(&self.signature)
        }
    }

    /// Returns the `(name, type)` pairs of the parameters.
    pub fn parameters(&self) -> DocResult<Vec<(&str, &str)>> {
        typed_params(&self.parameter_names, &self.parameter_types)
    }

    /// Returns the `(name, type)` pairs of the return parameters.
    pub fn return_parameters(&self) -> DocResult<Vec<(&str, &str)>> {
        typed_params(&self.return_parameter_names, &self.return_parameter_types)
    }
}

/// The external view of a constructor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDefinition {
    #[serde(default)]
    pub parameter_names: Vec<String>,
    /// The canonical parameter type names, parallel to `parameter_names`.
    #[serde(default)]
    pub parameter_types: Vec<String>,
}

impl ConstructorDefinition {
    /// Appends a parameter.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameter_types.push(ty.into());
        self.parameter_names.push(name.into());
        self
    }

    /// Returns the `(name, type)` pairs of the parameters.
    pub fn parameters(&self) -> DocResult<Vec<(&str, &str)>> {
        typed_params(&self.parameter_names, &self.parameter_types)
    }
}

/// An interface event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub name: String,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub parameters: Vec<EventParameter>,
}

impl EventDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    /// Appends a parameter.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>, indexed: bool) -> Self {
        self.parameters.push(EventParameter { name: name.into(), ty: ty.into(), indexed });
        self
    }
}

/// An event parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParameter {
    pub name: String,
    /// The canonical type name.
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub indexed: bool,
}

/// A struct defined in a contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDefinition {
    pub name: String,
    #[serde(default)]
    pub members: Vec<StructMember>,
}

impl StructDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), members: Vec::new() }
    }

    /// Appends a member.
    pub fn member(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.members.push(StructMember { name: name.into(), ty: ty.into() });
        self
    }
}

/// A struct member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructMember {
    pub name: String,
    /// The canonical type name.
    #[serde(rename = "type")]
    pub ty: String,
}

/// An enum defined in a contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl EnumDefinition {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), values: values.into_iter().map(Into::into).collect() }
    }
}

/// Zips parallel name and type lists.
fn typed_params<'a>(names: &'a [String], types: &'a [String]) -> DocResult<Vec<(&'a str, &'a str)>> {
    if names.len() != types.len() {
        return Err(DocError::internal(format!(
            "names and types vector size does not match: {} names, {} types",
            names.len(),
            types.len()
        )));
    }
    Ok(names.iter().zip(types).map(|(name, ty)| (name.as_str(), ty.as_str())).collect())
}

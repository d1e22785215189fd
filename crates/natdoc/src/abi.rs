//! The JSON ABI of a contract.

use crate::{
    ContractDefinition, DocResult, EventDefinition,
    tree::{Node, Object},
};

/// Renders the compact JSON ABI of `contract`.
pub fn abi_interface(contract: &ContractDefinition) -> DocResult<String> {
    let abi = abi_entries(contract)?;
    trace!(target: "natdoc::abi", contract = %contract.name, entries = abi.len(), "rendered abi");
    Node::from(abi).to_compact_string()
}

/// Returns the ABI entries of `contract`: the functions, then the constructor, then the events.
pub fn abi_entries(contract: &ContractDefinition) -> DocResult<Vec<Node>> {
    let mut abi: Vec<Node> = Vec::with_capacity(
        contract.functions.len() + contract.events.len() + usize::from(contract.constructor.is_some()),
    );

    for function in &contract.functions {
        let method = Object::new()
            .with("type", "function")
            .with("name", function.name.as_str())
            .with("constant", function.constant)
            .with("inputs", parameters(&function.parameters()?))
            .with("outputs", parameters(&function.return_parameters()?));
        abi.push(Node::from(method));
    }

    if let Some(constructor) = &contract.constructor {
        let method = Object::new()
            .with("type", "constructor")
            .with("inputs", parameters(&constructor.parameters()?));
        abi.push(Node::from(method));
    }

    abi.extend(contract.events.iter().map(event));
    Ok(abi)
}

fn parameters(params: &[(&str, &str)]) -> Node {
    params.iter().map(|&(name, ty)| Node::from(Object::new().with("name", name).with("type", ty))).collect()
}

fn event(event: &EventDefinition) -> Node {
    let inputs: Node = event
        .parameters
        .iter()
        .map(|param| {
            Node::from(
                Object::new()
                    .with("name", param.name.as_str())
                    .with("type", param.ty.as_str())
                    .with("indexed", param.indexed),
            )
        })
        .collect();

    Object::new()
        .with("type", "event")
        .with("name", event.name.as_str())
        .with("anonymous", event.anonymous)
        .with("inputs", inputs)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstructorDefinition, DocErrorKind, FunctionDefinition};
    use serde_json::{Value, json};

    fn abi(contract: &ContractDefinition) -> Value {
        serde_json::from_str(&abi_interface(contract).unwrap()).unwrap()
    }

    #[test]
    fn function_entries() {
        let contract = ContractDefinition::new("C").with_function(
            FunctionDefinition::new("balanceOf").constant().param("address", "owner").returns("uint256", ""),
        );
        assert_eq!(
            abi(&contract),
            json!([{
                "type": "function",
                "name": "balanceOf",
                "constant": true,
                "inputs": [{ "name": "owner", "type": "address" }],
                "outputs": [{ "name": "", "type": "uint256" }]
            }])
        );
    }

    #[test]
    fn constructor_after_functions_and_events_last() {
        let contract = ContractDefinition::new("C")
            .with_event(EventDefinition::new("Ping").anonymous())
            .with_constructor(ConstructorDefinition::default().param("uint256", "supply"))
            .with_function(FunctionDefinition::new("f"));

        let abi = abi(&contract);
        let types: Vec<_> = abi.as_array().unwrap().iter().map(|entry| entry["type"].clone()).collect();
        assert_eq!(types, vec![json!("function"), json!("constructor"), json!("event")]);
        assert_eq!(
            abi[1],
            json!({ "type": "constructor", "inputs": [{ "name": "supply", "type": "uint256" }] })
        );
        assert_eq!(abi[2], json!({ "type": "event", "name": "Ping", "anonymous": true, "inputs": [] }));
    }

    #[test]
    fn event_inputs() {
        let contract = ContractDefinition::new("C").with_event(
            EventDefinition::new("Transfer").param("address", "from", true).param("uint", "amount", false),
        );
        assert_eq!(
            abi(&contract)[0]["inputs"],
            json!([
                { "name": "from", "type": "address", "indexed": true },
                { "name": "amount", "type": "uint", "indexed": false }
            ])
        );
    }

    #[test]
    fn entry_count() {
        let mut contract = ContractDefinition::new("C")
            .with_function(FunctionDefinition::new("a"))
            .with_function(FunctionDefinition::new("b"))
            .with_event(EventDefinition::new("E"));
        assert_eq!(abi_entries(&contract).unwrap().len(), 3);

        contract.constructor = Some(ConstructorDefinition::default());
        assert_eq!(abi_entries(&contract).unwrap().len(), 4);
    }

    #[test]
    fn compact_output() {
        let contract = ContractDefinition::new("C").with_function(FunctionDefinition::new("f"));
        assert_eq!(
            abi_interface(&contract).unwrap(),
            r#"[{"constant":false,"inputs":[],"name":"f","outputs":[],"type":"function"}]"#
        );
    }

    #[test]
    fn mismatched_lists_are_internal_errors() {
        let mut function = FunctionDefinition::new("f").returns("uint256", "");
        function.return_parameter_names.clear();
        let contract = ContractDefinition::new("C").with_function(function);
        let err = abi_interface(&contract).unwrap_err();
        assert_eq!(err.kind(), DocErrorKind::InternalInvariantViolation);
    }
}

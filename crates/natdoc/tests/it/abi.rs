use natdoc::{
    ConstructorDefinition, ContractDefinition, DocumentationType, EventDefinition,
    FunctionDefinition, documentation,
};
use serde_json::{Value, json};

fn abi(contract: &ContractDefinition) -> Value {
    let rendered = documentation(contract, DocumentationType::AbiInterface).unwrap();
    assert!(!rendered.contains(char::is_whitespace), "abi is not compact: {rendered}");
    serde_json::from_str(&rendered).unwrap()
}

#[test]
fn transfer_event_inputs() {
    let contract = ContractDefinition::new("Token").with_event(
        EventDefinition::new("Transfer").param("address", "from", true).param("uint", "amount", false),
    );
    assert_eq!(
        abi(&contract),
        json!([{
            "type": "event",
            "name": "Transfer",
            "anonymous": false,
            "inputs": [
                { "name": "from", "type": "address", "indexed": true },
                { "name": "amount", "type": "uint", "indexed": false }
            ]
        }])
    );
}

#[test]
fn entry_count_matches_declarations() {
    for (functions, events, constructor) in [(0, 0, false), (2, 0, true), (0, 3, false), (3, 2, true)] {
        let mut contract = ContractDefinition::new("C");
        for i in 0..functions {
            contract = contract.with_function(FunctionDefinition::new(format!("f{i}")).param("uint256", "x"));
        }
        for i in 0..events {
            contract = contract.with_event(EventDefinition::new(format!("E{i}")));
        }
        if constructor {
            contract = contract.with_constructor(ConstructorDefinition::default());
        }

        let entries = abi(&contract);
        assert_eq!(entries.as_array().unwrap().len(), functions + events + usize::from(constructor));
    }
}

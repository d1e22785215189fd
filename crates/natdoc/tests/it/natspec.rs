use natdoc::{
    ContractDefinition, DocErrorKind, DocumentationType, FunctionDefinition, documentation,
};
use serde_json::{Value, json};

fn f(doc: &str) -> FunctionDefinition {
    FunctionDefinition::new("f").param("uint", "x").param("uint", "y").with_documentation(doc)
}

fn render(contract: &ContractDefinition, kind: DocumentationType) -> Value {
    serde_json::from_str(&documentation(contract, kind).unwrap()).unwrap()
}

#[test]
fn notice() {
    let contract = ContractDefinition::new("C").with_function(f("@notice Hello"));
    assert_eq!(
        render(&contract, DocumentationType::NatspecUser),
        json!({ "methods": { "f(uint,uint)": { "notice": "Hello" } } })
    );
}

#[test]
fn notice_continuation() {
    let contract = ContractDefinition::new("C").with_function(f("@notice Line one\ncontinued"));
    let doc = render(&contract, DocumentationType::NatspecUser);
    assert_eq!(doc["methods"]["f(uint,uint)"]["notice"], "Line one continued");
}

#[test]
fn params() {
    let contract = ContractDefinition::new("C").with_function(f("@param x the value\n@param y other"));
    let doc = render(&contract, DocumentationType::NatspecDev);
    assert_eq!(doc["methods"]["f(uint,uint)"]["params"], json!({ "x": "the value", "y": "other" }));
}

#[test]
fn param_name_mismatch() {
    let contract = ContractDefinition::new("C").with_function(f("@param z bad"));
    let err = documentation(&contract, DocumentationType::NatspecDev).unwrap_err();
    assert_eq!(err.kind(), DocErrorKind::ParamNameMismatch);
    assert!(err.kind().is_user_error());

    // the user document doesn't look at parameters
    assert!(documentation(&contract, DocumentationType::NatspecUser).is_ok());
}

#[test]
fn param_name_across_line_break() {
    let contract = ContractDefinition::new("C").with_function(
        FunctionDefinition::new("f").param("uint256", "x").with_documentation(
            "@notice Hello\n@param x\nthe value of x",
        ),
    );
    assert_eq!(
        render(&contract, DocumentationType::NatspecUser),
        json!({ "methods": { "f(uint256)": { "notice": "Hello" } } })
    );

    // the documented name is `x\nthe`, which `f` doesn't have
    let err = documentation(&contract, DocumentationType::NatspecDev).unwrap_err();
    assert_eq!(err.kind(), DocErrorKind::ParamNameMismatch);
}

#[test]
fn undocumented_functions_are_omitted() {
    let contract = ContractDefinition::new("C")
        .with_function(FunctionDefinition::new("a"))
        .with_function(FunctionDefinition::new("b").with_documentation(""));

    for kind in [DocumentationType::NatspecUser, DocumentationType::NatspecDev] {
        assert_eq!(render(&contract, kind), json!({ "methods": {} }));
    }
}

#[test]
fn documents_are_indented() {
    let contract = ContractDefinition::new("C").with_function(f("@notice Hello"));
    let rendered = documentation(&contract, DocumentationType::NatspecUser).unwrap();
    assert!(rendered.contains("\n  \"methods\""), "{rendered}");
}

#[test]
fn continuation_does_not_leak_between_functions() {
    let contract = ContractDefinition::new("C")
        .with_function(FunctionDefinition::new("a").with_documentation("@dev ends inside dev"))
        .with_function(FunctionDefinition::new("b").with_documentation("Plain text"));

    assert_eq!(
        render(&contract, DocumentationType::NatspecDev),
        json!({ "methods": { "a()": { "details": "ends inside dev" } } })
    );
    assert_eq!(
        render(&contract, DocumentationType::NatspecUser),
        json!({ "methods": { "b()": { "notice": "Plain text" } } })
    );
}

#[test]
fn repeated_calls_are_independent() {
    let contract = ContractDefinition::new("C")
        .with_documentation("@title T")
        .with_function(f("@dev d\n@param x v"));
    let first = documentation(&contract, DocumentationType::NatspecDev).unwrap();
    let second = documentation(&contract, DocumentationType::NatspecDev).unwrap();
    assert_eq!(first, second);
}

#[test]
fn outputs_have_no_trailing_newline() {
    let contract = ContractDefinition::new("C").with_function(f("@notice Hello\n@dev details"));
    for kind in DocumentationType::ALL {
        let output = documentation(&contract, kind).unwrap();
        assert!(!output.ends_with('\n'), "{kind}: {output:?}");
    }
}

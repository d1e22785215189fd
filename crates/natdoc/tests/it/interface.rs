use natdoc::{
    ConstructorDefinition, ContractDefinition, DocumentationType, FunctionDefinition,
    StructDefinition, documentation,
};

#[test]
fn library_struct_before_constructor() {
    let contract = ContractDefinition::library("L")
        .with_struct(StructDefinition::new("Point").member("int", "x").member("int", "y"))
        .with_constructor(ConstructorDefinition::default().param("int", "a"))
        .with_function(FunctionDefinition::new("norm").constant().param("Point", "p").returns("int", ""));

    let text = documentation(&contract, DocumentationType::SolidityInterface).unwrap();
    let strukt = text.find("struct Point{int x;int y;}").unwrap();
    let constructor = text.find("function L(int a);").unwrap();
    assert!(strukt < constructor, "{text}");
    assert!(text.starts_with("library L{"));
    assert!(text.ends_with("function norm(Point p)constant returns(int );}"));
}

//! The minimal Solidity interface of a contract: declarations only, no bodies, no whitespace
//! beyond what separates types from names.

use crate::{ContractDefinition, DocResult, EnumDefinition, StructDefinition};
use itertools::Itertools;

/// Renders the minimal Solidity interface of `contract`.
///
/// Libraries also get their struct and enum definitions, since functions taking them can't be
/// called otherwise. Types of other contracts are never included.
pub fn solidity_interface(contract: &ContractDefinition) -> DocResult<String> {
    let mut writer = InterfaceWriter::new(contract.keyword(), &contract.name);

    if contract.is_library {
        for def in &contract.structs {
            writer.write_struct(def);
        }
        for def in &contract.enums {
            writer.write_enum(def);
        }
    }

    if let Some(constructor) = &contract.constructor {
        writer.write_function(&contract.name, &constructor.parameters()?, false, &[]);
    }

    for function in &contract.functions {
        writer.write_function(
            &function.name,
            &function.parameters()?,
            function.constant,
            &function.return_parameters()?,
        );
    }

    Ok(writer.finish())
}

/// The buffered interface writer.
#[derive(Debug)]
pub struct InterfaceWriter {
    buf: String,
}

impl InterfaceWriter {
    /// Opens the declaration of a `contract` or `library` named `name`.
    pub fn new(keyword: &str, name: &str) -> Self {
        Self { buf: format!("{keyword} {name}{{") }
    }

    /// Writes `struct Name{type member;...}`.
    pub fn write_struct(&mut self, def: &StructDefinition) {
        self.buf.push_str("struct ");
        self.buf.push_str(&def.name);
        self.buf.push('{');
        for member in &def.members {
            self.buf.push_str(&format!("{} {};", member.ty, member.name));
        }
        self.buf.push('}');
    }

    /// Writes `enum Name{A,B}`.
    pub fn write_enum(&mut self, def: &EnumDefinition) {
        self.buf.push_str(&format!("enum {}{{{}}}", def.name, def.values.iter().join(",")));
    }

    /// Writes `function name(params)[constant ][returns(params)];`.
    pub fn write_function(
        &mut self,
        name: &str,
        params: &[(&str, &str)],
        constant: bool,
        returns: &[(&str, &str)],
    ) {
        self.buf.push_str("function ");
        self.buf.push_str(name);
        self.write_params(params);
        if constant {
            self.buf.push_str("constant ");
        }
        if !returns.is_empty() {
            self.buf.push_str("returns");
            self.write_params(returns);
        } else if self.buf.ends_with(' ') {
            self.buf.pop();
        }
        self.buf.push(';');
    }

    /// Writes `(type name,type name)`.
    fn write_params(&mut self, params: &[(&str, &str)]) {
        let params = params.iter().map(|(name, ty)| format!("{ty} {name}")).join(",");
        self.buf.push_str(&format!("({params})"));
    }

    /// Closes the declaration and returns the rendered interface.
    pub fn finish(mut self) -> String {
        self.buf.push('}');
        self.buf
    }
}

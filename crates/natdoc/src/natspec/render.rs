use super::{CommentOwner, DocParser};
use crate::{
    ContractDefinition, DocError, DocResult,
    tree::{Node, Object},
};

/// Renders the user documentation: the `@notice` of every documented function, keyed by its
/// external signature.
pub fn user_documentation(contract: &ContractDefinition) -> DocResult<String> {
    let mut parser = DocParser::new();
    let mut methods = Object::new();

    for function in &contract.functions {
        let Some(comment) = function.documentation() else { continue };
        parser.reset_user();
        parser.parse(comment, CommentOwner::Function)?;

        // `@notice` is the only user tag, without it the function is left out
        if parser.notice.is_empty() {
            debug!(target: "natdoc::natspec", function = %function.name, "no user documentation");
            continue;
        }
        methods.insert(
            function.external_signature(),
            Object::new().with("notice", parser.notice.as_str()),
        );
    }

    Node::from(Object::new().with("methods", methods)).to_pretty_string()
}

/// Renders the developer documentation: the contract `@author` and `@title`, and the `@dev`,
/// `@author`, `@param` and `@return` of every documented function.
pub fn dev_documentation(contract: &ContractDefinition) -> DocResult<String> {
    let mut parser = DocParser::new();
    let mut doc = Object::new();

    if let Some(comment) = contract.documentation() {
        parser.reset_contract();
        parser.parse(comment, CommentOwner::Contract)?;

        if !parser.contract_author.is_empty() {
            doc.insert("author", parser.contract_author.as_str());
        }
        if !parser.title.is_empty() {
            doc.insert("title", parser.title.as_str());
        }
    }

    let mut methods = Object::new();
    for function in &contract.functions {
        let Some(comment) = function.documentation() else { continue };
        parser.reset_dev();
        parser.parse(comment, CommentOwner::Function)?;

        let mut method = Object::new();
        if !parser.dev.is_empty() {
            method.insert("details", parser.dev.as_str());
        }
        if !parser.author.is_empty() {
            method.insert("author", parser.author.as_str());
        }

        let mut params = Object::new();
        for (name, desc) in parser.params.iter() {
            if !function.parameter_names.contains(name) {
                return Err(DocError::ParamNameMismatch {
                    param: name.clone(),
                    function: function.external_signature().into_owned(),
                });
            }
            params.insert(name.as_str(), desc.as_str());
        }
        if !params.is_empty() {
            method.insert("params", params);
        }

        if !parser.returns.is_empty() {
            method.insert("return", parser.returns.as_str());
        }

        if method.is_empty() {
            debug!(target: "natdoc::natspec", function = %function.name, "no dev documentation");
            continue;
        }
        methods.insert(function.external_signature(), method);
    }
    doc.insert("methods", methods);

    Node::from(doc).to_pretty_string()
}

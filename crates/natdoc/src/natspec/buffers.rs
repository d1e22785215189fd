use derive_more::{Deref, DerefMut};

/// The ordered `(name, description)` pairs of the documented parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct DocParams(Vec<(String, String)>);

impl DocParams {
    /// Returns the description of the first parameter documented as `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(param, _)| param == name).map(|(_, desc)| desc.as_str())
    }
}

/// The fields collected while parsing NatSpec comments.
///
/// The buffers are split in groups that are cleared independently: the user group
/// ([`reset_user`](Self::reset_user)), the developer group ([`reset_dev`](Self::reset_dev)) and the
/// contract group ([`reset_contract`](Self::reset_contract)).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocBuffers {
    /// `@notice`
    pub notice: String,
    /// `@dev`
    pub dev: String,
    /// `@author` of a function.
    pub author: String,
    /// `@author` of a contract.
    pub contract_author: String,
    /// `@title`
    pub title: String,
    /// `@return`
    pub returns: String,
    /// `@param`
    pub params: DocParams,
}

impl DocBuffers {
    /// Clears the user documentation group.
    pub fn reset_user(&mut self) {
        self.notice.clear();
    }

    /// Clears the developer documentation group.
    pub fn reset_dev(&mut self) {
        self.dev.clear();
        self.author.clear();
        self.returns.clear();
        self.params.clear();
    }

    /// Clears the contract-level fields.
    pub fn reset_contract(&mut self) {
        self.contract_author.clear();
        self.title.clear();
    }
}

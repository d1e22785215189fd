use derive_more::Display;

/// A recognized `@` tag of a doc comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum DocTag {
    /// Developer-facing details.
    #[display("dev")]
    Dev,
    /// End-user facing description. Text before the first tag is a notice as well.
    #[display("notice")]
    Notice,
    /// The return value of a function.
    #[display("return")]
    Return,
    #[display("author")]
    Author,
    /// Contract comments only.
    #[display("title")]
    Title,
    /// `@param <name> <description>`.
    #[display("param")]
    Param,
}

impl DocTag {
    /// Parses a tag name, without the leading `@`.
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "dev" => Self::Dev,
            "notice" => Self::Notice,
            "return" => Self::Return,
            "author" => Self::Author,
            "title" => Self::Title,
            "param" => Self::Param,
            _ => return None,
        };
        Some(tag)
    }
}

/// The kind of declaration a comment is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum CommentOwner {
    #[display("contract")]
    Contract,
    #[display("function")]
    Function,
}

use crate::natspec::{CommentOwner, DocTag};
use thiserror::Error;

/// The documentation generation result.
pub type DocResult<T, E = DocError> = std::result::Result<T, E>;

/// An error raised while generating documentation.
///
/// Any error aborts the generation of the whole output.
#[derive(Debug, Error)]
pub enum DocError {
    /// A tag marker without a terminator, or a `@param` without a name/description separator.
    #[error("malformed doc tag: {0}")]
    MalformedTag(String),
    /// A tag name outside of the recognized NatSpec set.
    #[error("unknown doc tag `@{0}` encountered")]
    UnknownTag(String),
    /// A known tag used on a declaration that doesn't support it.
    #[error("@{tag} tag is not legal in a {owner} comment")]
    IllegalTagForContext {
        /// The offending tag.
        tag: DocTag,
        /// The declaration kind the comment belongs to.
        owner: CommentOwner,
    },
    /// A documented parameter name that is not a parameter of the function.
    #[error(
        "documented parameter \"{param}\" not found in the parameter list of the function `{function}`"
    )]
    ParamNameMismatch {
        /// The documented parameter name.
        param: String,
        /// The external signature of the documented function.
        function: String,
    },
    /// A broken invariant, either in the provided declarations or in this crate.
    #[error("internal error: {0}")]
    Internal(String),
    /// Failure serializing a rendered tree.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The kind of a [`DocError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocErrorKind {
    MalformedTag,
    UnknownTag,
    IllegalTagForContext,
    ParamNameMismatch,
    InternalInvariantViolation,
}

impl DocErrorKind {
    /// Returns true if the error was caused by the documented source rather than by a broken
    /// invariant.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::InternalInvariantViolation)
    }
}

impl DocError {
    /// Creates a new [`DocError::Internal`].
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> DocErrorKind {
        match self {
            Self::MalformedTag(_) => DocErrorKind::MalformedTag,
            Self::UnknownTag(_) => DocErrorKind::UnknownTag,
            Self::IllegalTagForContext { .. } => DocErrorKind::IllegalTagForContext,
            Self::ParamNameMismatch { .. } => DocErrorKind::ParamNameMismatch,
            Self::Internal(_) | Self::Json(_) => DocErrorKind::InternalInvariantViolation,
        }
    }
}

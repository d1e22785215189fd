//! NatSpec comment parsing and the user/developer documentation documents.
//! <https://docs.soliditylang.org/en/latest/natspec-format.html>

mod buffers;
pub use buffers::{DocBuffers, DocParams};

mod parser;
pub use parser::DocParser;

mod render;
pub use render::{dev_documentation, user_documentation};

mod tag;
pub use tag::{CommentOwner, DocTag};

use super::{CommentOwner, DocBuffers, DocTag};
use crate::{DocError, DocResult};
use derive_more::{Deref, DerefMut};

/// Incremental NatSpec comment parser.
///
/// The parsed fields accumulate in the wrapped [`DocBuffers`] until the caller resets the
/// relevant group. The "last active tag" used for line continuations only lives for the duration
/// of a single [`parse`](Self::parse) call.
#[derive(Debug, Default, Deref, DerefMut)]
pub struct DocParser {
    buffers: DocBuffers,
}

impl DocParser {
    /// Creates a parser with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed fields.
    pub fn into_buffers(self) -> DocBuffers {
        self.buffers
    }

    /// Parses a single comment attached to a declaration of kind `owner`.
    pub fn parse(&mut self, comment: &str, owner: CommentOwner) -> DocResult<()> {
        trace!(target: "natdoc::natspec", %owner, len = comment.len(), "parsing doc comment");
        Scanner { text: comment, owner, last_tag: None, buffers: &mut self.buffers }.run()
    }
}

/// Scanning state over one comment string.
struct Scanner<'a> {
    text: &'a str,
    owner: CommentOwner,
    /// The tag subsequent untagged lines continue.
    last_tag: Option<DocTag>,
    buffers: &'a mut DocBuffers,
}

impl Scanner<'_> {
    fn run(mut self) -> DocResult<()> {
        let end = self.text.len();
        let mut pos = 0;
        while pos != end {
            let tag_pos = self.find(pos, '@');
            let nl_pos = self.find(pos, '\n');

            if tag_pos < nl_pos {
                let name_end = self.find(tag_pos, ' ').min(nl_pos);
                if name_end == end {
                    return Err(DocError::MalformedTag(format!(
                        "end of tag `{}` not found",
                        &self.text[tag_pos..]
                    )));
                }
                let name = &self.text[tag_pos + 1..name_end];
                pos = match self.last_tag {
                    // a bare `@` continues the active tag
                    Some(active) if name.is_empty() => self.continue_tag(name_end + 1, active)?,
                    _ => self.tag(name_end + 1, name)?,
                };
            } else if let Some(active) = self.last_tag {
                pos = self.continue_tag(pos, active)?;
            } else if pos == 0 {
                // untagged text at the very start is the notice
                pos = self.tag_line(pos, DocTag::Notice, false)?;
            } else if nl_pos == end {
                break;
            } else {
                pos = nl_pos + 1;
            }
        }
        Ok(())
    }

    /// Returns the position of the next `c` at or after `from`, or the end of the text.
    fn find(&self, from: usize, c: char) -> usize {
        self.text[from..].find(c).map_or(self.text.len(), |i| from + i)
    }

    /// Returns the position right after the line break at `nl_pos`.
    fn skip_line(&self, nl_pos: usize) -> usize {
        if nl_pos == self.text.len() { nl_pos } else { nl_pos + 1 }
    }

    /// Starts a new tag whose body begins at `from`.
    fn tag(&mut self, from: usize, name: &str) -> DocResult<usize> {
        match DocTag::from_name(name) {
            Some(DocTag::Param) => self.param(from),
            Some(tag) => self.tag_line(from, tag, false),
            None => Err(DocError::UnknownTag(name.to_string())),
        }
    }

    /// Appends the line at `from` to the body of `tag`.
    fn continue_tag(&mut self, from: usize, tag: DocTag) -> DocResult<usize> {
        match tag {
            DocTag::Param => self.append_param(from),
            tag => self.tag_line(from, tag, true),
        }
    }

    /// Copies the rest of the line into the buffer of `tag`.
    fn tag_line(&mut self, from: usize, tag: DocTag, appending: bool) -> DocResult<usize> {
        let nl_pos = self.find(from, '\n');
        let text = self.text;
        let buf = self.buffer(tag)?;
        append(buf, &text[from..nl_pos], appending && from < text.len());
        self.last_tag = Some(tag);
        Ok(self.skip_line(nl_pos))
    }

    /// Parses a `@param <name> <description>` body.
    ///
    /// The name runs up to the next space in the comment, even past a line break. The
    /// description is the rest of the line that space is on.
    fn param(&mut self, from: usize) -> DocResult<usize> {
        let name_end = self.find(from, ' ');
        if name_end == self.text.len() {
            return Err(DocError::MalformedTag(format!(
                "end of param name not found: `{}`",
                &self.text[from..]
            )));
        }
        let nl_pos = self.find(name_end + 1, '\n');
        let name = &self.text[from..name_end];
        let desc = &self.text[name_end + 1..nl_pos];
        self.buffers.params.push((name.to_string(), desc.to_string()));
        self.last_tag = Some(DocTag::Param);
        Ok(self.skip_line(nl_pos))
    }

    /// Appends the line at `from` to the description of the last documented parameter.
    fn append_param(&mut self, from: usize) -> DocResult<usize> {
        let nl_pos = self.find(from, '\n');
        let text = self.text;
        let Some((_, desc)) = self.buffers.params.last_mut() else {
            return Err(DocError::internal("tried to append to an empty parameter list"));
        };
        append(desc, &text[from..nl_pos], from < text.len());
        Ok(self.skip_line(nl_pos))
    }

    /// Returns the buffer `tag` writes to for the current owner.
    fn buffer(&mut self, tag: DocTag) -> DocResult<&mut String> {
        let buffers = &mut *self.buffers;
        match (tag, self.owner) {
            (DocTag::Dev, _) => Ok(&mut buffers.dev),
            (DocTag::Notice, _) => Ok(&mut buffers.notice),
            (DocTag::Return, _) => Ok(&mut buffers.returns),
            (DocTag::Author, CommentOwner::Contract) => Ok(&mut buffers.contract_author),
            (DocTag::Author, CommentOwner::Function) => Ok(&mut buffers.author),
            (DocTag::Title, CommentOwner::Contract) => Ok(&mut buffers.title),
            (DocTag::Title, owner) => Err(DocError::IllegalTagForContext { tag, owner }),
            (DocTag::Param, _) => Err(DocError::internal("@param has no single text buffer")),
        }
    }
}

/// Appends `line` to `buf`. Continuation lines are joined with a single space unless they
/// already start with one.
fn append(buf: &mut String, line: &str, continuation: bool) {
    if continuation && !line.starts_with(' ') {
        buf.push(' ');
    }
    buf.push_str(line);
}

use strum::{AsRefStr, Display, EnumString};

use crate::{id::*, reaction::ReactionCounts, time::*};

/// The maximum nesting depth of comments.
///
/// Top-level comments have depth 0.
pub const MAX_COMMENT_DEPTH: u8 = 5;

/// Order of the top-level comments of a post.
///
/// Replies are always listed oldest first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CommentSort {
    #[default]
    Newest,
    Oldest,
    // Thumbs up minus thumbs down, newest first on ties
    Popular,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : Id,
    pub post_id     : Id,
    // Back-reference, children are never embedded.
    pub parent_id   : Option<Id>,
    pub depth       : u8,
    pub author_id   : Id,
    pub text        : String,
    pub reactions   : ReactionCounts,
    // Number of live direct replies
    pub reply_count : u64,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
    pub edited_at   : Option<Timestamp>,
    pub deleted_at  : Option<Timestamp>,
}

impl Comment {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_authored_by(&self, actor_id: &Id) -> bool {
        &self.author_id == actor_id
    }
}

/// Where a reply to a comment is attached within the thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPlacement {
    pub parent_id: Id,
    pub depth: u8,
}

impl ReplyPlacement {
    /// Places a reply below `parent`.
    ///
    /// Replies to a comment that has already reached [`MAX_COMMENT_DEPTH`]
    /// are attached to the parent of that comment instead, i.e. they become
    /// siblings of the comment they answer.
    pub fn below(parent: &Comment) -> Self {
        debug_assert!(parent.depth <= MAX_COMMENT_DEPTH);
        match &parent.parent_id {
            Some(grandparent_id) if parent.depth >= MAX_COMMENT_DEPTH => Self {
                parent_id: grandparent_id.clone(),
                depth: parent.depth,
            },
            _ => Self {
                parent_id: parent.id.clone(),
                depth: parent.depth + 1,
            },
        }
    }
}

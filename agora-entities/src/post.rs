use crate::{id::*, reaction::ReactionCounts, time::*};

/// The counters of a post that are maintained by the comment
/// and reaction subsystem.
///
/// Content, media and visibility of posts are managed elsewhere.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id            : Id,
    pub community_id  : Option<Id>,
    pub author_id     : Id,
    pub created_at    : Timestamp,
    // Number of live top-level comments
    pub comment_count : u64,
    pub reactions     : ReactionCounts,
}

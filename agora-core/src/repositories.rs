// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository, with the exception of the denormalized
// counters that are adjusted by id.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The object has been modified concurrently")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    pub const fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<()>;

    // Only live (undeleted) comments
    fn load_comment(&self, id: &str) -> Result<Comment>;

    fn update_comment_text(&self, id: &str, text: &str, edited_at: Timestamp) -> Result<()>;

    // The comment is retained in storage and so are its descendants.
    fn mark_comment_deleted(&self, id: &str, deleted_at: Timestamp) -> Result<()>;

    // The reply counters are adjusted independent of whether the
    // comment itself is still live.
    fn increment_reply_count(&self, id: &str) -> Result<()>;
    // Fails with `Conflict` instead of becoming negative.
    fn decrement_reply_count(&self, id: &str) -> Result<()>;

    // Only live comments
    fn load_top_level_comments(
        &self,
        post_id: &str,
        sort: CommentSort,
        pagination: &Pagination,
    ) -> Result<Vec<Comment>>;

    // Only live direct replies, oldest first
    fn load_replies(&self, parent_id: &str, pagination: &Pagination) -> Result<Vec<Comment>>;
}

pub trait PostRepo {
    fn create_post(&self, post: &Post) -> Result<()>;
    fn load_post(&self, id: &str) -> Result<Post>;

    fn increment_comment_count(&self, post_id: &str) -> Result<()>;
    // Fails with `Conflict` instead of becoming negative.
    fn decrement_comment_count(&self, post_id: &str) -> Result<()>;
}

pub trait ReactionRepo {
    fn load_reaction(&self, actor_id: &str, target: &ReactionTarget) -> Result<Option<Reaction>>;
    fn create_reaction(&self, reaction: &Reaction) -> Result<()>;
    fn update_reaction_value(
        &self,
        actor_id: &str,
        target: &ReactionTarget,
        value: ReactionKind,
        updated_at: Timestamp,
    ) -> Result<()>;
    fn delete_reaction(&self, actor_id: &str, target: &ReactionTarget) -> Result<()>;

    // The reactions of a single actor on many targets of the same type
    fn load_reactions_of_actor(
        &self,
        actor_id: &str,
        target_type: TargetType,
        target_ids: &[&str],
    ) -> Result<Vec<Reaction>>;

    // Counts the actual reaction rows. Only used for consistency checks,
    // the denormalized counters are read through `ReactionCounterRepo`.
    fn count_reactions(&self, target: &ReactionTarget) -> Result<ReactionCounts>;
}

/// Denormalized reaction counters of both comments and posts.
pub trait ReactionCounterRepo {
    // Fails with `NotFound` if the target does not exist (anymore).
    fn load_reaction_counts(&self, target: &ReactionTarget) -> Result<ReactionCounts>;

    // Fails with `Conflict` if the stored counters don't match `expected`.
    fn compare_and_swap_reaction_counts(
        &self,
        target: &ReactionTarget,
        expected: ReactionCounts,
        new: ReactionCounts,
    ) -> Result<()>;
}

pub trait CommunityRepo {
    fn load_community_member(&self, community_id: &str, user_id: &str) -> Result<CommunityMember>;
    fn create_or_update_community_member(&self, member: &CommunityMember) -> Result<()>;
}

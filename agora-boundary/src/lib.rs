//! Request and response types of the API.
//!
//! All field names are serialized in camelCase.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id                : String,
    pub community_id      : Option<String>,
    pub author_id         : String,
    pub created_at        : i64,
    pub comment_count     : u64,
    pub thumbs_up_count   : u64,
    pub thumbs_down_count : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct UpdateComment {
    pub content: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id                : String,
    pub post_id           : String,
    pub parent_comment_id : Option<String>,
    pub depth             : u8,
    pub content           : String,
    pub author_id         : String,
    pub thumbs_up_count   : u64,
    pub thumbs_down_count : u64,
    pub reply_count       : u64,
    pub created_at        : i64,
    pub updated_at        : i64,
    pub edited_at         : Option<i64>,
    /// The reaction of the requesting user
    pub user_reaction     : Option<ReactionType>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)
)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    #[cfg_attr(feature = "extra-derive", default)]
    Newest,
    Oldest,
    Popular,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    ThumbsUp,
    ThumbsDown,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Added,
    Removed,
    Changed,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct ToggleReaction {
    pub reaction_type: ReactionType,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Default)
)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCounts {
    pub thumbs_up: u64,
    pub thumbs_down: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct ToggleReactionResponse {
    pub action: ReactionAction,
    pub reaction: Option<ReactionType>,
    pub counts: ReactionCounts,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum CommunityRole {
    Member,
    Moderator,
    Admin,
    Owner,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct CommunityMember {
    pub community_id: String,
    pub user_id: String,
    pub role: CommunityRole,
    pub banned: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

use super::*;
use agora_entities as e;

impl From<e::post::Post> for Post {
    fn from(from: e::post::Post) -> Self {
        let e::post::Post {
            id,
            community_id,
            author_id,
            created_at,
            comment_count,
            reactions,
        } = from;
        Self {
            id: id.into(),
            community_id: community_id.map(Into::into),
            author_id: author_id.into(),
            created_at: created_at.as_millis(),
            comment_count,
            thumbs_up_count: reactions.thumbs_up,
            thumbs_down_count: reactions.thumbs_down,
        }
    }
}

/// The reaction of the requesting user is not part of the entity.
impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            post_id,
            parent_id,
            depth,
            author_id,
            text,
            reactions,
            reply_count,
            created_at,
            updated_at,
            edited_at,
            deleted_at: _,
        } = from;
        Self {
            id: id.into(),
            post_id: post_id.into(),
            parent_comment_id: parent_id.map(Into::into),
            depth,
            content: text,
            author_id: author_id.into(),
            thumbs_up_count: reactions.thumbs_up,
            thumbs_down_count: reactions.thumbs_down,
            reply_count,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
            edited_at: edited_at.map(e::time::Timestamp::as_millis),
            user_reaction: None,
        }
    }
}

impl From<e::reaction::ReactionKind> for ReactionType {
    fn from(from: e::reaction::ReactionKind) -> Self {
        use e::reaction::ReactionKind as E;
        match from {
            E::ThumbsUp => Self::ThumbsUp,
            E::ThumbsDown => Self::ThumbsDown,
        }
    }
}

impl From<ReactionType> for e::reaction::ReactionKind {
    fn from(from: ReactionType) -> Self {
        match from {
            ReactionType::ThumbsUp => Self::ThumbsUp,
            ReactionType::ThumbsDown => Self::ThumbsDown,
        }
    }
}

impl From<e::reaction::ToggleAction> for ReactionAction {
    fn from(from: e::reaction::ToggleAction) -> Self {
        use e::reaction::ToggleAction as E;
        match from {
            E::Added => Self::Added,
            E::Removed => Self::Removed,
            E::Changed => Self::Changed,
        }
    }
}

impl From<e::reaction::ReactionCounts> for ReactionCounts {
    fn from(from: e::reaction::ReactionCounts) -> Self {
        let e::reaction::ReactionCounts {
            thumbs_up,
            thumbs_down,
        } = from;
        Self {
            thumbs_up,
            thumbs_down,
        }
    }
}

impl From<e::comment::CommentSort> for CommentSort {
    fn from(from: e::comment::CommentSort) -> Self {
        use e::comment::CommentSort as E;
        match from {
            E::Newest => Self::Newest,
            E::Oldest => Self::Oldest,
            E::Popular => Self::Popular,
        }
    }
}

impl From<CommentSort> for e::comment::CommentSort {
    fn from(from: CommentSort) -> Self {
        match from {
            CommentSort::Newest => Self::Newest,
            CommentSort::Oldest => Self::Oldest,
            CommentSort::Popular => Self::Popular,
        }
    }
}

impl From<e::community::CommunityRole> for CommunityRole {
    fn from(from: e::community::CommunityRole) -> Self {
        use e::community::CommunityRole as E;
        match from {
            E::Member => Self::Member,
            E::Moderator => Self::Moderator,
            E::Admin => Self::Admin,
            E::Owner => Self::Owner,
        }
    }
}

impl From<CommunityRole> for e::community::CommunityRole {
    fn from(from: CommunityRole) -> Self {
        match from {
            CommunityRole::Member => Self::Member,
            CommunityRole::Moderator => Self::Moderator,
            CommunityRole::Admin => Self::Admin,
            CommunityRole::Owner => Self::Owner,
        }
    }
}

impl From<e::community::CommunityMember> for CommunityMember {
    fn from(from: e::community::CommunityMember) -> Self {
        let e::community::CommunityMember {
            community_id,
            user_id,
            role,
            banned,
        } = from;
        Self {
            community_id: community_id.into(),
            user_id: user_id.into(),
            role: role.into(),
            banned,
        }
    }
}

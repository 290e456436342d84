//! Conversions of use case results into the JSON boundary types.

use agora_boundary as json;
use agora_core::usecases;

pub fn comment_view(from: usecases::CommentView) -> json::Comment {
    let usecases::CommentView {
        comment,
        user_reaction,
    } = from;
    json::Comment {
        user_reaction: user_reaction.map(Into::into),
        ..comment.into()
    }
}

pub fn comment_page(from: usecases::CommentPage) -> json::CommentPage {
    let pagination = json::Pagination {
        page: from.page(),
        limit: from.limit,
        total: from.total,
        total_pages: from.total_pages(),
        has_more: from.has_more(),
    };
    json::CommentPage {
        comments: from.comments.into_iter().map(comment_view).collect(),
        pagination,
    }
}

pub fn toggled_reaction(from: usecases::ToggledReaction) -> json::ToggleReactionResponse {
    let usecases::ToggledReaction {
        action,
        reaction,
        counts,
    } = from;
    json::ToggleReactionResponse {
        action: action.into(),
        reaction: reaction.map(Into::into),
        counts: counts.into(),
    }
}

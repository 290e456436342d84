use std::collections::HashMap;

use super::prelude::*;

/// A comment as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub user_reaction: Option<ReactionKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPage {
    pub comments: Vec<CommentView>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl CommentPage {
    pub const fn has_more(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }

    /// 1-based page number
    pub const fn page(&self) -> u64 {
        self.offset / self.limit + 1
    }

    pub const fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentQuery {
    pub sort: CommentSort,
    pub pagination: Pagination,
}

/// Loads a page of top-level comments of a post.
///
/// The total is read from the denormalized comment counter of the post.
pub fn load_comment_page<R>(
    repo: &R,
    viewer_id: Option<&str>,
    post_id: &str,
    query: &CommentQuery,
) -> Result<CommentPage>
where
    R: CommentRepo + PostRepo + ReactionRepo,
{
    let (offset, limit) = validate::pagination(&query.pagination)?;
    let post = repo.load_post(post_id)?;
    let comments =
        repo.load_top_level_comments(post_id, query.sort, &Pagination::new(offset, limit))?;
    let comments = with_user_reactions(repo, viewer_id, comments)?;
    Ok(CommentPage {
        comments,
        offset,
        limit,
        total: post.comment_count,
    })
}

/// Loads a page of direct replies, oldest first.
pub fn load_reply_page<R>(
    repo: &R,
    viewer_id: Option<&str>,
    comment_id: &str,
    pagination: &Pagination,
) -> Result<CommentPage>
where
    R: CommentRepo + ReactionRepo,
{
    let (offset, limit) = validate::pagination(pagination)?;
    let parent = repo.load_comment(comment_id)?;
    let replies = repo.load_replies(comment_id, &Pagination::new(offset, limit))?;
    let comments = with_user_reactions(repo, viewer_id, replies)?;
    Ok(CommentPage {
        comments,
        offset,
        limit,
        total: parent.reply_count,
    })
}

pub fn list_replies<R: CommentRepo>(
    repo: &R,
    comment_id: &str,
    pagination: &Pagination,
) -> Result<Vec<Comment>> {
    let (offset, limit) = validate::pagination(pagination)?;
    // Fail for deleted or unknown parents instead of returning an empty list
    repo.load_comment(comment_id)?;
    Ok(repo.load_replies(comment_id, &Pagination::new(offset, limit))?)
}

fn with_user_reactions<R: ReactionRepo>(
    repo: &R,
    viewer_id: Option<&str>,
    comments: Vec<Comment>,
) -> Result<Vec<CommentView>> {
    let viewer_id = viewer_id.map(str::trim).filter(|id| !id.is_empty());
    let mut reactions = HashMap::new();
    if let Some(viewer_id) = viewer_id {
        if !comments.is_empty() {
            let ids: Vec<_> = comments.iter().map(|c| c.id.as_str()).collect();
            reactions = repo
                .load_reactions_of_actor(viewer_id, TargetType::Comment, &ids)?
                .into_iter()
                .map(|r| (r.target.id, r.value))
                .collect();
        }
    }
    Ok(comments
        .into_iter()
        .map(|comment| CommentView {
            user_reaction: reactions.get(&comment.id).copied(),
            comment,
        })
        .collect())
}

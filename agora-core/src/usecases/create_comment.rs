use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id   : String,
    pub parent_id : Option<String>,
    pub author_id : String,
    pub text      : String,
}

pub fn create_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepo + PostRepo,
{
    let NewComment {
        post_id,
        parent_id,
        author_id,
        text,
    } = new_comment;
    let author_id = super::actor_id(&author_id)?;
    let text = validate::comment_text(&text)?.to_owned();
    let post = repo.load_post(&post_id)?;
    let placement = parent_id
        .map(|parent_id| {
            let parent = match repo.load_comment(&parent_id) {
                Ok(parent) => parent,
                Err(RepoError::NotFound) => return Err(Error::ParentNotFound),
                Err(err) => return Err(err.into()),
            };
            if parent.post_id != post.id {
                log::warn!(
                    "Parent comment {} does not belong to post {}",
                    parent.id,
                    post.id
                );
                return Err(Error::ParentNotFound);
            }
            let placement = ReplyPlacement::below(&parent);
            if placement.parent_id != parent.id {
                log::info!(
                    "Comment {} is nested too deeply, attaching the reply to {}",
                    parent.id,
                    placement.parent_id
                );
            }
            Ok(placement)
        })
        .transpose()?;
    let (parent_id, depth) = match placement {
        Some(ReplyPlacement { parent_id, depth }) => (Some(parent_id), depth),
        None => (None, 0),
    };
    debug_assert!(depth <= MAX_COMMENT_DEPTH);
    let now = Timestamp::now();
    let comment = Comment {
        id: Id::new(),
        post_id: post.id,
        parent_id,
        depth,
        author_id,
        text,
        reactions: Default::default(),
        reply_count: 0,
        created_at: now,
        updated_at: now,
        edited_at: None,
        deleted_at: None,
    };
    log::info!("Creating comment {} on post {}", comment.id, comment.post_id);
    repo.create_comment(&comment)?;
    match &comment.parent_id {
        Some(parent_id) => repo.increment_reply_count(parent_id.as_str())?,
        None => repo.increment_comment_count(comment.post_id.as_str())?,
    }
    Ok(comment)
}

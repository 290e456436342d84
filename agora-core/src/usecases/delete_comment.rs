use super::prelude::*;

/// Deletes a comment logically.
///
/// Authors may always delete their own comments. Everyone else needs
/// the permission to delete posts within the community of the post.
/// Replies of the deleted comment are retained, but they are no longer
/// reachable when browsing the thread.
pub fn delete_comment<R>(
    repo: &R,
    moderation: &dyn ModerationGateway,
    comment_id: &str,
    actor_id: &str,
) -> Result<()>
where
    R: CommentRepo + PostRepo,
{
    let actor_id = super::actor_id(actor_id)?;
    let comment = repo.load_comment(comment_id)?;
    if !comment.is_authored_by(&actor_id) {
        let post = repo.load_post(comment.post_id.as_str())?;
        let permitted = match &post.community_id {
            Some(community_id) => {
                moderation
                    .can_moderate(&actor_id, community_id)
                    .map_err(RepoError::Other)?
                    .can_delete_posts
            }
            None => false,
        };
        if !permitted {
            log::info!("User {actor_id} is not allowed to delete comment {comment_id}");
            return Err(Error::Forbidden);
        }
        log::info!("Moderator {actor_id} deletes comment {comment_id}");
    } else {
        log::info!("Deleting comment {comment_id}");
    }
    repo.mark_comment_deleted(comment_id, Timestamp::now())?;
    // Only the direct edge is removed, independent of the number of descendants
    match &comment.parent_id {
        Some(parent_id) => repo.decrement_reply_count(parent_id.as_str())?,
        None => repo.decrement_comment_count(comment.post_id.as_str())?,
    }
    Ok(())
}

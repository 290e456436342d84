use super::*;

pub fn delete_comment(
    connections: &sqlite::Connections,
    comment_id: &str,
    actor_id: &str,
) -> Result<()> {
    retry_on_conflict("comment deletion", || {
        Ok(connections.exclusive()?.transaction(|conn| {
            usecases::delete_comment(conn, conn, comment_id, actor_id).map_err(|err| {
                warn!("Failed to delete comment {comment_id}: {err}");
                err
            })
        })?)
    })
}

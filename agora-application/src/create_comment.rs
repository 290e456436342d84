use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    retry_on_conflict("comment creation", || {
        Ok(connections.exclusive()?.transaction(|conn| {
            usecases::create_comment(conn, new_comment.clone()).map_err(|err| {
                warn!(
                    "Failed to create comment on post {}: {}",
                    new_comment.post_id, err
                );
                err
            })
        })?)
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn reply_to_deeply_nested_comment() {
        let fixture = BackendFixture::new();
        let post = fixture.create_post(None);
        let mut parent = fixture.create_comment(&post.id, None, "alice", "root");
        for _ in 0..MAX_COMMENT_DEPTH {
            parent = fixture.create_comment(&post.id, Some(&parent.id), "bob", "reply");
        }
        assert_eq!(MAX_COMMENT_DEPTH, parent.depth);
        let reply = fixture.create_comment(&post.id, Some(&parent.id), "carol", "too deep");
        assert_eq!(MAX_COMMENT_DEPTH, reply.depth);
        assert_eq!(parent.parent_id, reply.parent_id);
        fixture.assert_reply_counts_are_consistent(&post.id);
    }

    #[test]
    fn reject_comment_on_missing_post() {
        let fixture = BackendFixture::new();
        let err = flows::create_comment(
            &fixture.db_connections,
            usecases::NewComment {
                post_id: "nope".into(),
                parent_id: None,
                author_id: "alice".into(),
                text: "Hello".into(),
            },
        )
        .unwrap_err();
        assert_eq!(ErrorKind::NotFound, err.kind());
    }
}

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct UpdateComment {
    pub id: String,
    pub actor_id: String,
    pub text: String,
}

/// Only the author is allowed to edit a comment.
pub fn update_comment<R: CommentRepo>(repo: &R, update: UpdateComment) -> Result<Comment> {
    let UpdateComment { id, actor_id, text } = update;
    let actor_id = super::actor_id(&actor_id)?;
    let comment = repo.load_comment(&id)?;
    if !comment.is_authored_by(&actor_id) {
        log::info!("User {actor_id} is not allowed to edit comment {id}");
        return Err(Error::Forbidden);
    }
    let text = validate::comment_text(&text)?;
    let now = Timestamp::now();
    repo.update_comment_text(&id, text, now)?;
    Ok(Comment {
        text: text.to_owned(),
        edited_at: Some(now),
        updated_at: now,
        ..comment
    })
}

#[cfg(test)]
mod tests {
    use super::super::{
        create_comment,
        tests::{insert_post, MockDb},
        NewComment,
    };
    use super::*;

    fn setup() -> (MockDb, Comment) {
        let db = MockDb::default();
        let post_id = insert_post(&db, None);
        let comment = create_comment(
            &db,
            NewComment {
                post_id,
                parent_id: None,
                author_id: "alice".into(),
                text: "original".into(),
            },
        )
        .unwrap();
        (db, comment)
    }

    #[test]
    fn author_edits_comment() {
        let (db, comment) = setup();
        assert!(comment.edited_at.is_none());
        let updated = update_comment(
            &db,
            UpdateComment {
                id: comment.id.to_string(),
                actor_id: "alice".into(),
                text: "edited".into(),
            },
        )
        .unwrap();
        assert_eq!("edited", updated.text);
        assert!(updated.edited_at.is_some());
        assert_eq!(comment.created_at, updated.created_at);
        assert_eq!(updated, db.load_comment(comment.id.as_str()).unwrap());
    }

    #[test]
    fn others_may_not_edit() {
        let (db, comment) = setup();
        let err = update_comment(
            &db,
            UpdateComment {
                id: comment.id.to_string(),
                actor_id: "mallory".into(),
                text: "pwned".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::Forbidden));
        assert_eq!("original", db.stored_comment(comment.id.as_str()).text);
    }

    #[test]
    fn edited_text_is_validated() {
        let (db, comment) = setup();
        assert!(matches!(
            update_comment(
                &db,
                UpdateComment {
                    id: comment.id.to_string(),
                    actor_id: "alice".into(),
                    text: "   ".into(),
                },
            ),
            Err(Error::EmptyComment)
        ));
    }
}

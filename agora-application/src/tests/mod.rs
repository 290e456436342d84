pub mod prelude {
    pub use agora_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases::{self, ErrorKind},
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            agora_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn create_post(&self, community_id: Option<&str>) -> Post {
            flows::create_post(
                &self.db_connections,
                usecases::NewPost {
                    community_id: community_id.map(Into::into),
                    author_id: "author".into(),
                },
            )
            .unwrap()
        }

        pub fn create_comment(
            &self,
            post_id: &Id,
            parent_id: Option<&Id>,
            author_id: &str,
            text: &str,
        ) -> Comment {
            flows::create_comment(
                &self.db_connections,
                usecases::NewComment {
                    post_id: post_id.to_string(),
                    parent_id: parent_id.map(ToString::to_string),
                    author_id: author_id.into(),
                    text: text.into(),
                },
            )
            .unwrap()
        }

        pub fn toggle(
            &self,
            target: &ReactionTarget,
            actor_id: &str,
            reaction_type: &str,
        ) -> Result<usecases::ToggledReaction, AppError> {
            flows::toggle_reaction(
                &self.db_connections,
                usecases::ToggleReaction {
                    actor_id: actor_id.into(),
                    target: target.clone(),
                    reaction_type: reaction_type.into(),
                },
            )
        }

        pub fn get_comment(&self, id: &Id) -> Result<Comment, AppError> {
            flows::get_comment(&self.db_connections, id.as_str())
        }

        pub fn get_post(&self, id: &Id) -> Post {
            flows::get_post(&self.db_connections, id.as_str()).unwrap()
        }

        /// Walks the visible thread of a post and verifies
        /// the denormalized counters on the way.
        pub fn assert_reply_counts_are_consistent(&self, post_id: &Id) {
            let all = Pagination::new(0, agora_core::util::validate::MAX_PAGE_LIMIT);
            let query = usecases::CommentQuery {
                sort: CommentSort::Oldest,
                pagination: all,
            };
            let top_level =
                flows::load_comment_page(&self.db_connections, None, post_id.as_str(), &query)
                    .unwrap();
            assert_eq!(top_level.total, top_level.comments.len() as u64);
            let mut pending: Vec<_> = top_level.comments.into_iter().map(|v| v.comment).collect();
            while let Some(comment) = pending.pop() {
                assert!(comment.depth <= MAX_COMMENT_DEPTH);
                let replies =
                    flows::list_replies(&self.db_connections, comment.id.as_str(), &all).unwrap();
                assert_eq!(
                    comment.reply_count,
                    replies.len() as u64,
                    "reply count of comment {}",
                    comment.id
                );
                for reply in &replies {
                    assert_eq!(comment.depth + 1, reply.depth);
                }
                pending.extend(replies);
            }
        }
    }
}

use prelude::*;

#[test]
fn comment_and_react_on_a_thread() {
    let fixture = BackendFixture::new();
    let post = fixture.create_post(None);

    let c1 = fixture.create_comment(&post.id, None, "alice", "C1");
    assert_eq!(0, c1.depth);
    assert_eq!(0, c1.reply_count);

    let c2 = fixture.create_comment(&post.id, Some(&c1.id), "bob", "C2");
    assert_eq!(1, c2.depth);
    assert_eq!(1, fixture.get_comment(&c1.id).unwrap().reply_count);

    let target = ReactionTarget::comment(c2.id.clone());
    let added = fixture.toggle(&target, "actor", "thumbs_up").unwrap();
    assert_eq!(ToggleAction::Added, added.action);
    assert_eq!(1, added.counts.thumbs_up);

    let changed = fixture.toggle(&target, "actor", "thumbs_down").unwrap();
    assert_eq!(ToggleAction::Changed, changed.action);
    assert_eq!(0, changed.counts.thumbs_up);
    assert_eq!(1, changed.counts.thumbs_down);
    assert_eq!(changed.counts, fixture.get_comment(&c2.id).unwrap().reactions);

    flows::delete_comment(&fixture.db_connections, c2.id.as_str(), "bob").unwrap();
    assert_eq!(0, fixture.get_comment(&c1.id).unwrap().reply_count);
    fixture.assert_reply_counts_are_consistent(&post.id);
}

#[test]
fn toggle_three_times() {
    let fixture = BackendFixture::new();
    let post = fixture.create_post(None);
    let target = ReactionTarget::post(post.id.clone());
    let actions: Vec<_> = (0..3)
        .map(|_| fixture.toggle(&target, "actor", "thumbs_up").unwrap())
        .collect();
    assert_eq!(
        vec![
            ToggleAction::Added,
            ToggleAction::Removed,
            ToggleAction::Added
        ],
        actions.iter().map(|t| t.action).collect::<Vec<_>>()
    );
    assert_eq!(None, actions[1].reaction);
    assert_eq!(1, fixture.get_post(&post.id).reactions.thumbs_up);
}

#[test]
fn reply_counts_stay_consistent() {
    let fixture = BackendFixture::new();
    let post = fixture.create_post(None);
    let mut comments = vec![fixture.create_comment(&post.id, None, "alice", "root")];
    // Build a small tree with a deterministic shape
    for i in 1..12 {
        let parent = &comments[(i * 7) % comments.len()];
        let reply = fixture.create_comment(&post.id, Some(&parent.id), "bob", &format!("{i}"));
        comments.push(reply);
    }
    for c in comments.iter().skip(3).step_by(4) {
        flows::delete_comment(&fixture.db_connections, c.id.as_str(), "bob").unwrap();
    }
    fixture.assert_reply_counts_are_consistent(&post.id);
}

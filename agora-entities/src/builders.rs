pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, post_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, reaction::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn post_id(mut self, id: &str) -> Self {
            self.comment.post_id = id.into();
            self
        }
        pub fn parent_id(mut self, id: Option<&str>) -> Self {
            self.comment.parent_id = id.map(Into::into);
            self
        }
        pub fn depth(mut self, depth: u8) -> Self {
            self.comment.depth = depth;
            self
        }
        pub fn author_id(mut self, id: &str) -> Self {
            self.comment.author_id = id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn reactions(mut self, thumbs_up: u64, thumbs_down: u64) -> Self {
            self.comment.reactions = ReactionCounts {
                thumbs_up,
                thumbs_down,
            };
            self
        }
        pub fn reply_count(mut self, count: u64) -> Self {
            self.comment.reply_count = count;
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.comment.created_at = at;
            self.comment.updated_at = at;
            self
        }
        pub fn deleted_at(mut self, at: Option<Timestamp>) -> Self {
            self.comment.deleted_at = at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            let now = Timestamp::now();
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    post_id: Id::new(),
                    parent_id: None,
                    depth: 0,
                    author_id: Id::new(),
                    text: "comment".into(),
                    reactions: Default::default(),
                    reply_count: 0,
                    created_at: now,
                    updated_at: now,
                    edited_at: None,
                    deleted_at: None,
                },
            }
        }
    }
}

pub mod post_builder {

    use super::*;
    use crate::{id::*, post::*, time::*};

    #[derive(Debug)]
    pub struct PostBuild {
        post: Post,
    }

    impl PostBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.post.id = id.into();
            self
        }
        pub fn community_id(mut self, id: Option<&str>) -> Self {
            self.post.community_id = id.map(Into::into);
            self
        }
        pub fn author_id(mut self, id: &str) -> Self {
            self.post.author_id = id.into();
            self
        }
        pub fn finish(self) -> Post {
            self.post
        }
    }

    impl Builder for Post {
        type Build = PostBuild;
        fn build() -> PostBuild {
            PostBuild {
                post: Post {
                    id: Id::new(),
                    community_id: None,
                    author_id: Id::new(),
                    created_at: Timestamp::now(),
                    comment_count: 0,
                    reactions: Default::default(),
                },
            }
        }
    }
}

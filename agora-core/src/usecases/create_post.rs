use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPost {
    pub community_id: Option<String>,
    pub author_id: String,
}

/// Registers a post so that it can be commented and reacted on.
pub fn create_post<R: PostRepo>(repo: &R, new_post: NewPost) -> Result<Post> {
    let NewPost {
        community_id,
        author_id,
    } = new_post;
    let post = Post {
        id: Id::new(),
        community_id: community_id.map(Id::from).filter(Id::is_valid),
        author_id: super::actor_id(&author_id)?,
        created_at: Timestamp::now(),
        comment_count: 0,
        reactions: Default::default(),
    };
    log::info!("Creating post {}", post.id);
    repo.create_post(&post)?;
    Ok(post)
}

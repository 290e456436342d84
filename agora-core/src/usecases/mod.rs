mod community;
mod create_comment;
mod create_post;
mod delete_comment;
mod error;
mod thread;
mod toggle_reaction;
mod update_comment;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    community::*,
    create_comment::*,
    create_post::*,
    delete_comment::*,
    error::{Error, ErrorKind},
    thread::*,
    toggle_reaction::*,
    update_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::moderation::ModerationGateway,
        repositories::{Error as RepoError, *},
        util::validate,
    };
}
use self::prelude::*;

pub fn get_comment<R: CommentRepo>(repo: &R, id: &str) -> Result<Comment> {
    Ok(repo.load_comment(id)?)
}

pub fn get_post<R: PostRepo>(repo: &R, id: &str) -> Result<Post> {
    Ok(repo.load_post(id)?)
}

fn actor_id(actor_id: &str) -> Result<Id> {
    let id = Id::from(actor_id);
    if !id.is_valid() {
        return Err(Error::Actor);
    }
    Ok(id)
}

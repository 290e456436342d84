use anyhow::Result as Fallible;

use crate::entities::{Id, ModerationPermissions};

/// Community roles, join requests and bans are managed by
/// a separate collaborator that is only asked for the
/// effective permissions of an actor.
pub trait ModerationGateway {
    fn can_moderate(&self, actor_id: &Id, community_id: &Id) -> Fallible<ModerationPermissions>;
}

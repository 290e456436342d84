use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumString};

use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CommunityRole {
    Member    = 0,
    Moderator = 1,
    Admin     = 2,
    Owner     = 3,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityMember {
    pub community_id : Id,
    pub user_id      : Id,
    pub role         : CommunityRole,
    pub banned       : bool,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModerationPermissions {
    pub can_delete_posts         : bool,
    pub can_ban_users            : bool,
    pub can_manage_roles         : bool,
    pub can_review_join_requests : bool,
}

impl ModerationPermissions {
    pub const fn none() -> Self {
        Self {
            can_delete_posts: false,
            can_ban_users: false,
            can_manage_roles: false,
            can_review_join_requests: false,
        }
    }
}

impl CommunityRole {
    pub const fn permissions(self) -> ModerationPermissions {
        use CommunityRole::*;
        match self {
            Member => ModerationPermissions::none(),
            Moderator => ModerationPermissions {
                can_delete_posts: true,
                can_ban_users: true,
                can_manage_roles: false,
                can_review_join_requests: true,
            },
            Admin | Owner => ModerationPermissions {
                can_delete_posts: true,
                can_ban_users: true,
                can_manage_roles: true,
                can_review_join_requests: true,
            },
        }
    }
}

impl CommunityMember {
    pub const fn permissions(&self) -> ModerationPermissions {
        if self.banned {
            return ModerationPermissions::none();
        }
        self.role.permissions()
    }
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use agora_entities::{
        comment::*, community::*, id::*, post::*, reaction::*, time::*,
    };
}

pub use self::repositories::Error as RepoError;

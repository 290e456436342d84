#[macro_use]
extern crate log;

mod community;
mod create_comment;
mod create_post;
mod delete_comment;
mod load_thread;
mod toggle_reaction;
mod update_comment;

pub mod prelude {
    pub use super::{
        community::*, create_comment::*, create_post::*, delete_comment::*, load_thread::*,
        toggle_reaction::*, update_comment::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use agora_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use agora_db_sqlite::Connections;
}

/// Runs a mutation again if it failed due to
/// a concurrent modification of a counter.
///
/// Only a single retry is attempted, afterwards
/// the conflict is reported to the caller.
fn retry_on_conflict<T>(what: &str, mut mutate: impl FnMut() -> Result<T>) -> Result<T> {
    match mutate() {
        Err(err) if err.kind() == usecases::ErrorKind::Conflict => {
            debug!("Retrying {what} after conflict: {err}");
            mutate()
        }
        res => res,
    }
}

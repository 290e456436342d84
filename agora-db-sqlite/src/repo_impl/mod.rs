// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::{FromPrimitive, ToPrimitive};

use agora_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;
mod community;
mod post;
mod reaction;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_reaction_counts(thumbs_up_count: i64, thumbs_down_count: i64) -> ReactionCounts {
    ReactionCounts {
        thumbs_up: thumbs_up_count as u64,
        thumbs_down: thumbs_down_count as u64,
    }
}

fn load_reaction_kind(value: i16) -> Result<ReactionKind> {
    ReactionKind::from_i16(value).ok_or_else(|| anyhow!("Invalid reaction value: {value}").into())
}

fn load_target_type(value: i16) -> Result<TargetType> {
    TargetType::from_i16(value).ok_or_else(|| anyhow!("Invalid reaction target: {value}").into())
}

fn reaction_kind_primitive(kind: ReactionKind) -> Result<i16> {
    kind.to_i16()
        .ok_or_else(|| anyhow!("Unsupported reaction value: {kind}").into())
}

fn target_type_primitive(target_type: TargetType) -> Result<i16> {
    target_type
        .to_i16()
        .ok_or_else(|| anyhow!("Unsupported reaction target: {target_type}").into())
}

fn pagination_bounds(pagination: &Pagination) -> Result<(Option<i64>, Option<i64>)> {
    let offset = i64::try_from(pagination.offset.unwrap_or(0))
        .map_err(|_| anyhow!("Offset out of range: {:?}", pagination.offset))?;
    let limit = pagination
        .limit
        .map(i64::try_from)
        .transpose()
        .map_err(|_| anyhow!("Limit out of range: {:?}", pagination.limit))?;
    // SQLite does not support an OFFSET without a LIMIT
    // <https://www.sqlite.org/lang_select.html>
    Ok(match limit {
        Some(limit) => (Some(limit), (offset > 0).then_some(offset)),
        None if offset > 0 => (Some(i64::MAX), Some(offset)),
        None => (None, None),
    })
}

/// Checks if an update that didn't affect any rows missed
/// an existing object or failed an additional filter condition.
fn missing_or_conflict(exists: bool, what: &str, id: &str) -> repo::Error {
    if exists {
        log::debug!("Concurrent modification of {what} {id}");
        repo::Error::Conflict
    } else {
        repo::Error::NotFound
    }
}

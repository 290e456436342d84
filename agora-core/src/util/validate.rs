use thiserror::Error;

use crate::repositories::Pagination;

pub const MAX_COMMENT_LEN: usize = 10_000;

pub const DEFAULT_PAGE_LIMIT: u64 = 20;
pub const MAX_PAGE_LIMIT: u64 = 100;
// Offsets are passed to the database as signed 64-bit integers
pub const MAX_PAGE_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentInvalidation {
    #[error("Empty comment")]
    Empty,
    #[error("The comment exceeds {} characters", MAX_COMMENT_LEN)]
    TooLong,
}

/// Returns the trimmed text of a new or edited comment.
pub fn comment_text(text: &str) -> Result<&str, CommentInvalidation> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommentInvalidation::Empty);
    }
    if text.chars().count() > MAX_COMMENT_LEN {
        return Err(CommentInvalidation::TooLong);
    }
    Ok(text)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationInvalidation {
    #[error("The limit must be between 1 and {}", MAX_PAGE_LIMIT)]
    Limit,
    #[error("The offset must not exceed {}", MAX_PAGE_OFFSET)]
    Offset,
}

/// Resolves the defaults of a pagination request into `(offset, limit)`.
pub fn pagination(pagination: &Pagination) -> Result<(u64, u64), PaginationInvalidation> {
    let offset = pagination.offset.unwrap_or_default();
    let limit = pagination.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if limit == 0 || limit > MAX_PAGE_LIMIT {
        return Err(PaginationInvalidation::Limit);
    }
    if offset > MAX_PAGE_OFFSET {
        return Err(PaginationInvalidation::Offset);
    }
    Ok((offset, limit))
}

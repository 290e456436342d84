use crate::{
    repositories,
    util::validate::{CommentInvalidation, PaginationInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("The comment is too long")]
    CommentTooLong,
    #[error("Missing actor")]
    Actor,
    #[error("Unknown reaction type '{0}'")]
    ReactionType(String),
    #[error("Unknown reaction target '{0}'")]
    TargetType(String),
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Invalid offset")]
    InvalidOffset,
    #[error("The parent comment does not exist")]
    ParentNotFound,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Coarse classification of errors for callers that
/// need to map them onto a transport, e.g. HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Forbidden,
    Conflict,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use repositories::Error as RepoError;
        match self {
            Self::EmptyComment
            | Self::CommentTooLong
            | Self::Actor
            | Self::ReactionType(_)
            | Self::TargetType(_)
            | Self::InvalidLimit
            | Self::InvalidOffset => ErrorKind::Validation,
            Self::ParentNotFound | Self::Repo(RepoError::NotFound) => ErrorKind::NotFound,
            Self::Forbidden => ErrorKind::Forbidden,
            Self::Repo(RepoError::Conflict | RepoError::AlreadyExists) => ErrorKind::Conflict,
            Self::Repo(RepoError::Other(_)) => ErrorKind::Internal,
        }
    }
}

impl From<CommentInvalidation> for Error {
    fn from(err: CommentInvalidation) -> Self {
        match err {
            CommentInvalidation::Empty => Self::EmptyComment,
            CommentInvalidation::TooLong => Self::CommentTooLong,
        }
    }
}

impl From<PaginationInvalidation> for Error {
    fn from(err: PaginationInvalidation) -> Self {
        match err {
            PaginationInvalidation::Limit => Self::InvalidLimit,
            PaginationInvalidation::Offset => Self::InvalidOffset,
        }
    }
}

impl From<agora_entities::reaction::CounterUnderflow> for Error {
    fn from(err: agora_entities::reaction::CounterUnderflow) -> Self {
        log::error!("Inconsistent reaction counters: {err}");
        Self::Repo(repositories::Error::Other(err.into()))
    }
}

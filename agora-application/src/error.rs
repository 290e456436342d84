use agora_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use agora_core::{repositories, usecases::ErrorKind};

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Business(BError::Parameter(err)) => err.kind(),
            Self::Business(BError::Repo(err)) => match err {
                RepoError::NotFound => ErrorKind::NotFound,
                RepoError::AlreadyExists | RepoError::Conflict => ErrorKind::Conflict,
                RepoError::Other(_) => ErrorKind::Internal,
            },
            Self::Other(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }
}

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    StoreError(#[from] eventide_store::StoreError),

    #[error(transparent)]
    CoreError(#[from] eventide_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

//! Engine-level error type.

use shop_core::ShopError;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The dataset's roster is empty, so there is nothing to display.
    #[error("dataset has no brands to display")]
    EmptyRoster,

    /// Brand-name resolution or another core-level failure.
    #[error(transparent)]
    Core(#[from] ShopError),
}

//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `ShopError` via `From` impls, or keep them separate and wrap `ShopError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.  Errors only arise at construction and output
//! boundaries; nothing inside a tick is a failure path.

use thiserror::Error;

/// The top-level error type for `shop-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("unknown brand {0:?}")]
    UnknownBrand(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `shop-*` crates.
pub type ShopResult<T> = Result<T, ShopError>;

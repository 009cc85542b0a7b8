//! Fatal pipeline errors.
//!
//! These abort the run. Everything recoverable goes through
//! [`crate::diagnostics`] instead.

use colorway_api::ApiError;
use thiserror::Error;

use crate::token::TokenName;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file's catalog contains no exportable styles of the requested
    /// kind. Usually the file key is wrong or nothing is published.
    #[error("no exportable styles found in the file")]
    StylesNotFound,

    /// Talking to the API failed.
    #[error(transparent)]
    Transport(#[from] ApiError),

    /// After stripping the dark suffix, two dark tokens collapsed onto the
    /// same name. The document is ambiguous and the export cannot pick one.
    #[error("duplicate dark token name `{name}` after suffix strip")]
    DuplicateDarkName { name: TokenName },
}

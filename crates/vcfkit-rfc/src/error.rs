use thiserror::Error;

use crate::rfc::vcard::{DecodeError, ValidationError};

/// vCard decoding and generation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] vcfkit_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;

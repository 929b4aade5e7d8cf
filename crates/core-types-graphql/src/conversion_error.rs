use core_types::RelatedError;
use core_types::UnsupportedError;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum ConversionError {
    #[error("Invalid document type \"{kind}\"")]
    InvalidRoot {
        kind: String,
    },

    #[error("Error parsing GraphQL source: {0}")]
    Parse(#[from] RelatedError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedError),

    #[error("core-types version {version} is not supported")]
    UnsupportedVersion {
        version: u32,
    },
}

use crate::ErrorMeta;
use crate::Location;
use std::sync::Arc;
use thiserror::Error;

/// Wraps an error raised by some other library (e.g. a parser) together with
/// the source text and the source-relative location it refers to.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct RelatedError {
    message: String,
    meta: ErrorMeta,
    #[source]
    cause: Arc<dyn std::error::Error + Send + Sync>,
}
impl RelatedError {
    pub fn new(
        cause: impl std::error::Error + Send + Sync + 'static,
        source: impl AsRef<str>,
        loc: Location,
    ) -> Self {
        Self {
            message: cause.to_string(),
            meta: ErrorMeta {
                loc: Some(loc),
                source: Some(source.as_ref().to_string()),
                ..ErrorMeta::default()
            },
            cause: Arc::new(cause),
        }
    }

    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    pub fn loc(&self) -> Option<&Location> {
        self.meta.loc.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn meta(&self) -> &ErrorMeta {
        &self.meta
    }
}

use crate::ErrorMeta;
use crate::Location;
use crate::NodePath;
use crate::NodeType;
use thiserror::Error;

/// Raised when a construct cannot be represented in the conversion target.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct UnsupportedError {
    message: String,
    meta: ErrorMeta,
}
impl UnsupportedError {
    pub fn new(message: impl AsRef<str>, meta: ErrorMeta) -> Self {
        Self {
            message: message.as_ref().to_string(),
            meta,
        }
    }

    /// Build an error concerning `node`, capturing a copy of the node and its
    /// location.
    pub fn for_node(
        message: impl AsRef<str>,
        node: &NodeType,
        path: Option<NodePath>,
    ) -> Self {
        Self::new(message, ErrorMeta {
            blob: Some(Box::new(node.to_owned())),
            loc: node.loc.to_owned(),
            path,
            source: None,
        })
    }

    pub fn blob(&self) -> Option<&NodeType> {
        self.meta.blob.as_deref()
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

    pub fn path(&self) -> Option<&NodePath> {
        self.meta.path.as_ref()
    }
}

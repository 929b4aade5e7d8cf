use crate::Location;
use crate::NodeType;

/// A path from the root of a document to some node within it.
pub type NodePath = Vec<PathSegment>;

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Key(key) => write!(f, ".{key}"),
        }
    }
}

/// Context attached to errors raised while handling core types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorMeta {
    /// The offending node, when the error concerns a core-types node.
    pub blob: Option<Box<NodeType>>,
    pub path: Option<NodePath>,
    /// The full source text the error location refers to.
    pub source: Option<String>,
    pub loc: Option<Location>,
}

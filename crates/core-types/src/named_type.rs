use crate::NodeType;

/// A [`NodeType`] declared at the top level of a
/// [`NodeDocument`](crate::NodeDocument) under a unique name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedType {
    pub name: String,

    #[serde(flatten)]
    pub node: NodeType,
}
impl NamedType {
    pub fn new(name: impl AsRef<str>, node: impl Into<NodeType>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            node: node.into(),
        }
    }
}

use crate::Annotations;
use crate::Location;
use crate::NodeKind;

/// A core type: a [`NodeKind`] along with its [`Annotations`] and an optional
/// source [`Location`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NodeType {
    #[serde(flatten)]
    pub kind: NodeKind,

    #[serde(flatten)]
    pub annotations: Annotations,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
impl NodeType {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            annotations: Annotations::default(),
            loc: None,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_loc(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, NodeKind::Null)
    }

    /// Recursively drop the source location of this node and every node
    /// nested within it.
    pub fn clear_locations(&mut self) {
        self.loc = None;
        match &mut self.kind {
            NodeKind::Array { element_type } => element_type.clear_locations(),
            NodeKind::Tuple { element_types } =>
                element_types.iter_mut().for_each(Self::clear_locations),
            NodeKind::Object { properties, .. } =>
                properties.values_mut().for_each(|prop| prop.node.clear_locations()),
            NodeKind::Or { or } => or.iter_mut().for_each(Self::clear_locations),
            NodeKind::Boolean
            | NodeKind::Integer
            | NodeKind::Number
            | NodeKind::String { .. }
            | NodeKind::Null
            | NodeKind::Ref { .. }
                => (),
        }
    }
}
impl std::convert::From<NodeKind> for NodeType {
    fn from(value: NodeKind) -> Self {
        Self::new(value)
    }
}

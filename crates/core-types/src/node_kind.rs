use crate::NodeType;
use indexmap::IndexMap;

/// The shape of a [`NodeType`].
///
/// Serialized as an internally-tagged enum keyed by `"type"`, so a node reads
/// like `{ "type": "array", "elementType": { "type": "string" } }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Boolean,
    Integer,
    Number,
    String {
        #[serde(
            default,
            rename = "enum",
            skip_serializing_if = "Option::is_none"
        )]
        enum_values: Option<Vec<String>>,
    },
    Null,
    Array {
        #[serde(rename = "elementType")]
        element_type: Box<NodeType>,
    },
    Tuple {
        #[serde(rename = "elementTypes")]
        element_types: Vec<NodeType>,
    },
    Object {
        properties: IndexMap<String, ObjectProperty>,

        #[serde(default, rename = "additionalProperties")]
        additional_properties: bool,
    },
    Or {
        or: Vec<NodeType>,
    },
    Ref {
        #[serde(rename = "ref")]
        reference: String,
    },
}
impl NodeKind {
    /// A plain `string` with no `enum` constraint.
    pub fn string() -> Self {
        Self::String { enum_values: None }
    }

    /// The `"type"` tag this kind serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String { .. } => "string",
            Self::Null => "null",
            Self::Array { .. } => "array",
            Self::Tuple { .. } => "tuple",
            Self::Object { .. } => "object",
            Self::Or { .. } => "or",
            Self::Ref { .. } => "ref",
        }
    }
}

/// A single property of an `object` node.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectProperty {
    pub node: NodeType,
    pub required: bool,
}

use crate::NamedType;

/// A versioned, ordered list of [`NamedType`] declarations.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NodeDocument {
    pub version: u32,
    pub types: Vec<NamedType>,
}
impl NodeDocument {
    /// The only document version the model currently defines.
    pub const VERSION: u32 = 1;

    pub fn new(types: Vec<NamedType>) -> Self {
        Self {
            version: Self::VERSION,
            types,
        }
    }

    pub fn clear_locations(&mut self) {
        for named_type in &mut self.types {
            named_type.node.clear_locations();
        }
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter()
            .map(|named_type| named_type.name.as_str())
            .collect()
    }
}

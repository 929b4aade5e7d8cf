mod annotations;
mod conversion_result;
mod error_meta;
mod location;
mod named_type;
mod node_document;
mod node_kind;
mod node_type;
mod related_error;
mod unsupported_error;

pub use annotations::Annotations;
pub use annotations::Examples;
pub use conversion_result::ConversionResult;
pub use error_meta::ErrorMeta;
pub use error_meta::NodePath;
pub use error_meta::PathSegment;
pub use location::LineColumn;
pub use location::Location;
pub use location::Position;
pub use named_type::NamedType;
pub use node_document::NodeDocument;
pub use node_kind::NodeKind;
pub use node_kind::ObjectProperty;
pub use node_type::NodeType;
pub use related_error::RelatedError;
pub use unsupported_error::UnsupportedError;

#[cfg(test)]
mod tests;

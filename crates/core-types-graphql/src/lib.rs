//! Conversion between [core-types](core_types) documents and GraphQL SDL.
//!
//! [`convert_core_types_to_graphql`] turns a [`core_types::NodeDocument`]
//! into SDL text (or, via [`convert_core_types_to_graphql_ast`], into a
//! `graphql_parser` schema AST). [`convert_graphql_to_core_types`] goes the
//! other way. Annotations (descriptions, examples, defaults) travel through
//! GraphQL descriptions using the layout implemented in [`annotation`].

pub mod annotation;
pub mod ast;
mod conversion_error;
mod core_types_to_graphql;
mod gql_utils;
mod graphql_to_core_types;
mod name_generator;
mod options;
mod schema_changes;
pub mod source_location;

pub use conversion_error::ConversionError;
pub use core_types_to_graphql::convert_core_types_to_graphql;
pub use core_types_to_graphql::convert_core_types_to_graphql_ast;
pub use graphql_to_core_types::convert_graphql_to_core_types;
pub use graphql_to_core_types::get_graphql_ast;
pub use name_generator::DefaultNameGenerator;
pub use name_generator::NameGenerator;
pub use options::CoreTypesToGraphqlOptions;
pub use options::GraphqlToCoreTypesOptions;
pub use options::ParseUnsupportedPolicyError;
pub use options::UnsupportedPolicy;
pub use options::WarnFn;
pub use schema_changes::get_breaking_changes;
pub use schema_changes::get_dangerous_changes;
pub use schema_changes::BreakingChange;
pub use schema_changes::BreakingChangeType;
pub use schema_changes::DangerousChange;
pub use schema_changes::DangerousChangeType;
pub use schema_changes::SchemaChange;

#[cfg(test)]
mod tests;

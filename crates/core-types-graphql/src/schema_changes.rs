//! Detection of breaking and dangerous changes between two versions of a
//! GraphQL schema.
//!
//! Only type definitions are compared. Directive definitions, schema
//! definitions and type extensions are ignored, as are changes to default
//! values and directives.

use crate::ast;
use crate::get_graphql_ast;
use crate::gql_utils::type_to_string;
use crate::ConversionError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ConversionError>;

/// A single detected change along with a human-readable description of it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SchemaChange<K> {
    #[serde(rename = "type")]
    pub kind: K,
    pub description: String,
}

pub type BreakingChange = SchemaChange<BreakingChangeType>;
pub type DangerousChange = SchemaChange<DangerousChangeType>;

/// Changes which break clients of the old schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakingChangeType {
    ArgChangedKind,
    ArgRemoved,
    FieldChangedKind,
    FieldRemoved,
    InterfaceRemovedFromObject,
    RequiredArgAdded,
    RequiredInputFieldAdded,
    TypeChangedKind,
    TypeRemoved,
    TypeRemovedFromUnion,
    ValueRemovedFromEnum,
}

/// Changes which don't break clients outright but may change how existing
/// queries behave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DangerousChangeType {
    InterfaceAddedToObject,
    OptionalArgAdded,
    OptionalInputFieldAdded,
    TypeAddedToUnion,
    ValueAddedToEnum,
}

/// Parse both SDL documents and list the changes from `from_sdl` to `to_sdl`
/// which break existing clients.
pub fn get_breaking_changes(from_sdl: &str, to_sdl: &str) -> Result<Vec<BreakingChange>> {
    Ok(find_schema_changes(from_sdl, to_sdl)?.breaking)
}

/// Parse both SDL documents and list the changes from `from_sdl` to `to_sdl`
/// which are potentially dangerous for existing clients.
pub fn get_dangerous_changes(from_sdl: &str, to_sdl: &str) -> Result<Vec<DangerousChange>> {
    Ok(find_schema_changes(from_sdl, to_sdl)?.dangerous)
}

fn find_schema_changes(from_sdl: &str, to_sdl: &str) -> Result<SchemaChanges> {
    let old_doc = get_graphql_ast(from_sdl)?;
    let new_doc = get_graphql_ast(to_sdl)?;

    let mut changes = SchemaChanges::default();
    changes.compare_types(&type_defs(&old_doc), &type_defs(&new_doc));
    log::debug!(
        "Found {} breaking and {} dangerous schema changes.",
        changes.breaking.len(),
        changes.dangerous.len(),
    );
    Ok(changes)
}

fn type_defs(doc: &ast::schema::Document) -> IndexMap<&str, &ast::schema::TypeDefinition> {
    doc.definitions.iter()
        .filter_map(|def| match def {
            ast::schema::Definition::TypeDefinition(type_def) =>
                Some((type_def_name(type_def), type_def)),
            _ => None,
        })
        .collect()
}

fn type_def_name(type_def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition as T;
    match type_def {
        T::Scalar(def) => def.name.as_str(),
        T::Object(def) => def.name.as_str(),
        T::Interface(def) => def.name.as_str(),
        T::Union(def) => def.name.as_str(),
        T::Enum(def) => def.name.as_str(),
        T::InputObject(def) => def.name.as_str(),
    }
}

fn type_kind_description(type_def: &ast::schema::TypeDefinition) -> &'static str {
    use ast::schema::TypeDefinition as T;
    match type_def {
        T::Scalar(_) => "a Scalar type",
        T::Object(_) => "an Object type",
        T::Interface(_) => "an Interface type",
        T::Union(_) => "a Union type",
        T::Enum(_) => "an Enum type",
        T::InputObject(_) => "an Input type",
    }
}

/// Items present only in `old`, and items present only in `new`.
fn diff_names<'a>(
    old: impl IntoIterator<Item = &'a str>,
    new: impl IntoIterator<Item = &'a str>,
) -> (Vec<&'a str>, Vec<&'a str>) {
    let old = old.into_iter().collect::<Vec<_>>();
    let new = new.into_iter().collect::<Vec<_>>();
    let removed = old.iter().copied().filter(|name| !new.contains(name)).collect();
    let added = new.iter().copied().filter(|name| !old.contains(name)).collect();
    (removed, added)
}

/// Whether values of `new_type` can be returned where clients expect
/// `old_type` from an output field.
fn is_safe_output_type_change(old_type: &ast::schema::Type, new_type: &ast::schema::Type) -> bool {
    use ast::schema::Type as T;
    match (old_type, new_type) {
        (T::ListType(old_item), T::ListType(new_item)) =>
            is_safe_output_type_change(old_item, new_item),
        (T::ListType(_), T::NonNullType(new_inner)) =>
            is_safe_output_type_change(old_type, new_inner),
        (T::ListType(_), _) => false,

        (T::NonNullType(old_inner), T::NonNullType(new_inner)) =>
            is_safe_output_type_change(old_inner, new_inner),
        (T::NonNullType(_), _) => false,

        (T::NamedType(old_name), T::NamedType(new_name)) => old_name == new_name,
        (T::NamedType(_), T::NonNullType(new_inner)) =>
            is_safe_output_type_change(old_type, new_inner),
        (T::NamedType(_), T::ListType(_)) => false,
    }
}

/// Whether values clients send for `old_type` are still accepted as
/// `new_type` by an input field or argument.
fn is_safe_input_type_change(old_type: &ast::schema::Type, new_type: &ast::schema::Type) -> bool {
    use ast::schema::Type as T;
    match (old_type, new_type) {
        (T::ListType(old_item), T::ListType(new_item)) =>
            is_safe_input_type_change(old_item, new_item),
        (T::ListType(_), _) => false,

        (T::NonNullType(old_inner), T::NonNullType(new_inner)) =>
            is_safe_input_type_change(old_inner, new_inner),
        (T::NonNullType(old_inner), _) =>
            is_safe_input_type_change(old_inner, new_type),

        (T::NamedType(old_name), T::NamedType(new_name)) => old_name == new_name,
        (T::NamedType(_), _) => false,
    }
}

fn is_required_input(input: &ast::schema::InputValue) -> bool {
    matches!(input.value_type, ast::schema::Type::NonNullType(_))
        && input.default_value.is_none()
}

#[derive(Debug, Default)]
struct SchemaChanges {
    breaking: Vec<BreakingChange>,
    dangerous: Vec<DangerousChange>,
}
impl SchemaChanges {
    fn breaking(&mut self, kind: BreakingChangeType, description: String) {
        self.breaking.push(SchemaChange { kind, description });
    }

    fn dangerous(&mut self, kind: DangerousChangeType, description: String) {
        self.dangerous.push(SchemaChange { kind, description });
    }

    fn compare_types(
        &mut self,
        old_types: &IndexMap<&str, &ast::schema::TypeDefinition>,
        new_types: &IndexMap<&str, &ast::schema::TypeDefinition>,
    ) {
        use ast::schema::TypeDefinition as T;

        for (name, old_type) in old_types {
            let Some(new_type) = new_types.get(name) else {
                self.breaking(
                    BreakingChangeType::TypeRemoved,
                    format!("{name} was removed."),
                );
                continue;
            };

            match (old_type, new_type) {
                (T::Enum(old_enum), T::Enum(new_enum)) =>
                    self.compare_enums(old_enum, new_enum),
                (T::Union(old_union), T::Union(new_union)) =>
                    self.compare_unions(old_union, new_union),
                (T::InputObject(old_input), T::InputObject(new_input)) =>
                    self.compare_input_fields(
                        name,
                        &old_input.fields,
                        &new_input.fields,
                    ),
                (T::Object(old_obj), T::Object(new_obj)) => {
                    self.compare_fields(name, &old_obj.fields, &new_obj.fields);
                    self.compare_interfaces(
                        name,
                        &old_obj.implements_interfaces,
                        &new_obj.implements_interfaces,
                    );
                },
                (T::Interface(old_iface), T::Interface(new_iface)) => {
                    self.compare_fields(name, &old_iface.fields, &new_iface.fields);
                    self.compare_interfaces(
                        name,
                        &old_iface.implements_interfaces,
                        &new_iface.implements_interfaces,
                    );
                },
                (T::Scalar(_), T::Scalar(_)) => (),
                _ => self.breaking(
                    BreakingChangeType::TypeChangedKind,
                    format!(
                        "{name} changed from {} to {}.",
                        type_kind_description(old_type),
                        type_kind_description(new_type),
                    ),
                ),
            }
        }
    }

    fn compare_enums(
        &mut self,
        old_enum: &ast::schema::EnumType,
        new_enum: &ast::schema::EnumType,
    ) {
        let (removed, added) = diff_names(
            old_enum.values.iter().map(|value| value.name.as_str()),
            new_enum.values.iter().map(|value| value.name.as_str()),
        );
        let enum_name = &old_enum.name;
        for value in removed {
            self.breaking(
                BreakingChangeType::ValueRemovedFromEnum,
                format!("{value} was removed from enum type {enum_name}."),
            );
        }
        for value in added {
            self.dangerous(
                DangerousChangeType::ValueAddedToEnum,
                format!("{value} was added to enum type {enum_name}."),
            );
        }
    }

    fn compare_unions(
        &mut self,
        old_union: &ast::schema::UnionType,
        new_union: &ast::schema::UnionType,
    ) {
        let (removed, added) = diff_names(
            old_union.types.iter().map(String::as_str),
            new_union.types.iter().map(String::as_str),
        );
        let union_name = &old_union.name;
        for member in removed {
            self.breaking(
                BreakingChangeType::TypeRemovedFromUnion,
                format!("{member} was removed from union type {union_name}."),
            );
        }
        for member in added {
            self.dangerous(
                DangerousChangeType::TypeAddedToUnion,
                format!("{member} was added to union type {union_name}."),
            );
        }
    }

    fn compare_interfaces(
        &mut self,
        type_name: &str,
        old_interfaces: &[String],
        new_interfaces: &[String],
    ) {
        let (removed, added) = diff_names(
            old_interfaces.iter().map(String::as_str),
            new_interfaces.iter().map(String::as_str),
        );
        for iface in removed {
            self.breaking(
                BreakingChangeType::InterfaceRemovedFromObject,
                format!("{type_name} no longer implements interface {iface}."),
            );
        }
        for iface in added {
            self.dangerous(
                DangerousChangeType::InterfaceAddedToObject,
                format!("{iface} added to interfaces implemented by {type_name}."),
            );
        }
    }

    fn compare_input_fields(
        &mut self,
        type_name: &str,
        old_fields: &[ast::schema::InputValue],
        new_fields: &[ast::schema::InputValue],
    ) {
        for old_field in old_fields {
            let field_name = &old_field.name;
            match new_fields.iter().find(|field| &field.name == field_name) {
                None => self.breaking(
                    BreakingChangeType::FieldRemoved,
                    format!("{type_name}.{field_name} was removed."),
                ),
                Some(new_field) => {
                    if !is_safe_input_type_change(&old_field.value_type, &new_field.value_type) {
                        self.breaking(
                            BreakingChangeType::FieldChangedKind,
                            format!(
                                "{type_name}.{field_name} changed type from {} to {}.",
                                type_to_string(&old_field.value_type),
                                type_to_string(&new_field.value_type),
                            ),
                        );
                    }
                },
            }
        }

        for new_field in new_fields {
            if old_fields.iter().any(|field| field.name == new_field.name) {
                continue;
            }
            let field_name = &new_field.name;
            if is_required_input(new_field) {
                self.breaking(
                    BreakingChangeType::RequiredInputFieldAdded,
                    format!("A required field {field_name} on input type {type_name} was added."),
                );
            } else {
                self.dangerous(
                    DangerousChangeType::OptionalInputFieldAdded,
                    format!("An optional field {field_name} on input type {type_name} was added."),
                );
            }
        }
    }

    fn compare_fields(
        &mut self,
        type_name: &str,
        old_fields: &[ast::schema::Field],
        new_fields: &[ast::schema::Field],
    ) {
        for old_field in old_fields {
            let field_name = &old_field.name;
            let Some(new_field) = new_fields.iter().find(|field| &field.name == field_name) else {
                self.breaking(
                    BreakingChangeType::FieldRemoved,
                    format!("{type_name}.{field_name} was removed."),
                );
                continue;
            };

            self.compare_args(
                &format!("{type_name}.{field_name}"),
                &old_field.arguments,
                &new_field.arguments,
            );

            if !is_safe_output_type_change(&old_field.field_type, &new_field.field_type) {
                self.breaking(
                    BreakingChangeType::FieldChangedKind,
                    format!(
                        "{type_name}.{field_name} changed type from {} to {}.",
                        type_to_string(&old_field.field_type),
                        type_to_string(&new_field.field_type),
                    ),
                );
            }
        }
    }

    fn compare_args(
        &mut self,
        field_path: &str,
        old_args: &[ast::schema::InputValue],
        new_args: &[ast::schema::InputValue],
    ) {
        for old_arg in old_args {
            let arg_name = &old_arg.name;
            match new_args.iter().find(|arg| &arg.name == arg_name) {
                None => self.breaking(
                    BreakingChangeType::ArgRemoved,
                    format!("{field_path} arg {arg_name} was removed."),
                ),
                Some(new_arg) => {
                    if !is_safe_input_type_change(&old_arg.value_type, &new_arg.value_type) {
                        self.breaking(
                            BreakingChangeType::ArgChangedKind,
                            format!(
                                "{field_path} arg {arg_name} has changed type from {} to {}.",
                                type_to_string(&old_arg.value_type),
                                type_to_string(&new_arg.value_type),
                            ),
                        );
                    }
                },
            }
        }

        for new_arg in new_args {
            if old_args.iter().any(|arg| arg.name == new_arg.name) {
                continue;
            }
            let arg_name = &new_arg.name;
            if is_required_input(new_arg) {
                self.breaking(
                    BreakingChangeType::RequiredArgAdded,
                    format!("A required arg {arg_name} on {field_path} was added."),
                );
            } else {
                self.dangerous(
                    DangerousChangeType::OptionalArgAdded,
                    format!("An optional arg {arg_name} on {field_path} was added."),
                );
            }
        }
    }
}

use crate::annotation::parse_description;
use crate::ast;
use crate::gql_utils::gql_strip_required;
use crate::gql_utils::is_required;
use crate::options::default_warn;
use crate::source_location::gql_locations_to_core_types_location;
use crate::source_location::parse_error_locations;
use crate::source_location::pos_to_location;
use crate::ConversionError;
use crate::GraphqlToCoreTypesOptions;
use crate::UnsupportedPolicy;
use core_types::Annotations;
use core_types::ConversionResult;
use core_types::ErrorMeta;
use core_types::NamedType;
use core_types::NodeDocument;
use core_types::NodeKind;
use core_types::NodeType;
use core_types::ObjectProperty;
use core_types::PathSegment;
use core_types::RelatedError;
use core_types::UnsupportedError;
use graphql_parser::schema::Definition;
use graphql_parser::schema::TypeDefinition;
use graphql_parser::schema::TypeExtension;

type Result<T> = std::result::Result<T, ConversionError>;

/// Parse GraphQL SDL into a schema AST.
///
/// Parse failures are reported as [`ConversionError::Parse`] carrying the
/// source-relative location of the failure. Text which isn't a schema
/// document but is a valid executable document (queries, fragments) fails
/// with [`ConversionError::InvalidRoot`].
pub fn get_graphql_ast(source: &str) -> Result<ast::schema::Document> {
    match graphql_parser::schema::parse_schema::<String>(source) {
        Ok(doc) => Ok(doc.into_static()),
        Err(err) => {
            if graphql_parser::query::parse_query::<String>(source).is_ok() {
                return Err(ConversionError::InvalidRoot {
                    kind: "ExecutableDocument".to_string(),
                });
            }
            let loc = gql_locations_to_core_types_location(
                source,
                &parse_error_locations(&err),
            );
            Err(ConversionError::Parse(RelatedError::new(err, source, loc)))
        },
    }
}

/// Convert GraphQL SDL into a core-types document.
///
/// Unions, object types and enums are converted. Every other kind of
/// definition is handled according to `options.unsupported`.
pub fn convert_graphql_to_core_types(
    source: &str,
    options: &GraphqlToCoreTypesOptions,
) -> Result<ConversionResult<NodeDocument>> {
    let document = get_graphql_ast(source)?;

    let mut types = vec![];
    let mut not_converted_types = vec![];

    for (index, definition) in document.definitions.iter().enumerate() {
        let type_def = match definition {
            Definition::TypeDefinition(TypeDefinition::Union(union_type)) =>
                parse_union_type(source, union_type),
            Definition::TypeDefinition(TypeDefinition::Object(object_type)) =>
                Some(parse_object_type(source, object_type)),
            Definition::TypeDefinition(TypeDefinition::Enum(enum_type)) =>
                Some(parse_enum_type(source, enum_type)),
            _ => {
                let (kind, name, position) = describe_definition(definition);
                if let Some(name) = name {
                    not_converted_types.push(name.to_string());
                }
                handle_unsupported(options, source, index, kind, position)?;
                continue;
            },
        };

        match type_def {
            Some(named_type) => {
                log::debug!("Converted `{}` to a core type.", named_type.name);
                types.push(named_type);
            },
            None => {
                let (_, name, _) = describe_definition(definition);
                if let Some(name) = name {
                    log::debug!("Did not convert `{name}`.");
                    not_converted_types.push(name.to_string());
                }
            },
        }
    }

    let converted_types =
        types.iter()
            .map(|named_type| named_type.name.to_string())
            .collect();

    Ok(ConversionResult {
        data: NodeDocument::new(types),
        converted_types,
        not_converted_types,
    })
}

fn handle_unsupported(
    options: &GraphqlToCoreTypesOptions,
    source: &str,
    index: usize,
    kind: &str,
    position: ast::Pos,
) -> Result<()> {
    if options.unsupported == UnsupportedPolicy::Ignore {
        return Ok(());
    }

    let message = format!("GraphQL kind {kind} not supported");
    let err = UnsupportedError::new(&message, ErrorMeta {
        blob: None,
        path: Some(vec![PathSegment::Index(index)]),
        source: Some(source.to_string()),
        loc: Some(pos_to_location(source, position)),
    });
    if options.unsupported == UnsupportedPolicy::Error {
        return Err(err.into());
    }

    match &options.warn {
        Some(warn) => warn(&message, &err),
        None => default_warn(&message, &err),
    }
    Ok(())
}

/// The GraphQL `Kind` name, the declared name (if any) and the position of a
/// definition.
fn describe_definition(definition: &ast::schema::Definition) -> (&'static str, Option<&str>, ast::Pos) {
    match definition {
        Definition::SchemaDefinition(def) =>
            ("SchemaDefinition", None, def.position),
        Definition::DirectiveDefinition(def) =>
            ("DirectiveDefinition", Some(def.name.as_str()), def.position),
        Definition::TypeDefinition(type_def) => match type_def {
            TypeDefinition::Scalar(def) =>
                ("ScalarTypeDefinition", Some(def.name.as_str()), def.position),
            TypeDefinition::Object(def) =>
                ("ObjectTypeDefinition", Some(def.name.as_str()), def.position),
            TypeDefinition::Interface(def) =>
                ("InterfaceTypeDefinition", Some(def.name.as_str()), def.position),
            TypeDefinition::Union(def) =>
                ("UnionTypeDefinition", Some(def.name.as_str()), def.position),
            TypeDefinition::Enum(def) =>
                ("EnumTypeDefinition", Some(def.name.as_str()), def.position),
            TypeDefinition::InputObject(def) =>
                ("InputObjectTypeDefinition", Some(def.name.as_str()), def.position),
        },
        Definition::TypeExtension(type_ext) => match type_ext {
            TypeExtension::Scalar(ext) =>
                ("ScalarTypeExtension", Some(ext.name.as_str()), ext.position),
            TypeExtension::Object(ext) =>
                ("ObjectTypeExtension", Some(ext.name.as_str()), ext.position),
            TypeExtension::Interface(ext) =>
                ("InterfaceTypeExtension", Some(ext.name.as_str()), ext.position),
            TypeExtension::Union(ext) =>
                ("UnionTypeExtension", Some(ext.name.as_str()), ext.position),
            TypeExtension::Enum(ext) =>
                ("EnumTypeExtension", Some(ext.name.as_str()), ext.position),
            TypeExtension::InputObject(ext) =>
                ("InputObjectTypeExtension", Some(ext.name.as_str()), ext.position),
        },
    }
}

/// Wrap `kind` with the annotations and location shared by every converted
/// definition and field.
fn with_common_fields(
    source: &str,
    kind: NodeKind,
    description: Option<&str>,
    title: String,
    position: ast::Pos,
) -> NodeType {
    let mut annotations = parse_description(description);
    annotations.title = Some(title);
    NodeType::new(kind)
        .with_annotations(annotations)
        .with_loc(pos_to_location(source, position))
}

fn parse_union_type(source: &str, union_type: &ast::schema::UnionType) -> Option<NamedType> {
    let kind = match union_type.types.as_slice() {
        [] => return None,
        [member] => parse_type(member),
        members => NodeKind::Or {
            or: members.iter()
                .map(|member| NodeType::new(parse_type(member)))
                .collect(),
        },
    };

    Some(NamedType::new(&union_type.name, with_common_fields(
        source,
        kind,
        union_type.description.as_deref(),
        union_type.name.to_string(),
        union_type.position,
    )))
}

fn parse_object_type(source: &str, object_type: &ast::schema::ObjectType) -> NamedType {
    let properties =
        object_type.fields.iter()
            .map(|field| (
                field.name.to_string(),
                parse_object_field(source, field, &object_type.name),
            ))
            .collect();

    NamedType::new(&object_type.name, with_common_fields(
        source,
        NodeKind::Object {
            properties,
            additional_properties: false,
        },
        object_type.description.as_deref(),
        object_type.name.to_string(),
        object_type.position,
    ))
}

fn parse_enum_type(source: &str, enum_type: &ast::schema::EnumType) -> NamedType {
    let enum_values =
        enum_type.values.iter()
            .map(|value| value.name.to_string())
            .collect();

    NamedType::new(&enum_type.name, with_common_fields(
        source,
        NodeKind::String {
            enum_values: Some(enum_values),
        },
        enum_type.description.as_deref(),
        enum_type.name.to_string(),
        enum_type.position,
    ))
}

fn parse_object_field(
    source: &str,
    field: &ast::schema::Field,
    parent_name: &str,
) -> ObjectProperty {
    ObjectProperty {
        node: with_common_fields(
            source,
            parse_field_type(gql_strip_required(&field.field_type), parent_name).kind,
            field.description.as_deref(),
            format!("{parent_name}.{}", field.name),
            field.position,
        ),
        required: is_required(&field.field_type),
    }
}

/// Decode a field type whose outer non-null wrapper (if any) has already been
/// stripped.
///
/// Lists nested inside the field's type are titled `{parent_name}.[]`.
fn parse_field_type(type_: &ast::schema::Type, parent_name: &str) -> NodeType {
    match type_ {
        ast::schema::Type::ListType(item_type) => {
            let element_type =
                if is_required(item_type) {
                    parse_field_type(gql_strip_required(item_type), parent_name)
                } else {
                    NodeType::new(NodeKind::Or {
                        or: vec![
                            NodeType::new(NodeKind::Null),
                            parse_field_type(item_type, parent_name),
                        ],
                    })
                };
            NodeType::new(NodeKind::Array {
                element_type: Box::new(element_type),
            }).with_annotations(Annotations {
                title: Some(format!("{parent_name}.[]")),
                ..Annotations::default()
            })
        },

        // Only reachable for doubly-wrapped types, which the parser rejects.
        ast::schema::Type::NonNullType(inner) => parse_field_type(inner, parent_name),

        ast::schema::Type::NamedType(name) => NodeType::new(parse_type(name)),
    }
}

fn parse_type(name: &str) -> NodeKind {
    match name {
        "Boolean" => NodeKind::Boolean,
        "Int" => NodeKind::Integer,
        "Float" => NodeKind::Number,
        "String" => NodeKind::string(),
        _ => NodeKind::Ref {
            reference: name.to_string(),
        },
    }
}

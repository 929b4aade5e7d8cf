use crate::annotation::stringify_annotations;
use crate::ast;
use crate::gql_utils::gql_list_type;
use crate::gql_utils::gql_maybe_required;
use crate::gql_utils::gql_named_type;
use crate::gql_utils::gql_union_type;
use crate::options::default_warn;
use crate::ConversionError;
use crate::CoreTypesToGraphqlOptions;
use crate::DefaultNameGenerator;
use crate::NameGenerator;
use crate::UnsupportedPolicy;
use core_types::Annotations;
use core_types::ConversionResult;
use core_types::NodeDocument;
use core_types::NodeKind;
use core_types::NodePath;
use core_types::NodeType;
use core_types::ObjectProperty;
use core_types::PathSegment;
use core_types::UnsupportedError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ConversionError>;

const THIS_PACKAGE: &str = env!("CARGO_PKG_NAME");
const THIS_PACKAGE_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Convert a core-types document into a GraphQL schema AST.
///
/// Each top-level declaration is recorded in either `converted_types` or
/// `not_converted_types` of the result. Types synthesized for anonymous
/// nested objects are appended after the top-level definitions.
pub fn convert_core_types_to_graphql_ast(
    doc: &NodeDocument,
    options: &CoreTypesToGraphqlOptions,
) -> Result<ConversionResult<ast::schema::Document>> {
    if doc.version != NodeDocument::VERSION {
        return Err(ConversionError::UnsupportedVersion {
            version: doc.version,
        });
    }

    let mut ctx = Context::new(doc, ResolvedOptions::from(options));
    let mut converted_types = vec![];
    let mut not_converted_types = vec![];
    let mut definitions = vec![];

    for (index, named_type) in doc.types.iter().enumerate() {
        let type_def = ctx.convert_named_type(index, &named_type.name, &named_type.node)?;
        if let Some(type_def) = type_def {
            log::debug!("Converted `{}` to a GraphQL type.", named_type.name);
            definitions.push(ast::schema::Definition::TypeDefinition(type_def));
            converted_types.push(named_type.name.to_string());
        } else {
            log::debug!("Did not convert `{}`.", named_type.name);
            not_converted_types.push(named_type.name.to_string());
        }
    }

    definitions.extend(
        ctx.into_synthesized_types()
            .map(ast::schema::Definition::TypeDefinition)
    );

    Ok(ConversionResult {
        data: ast::schema::Document { definitions },
        converted_types,
        not_converted_types,
    })
}

/// Convert a core-types document into GraphQL SDL text.
///
/// Unless `include_comment` is explicitly `Some(false)`, the SDL is prefixed
/// with a header comment describing where it came from. The returned text
/// always ends with a newline.
pub fn convert_core_types_to_graphql(
    doc: &NodeDocument,
    options: &CoreTypesToGraphqlOptions,
) -> Result<ConversionResult<String>> {
    let result = convert_core_types_to_graphql_ast(doc, options)?;

    let header =
        if options.include_comment.unwrap_or(true) {
            Some(make_header(
                options.filename.as_deref(),
                options.source_filename.as_deref(),
                options.user_package.as_deref(),
                options.user_package_url.as_deref(),
            ))
        } else {
            None
        };

    Ok(result.map(|ast| {
        let sdl = ast.to_string();
        let text = match header {
            Some(header) => format!("{header}\n\n{sdl}"),
            None => sdl,
        };
        ensure_ending_newline(text)
    }))
}

fn ensure_ending_newline(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn make_package_line(package: Option<&str>, package_url: Option<&str>) -> Option<String> {
    match (package, package_url) {
        (Some(package), Some(url)) => Some(format!("{package} ({url})")),
        (Some(package), None) => Some(package.to_string()),
        (None, Some(url)) => Some(url.to_string()),
        (None, None) => None,
    }
}

fn make_header(
    filename: Option<&str>,
    source_filename: Option<&str>,
    user_package: Option<&str>,
    user_package_url: Option<&str>,
) -> String {
    let outfile = match filename {
        Some(filename) => format!("The file {filename}"),
        None => "This file".to_string(),
    };
    let infile = match source_filename {
        Some(source_filename) => format!(" from {source_filename}"),
        None => String::new(),
    };
    let this_package = make_package_line(
        Some(THIS_PACKAGE),
        Some(THIS_PACKAGE_URL).filter(|url| !url.is_empty()),
    ).unwrap_or_default();

    let mut lines = vec![
        format!("{outfile} was auto-generated{infile} using"),
        this_package,
    ];
    if let Some(that_package) = make_package_line(user_package, user_package_url) {
        lines.push("on behalf of".to_string());
        lines.push(that_package);
    }

    lines.iter()
        .map(|line| format!("# {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// [`CoreTypesToGraphqlOptions`] with every default filled in.
struct ResolvedOptions<'a> {
    warn: &'a (dyn Fn(&str, &UnsupportedError) + Send + Sync),
    null_type_name: Option<&'a str>,
    name_generator: &'a (dyn NameGenerator + Send + Sync),
    unsupported: UnsupportedPolicy,
    include_comment: bool,
}
impl<'a> std::convert::From<&'a CoreTypesToGraphqlOptions> for ResolvedOptions<'a> {
    fn from(options: &'a CoreTypesToGraphqlOptions) -> Self {
        Self {
            warn: match &options.warn {
                Some(warn) => warn.as_ref(),
                None => &default_warn,
            },
            null_type_name: options.null_type_name.as_deref(),
            name_generator: match &options.name_generator {
                Some(name_generator) => name_generator.as_ref(),
                None => &DefaultNameGenerator,
            },
            unsupported: options.unsupported,
            include_comment: options.include_comment.unwrap_or(false),
        }
    }
}

/// A GraphQL type reference along with whether the core type it was mapped
/// from admits `null`.
struct MappedType {
    type_: ast::schema::Type,
    nullable: bool,
}

/// Call-scoped conversion state.
///
/// `name_map` holds every name in use: the top-level declarations (which map
/// to `None`, since they are converted into the output document directly)
/// and the types synthesized along the way.
struct Context<'opts> {
    options: ResolvedOptions<'opts>,
    name_map: IndexMap<String, Option<ast::schema::TypeDefinition>>,
}
impl<'opts> Context<'opts> {
    fn new(doc: &NodeDocument, options: ResolvedOptions<'opts>) -> Self {
        let name_map =
            doc.types.iter()
                .map(|named_type| (named_type.name.to_string(), None))
                .collect();

        Self {
            options,
            name_map,
        }
    }

    fn into_synthesized_types(self) -> impl Iterator<Item = ast::schema::TypeDefinition> {
        self.name_map
            .into_values()
            .flatten()
    }

    fn convert_named_type(
        &mut self,
        index: usize,
        name: &str,
        node: &NodeType,
    ) -> Result<Option<ast::schema::TypeDefinition>> {
        let path = vec![PathSegment::Index(index)];
        match &node.kind {
            NodeKind::Boolean
            | NodeKind::Integer
            | NodeKind::Number
            | NodeKind::String { .. }
                => Ok(self.make_union_type(name, node, std::slice::from_ref(node))?
                        .map(ast::schema::TypeDefinition::Union)),

            NodeKind::Null => match self.options.null_type_name {
                Some(null_type_name) => Ok(Some(ast::schema::TypeDefinition::Union(
                    gql_union_type(
                        name,
                        self.describe(&node.annotations),
                        vec![null_type_name.to_string()],
                    ),
                ))),
                None => self.handle_unsupported(node, Some(path)),
            },

            NodeKind::Or { or } =>
                Ok(self.make_union_type(name, node, or)?
                    .map(ast::schema::TypeDefinition::Union)),

            NodeKind::Object { properties, .. } =>
                Ok(Some(ast::schema::TypeDefinition::Object(
                    self.make_object_type(name, node, properties)?,
                ))),

            NodeKind::Array { .. }
            | NodeKind::Tuple { .. }
            | NodeKind::Ref { .. }
                => self.handle_unsupported(node, Some(path)),
        }
    }

    fn describe(&self, annotations: &Annotations) -> Option<String> {
        let description = stringify_annotations(
            annotations,
            self.options.include_comment,
        );
        if description.is_empty() {
            None
        } else {
            Some(description)
        }
    }

    fn generate_name(&self, base_name: &str, name_hint: &str) -> String {
        let name_map = &self.name_map;
        self.options.name_generator.generate_name(
            base_name,
            name_hint,
            &|name: &str| !name_map.contains_key(name),
        )
    }

    fn handle_unsupported<T>(
        &self,
        node: &NodeType,
        path: Option<NodePath>,
    ) -> Result<Option<T>> {
        if self.options.unsupported == UnsupportedPolicy::Ignore {
            return Ok(None);
        }

        let message = format!("Type '{}' not supported", node.kind.type_name());
        let err = UnsupportedError::for_node(message, node, path);
        if self.options.unsupported == UnsupportedPolicy::Error {
            return Err(err.into());
        }

        (self.options.warn)(err.message(), &err);
        Ok(None)
    }

    fn make_object_type(
        &mut self,
        name: &str,
        node: &NodeType,
        properties: &IndexMap<String, ObjectProperty>,
    ) -> Result<ast::schema::ObjectType> {
        let mut fields = vec![];
        for (prop_name, prop) in properties {
            let Some(mapped) = self.map_field_type(&prop.node, name, prop_name)? else {
                log::trace!("Dropping unmappable field `{name}.{prop_name}`.");
                continue;
            };
            fields.push(ast::schema::Field {
                position: ast::Pos::default(),
                description: self.describe(&prop.node.annotations),
                name: prop_name.to_string(),
                arguments: vec![],
                field_type: gql_maybe_required(
                    mapped.type_,
                    prop.required && !mapped.nullable,
                ),
                directives: vec![],
            });
        }

        Ok(ast::schema::ObjectType {
            position: ast::Pos::default(),
            description: self.describe(&node.annotations),
            name: name.to_string(),
            implements_interfaces: vec![],
            directives: vec![],
            fields,
        })
    }

    /// Build a union of `alternatives`, each mapped to a named type. Nested
    /// `or`s are flattened into the union. Members which can't be mapped are
    /// skipped; if none can, there is no union.
    fn make_union_type(
        &mut self,
        name: &str,
        node: &NodeType,
        alternatives: &[NodeType],
    ) -> Result<Option<ast::schema::UnionType>> {
        let mut types = vec![];
        for (index, member) in flatten_alternatives(alternatives).into_iter().enumerate() {
            if let Some(type_name) = self.map_named_type(member, name, &format!("T{index}"))? {
                types.push(type_name);
            }
        }

        if types.is_empty() {
            return Ok(None);
        }

        Ok(Some(gql_union_type(name, self.describe(&node.annotations), types)))
    }

    /// Map the type of a field or list item.
    ///
    /// An `or` containing `null` is how a nullable type is spelled in core
    /// types, so it maps to its remaining alternative marked as nullable.
    fn map_field_type(
        &mut self,
        node: &NodeType,
        base_name: &str,
        name_hint: &str,
    ) -> Result<Option<MappedType>> {
        match &node.kind {
            NodeKind::Or { or } =>
                self.map_alternatives(node, or, base_name, name_hint),

            _ => Ok(self.map_list_or_named_type(node, base_name, name_hint)?
                    .map(|type_| MappedType { type_, nullable: false })),
        }
    }

    /// Map the alternatives of an `or` (or the element types of a tuple)
    /// outside of a union. Only a single non-null alternative, optionally
    /// alongside `null`, has a GraphQL type reference.
    fn map_alternatives(
        &mut self,
        node: &NodeType,
        alternatives: &[NodeType],
        base_name: &str,
        name_hint: &str,
    ) -> Result<Option<MappedType>> {
        let alternatives = flatten_alternatives(alternatives);
        let nullable = alternatives.iter().any(|alt| alt.is_null());
        let members =
            alternatives.into_iter()
                .filter(|alt| !alt.is_null())
                .collect::<Vec<_>>();

        let type_ = match members.as_slice() {
            [member] => self.map_list_or_named_type(member, base_name, name_hint)?,
            _ => return self.handle_unsupported(node, None),
        };

        Ok(type_.map(|type_| MappedType { type_, nullable }))
    }

    fn map_list_or_named_type(
        &mut self,
        node: &NodeType,
        base_name: &str,
        name_hint: &str,
    ) -> Result<Option<ast::schema::Type>> {
        let item = match &node.kind {
            NodeKind::Array { element_type } =>
                self.map_field_type(element_type, base_name, name_hint)?,

            // A tuple is a list whose items are any of its element types.
            NodeKind::Tuple { element_types } =>
                self.map_alternatives(node, element_types, base_name, name_hint)?,

            _ => return Ok(
                self.map_named_type(node, base_name, name_hint)?
                    .map(gql_named_type)
            ),
        };

        Ok(item.map(|MappedType { type_, nullable }| {
            gql_list_type(gql_maybe_required(type_, !nullable))
        }))
    }

    fn map_named_type(
        &mut self,
        node: &NodeType,
        base_name: &str,
        name_hint: &str,
    ) -> Result<Option<String>> {
        match &node.kind {
            NodeKind::Boolean => Ok(Some("Boolean".to_string())),
            NodeKind::Integer => Ok(Some("Int".to_string())),
            NodeKind::Number => Ok(Some("Float".to_string())),
            NodeKind::String { .. } => Ok(Some("String".to_string())),
            NodeKind::Ref { reference } => Ok(Some(reference.to_string())),

            NodeKind::Null => match self.options.null_type_name {
                Some(null_type_name) => Ok(Some(null_type_name.to_string())),
                None => self.handle_unsupported(node, None),
            },

            NodeKind::Object { properties, .. } =>
                self.synthesize_object(node, properties, base_name, name_hint)
                    .map(Some),

            NodeKind::Array { .. }
            | NodeKind::Or { .. }
            | NodeKind::Tuple { .. }
                => self.handle_unsupported(node, None),
        }
    }

    /// Declare an anonymous object as a new top-level object type and return
    /// its generated name.
    fn synthesize_object(
        &mut self,
        node: &NodeType,
        properties: &IndexMap<String, ObjectProperty>,
        base_name: &str,
        name_hint: &str,
    ) -> Result<String> {
        let name = self.reserve_name(base_name, name_hint);
        let object_type = self.make_object_type(&name, node, properties)?;
        self.name_map.insert(
            name.to_string(),
            Some(ast::schema::TypeDefinition::Object(object_type)),
        );
        Ok(name)
    }

    /// Generate a name and register it before the type it names is built, so
    /// types synthesized while building it can't claim the same name.
    fn reserve_name(
        &mut self,
        base_name: &str,
        name_hint: &str,
    ) -> String {
        let name = self.generate_name(base_name, name_hint);
        log::trace!("Synthesizing type `{name}`.");
        self.name_map.insert(name.to_string(), None);
        name
    }
}

/// Inline the alternatives of nested `or`s, depth first.
fn flatten_alternatives(alternatives: &[NodeType]) -> Vec<&NodeType> {
    alternatives.iter()
        .flat_map(|alt| match &alt.kind {
            NodeKind::Or { or } => flatten_alternatives(or),
            _ => vec![alt],
        })
        .collect()
}

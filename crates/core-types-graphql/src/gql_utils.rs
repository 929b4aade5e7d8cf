use crate::ast;

pub(crate) fn gql_named_type(name: impl AsRef<str>) -> ast::schema::Type {
    ast::schema::Type::NamedType(name.as_ref().to_string())
}

pub(crate) fn gql_list_type(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::ListType(Box::new(inner))
}

/// Wrap `type_` in a non-null wrapper when `required`, never wrapping a type
/// which is already non-null.
pub(crate) fn gql_maybe_required(
    type_: ast::schema::Type,
    required: bool,
) -> ast::schema::Type {
    if !required || is_required(&type_) {
        type_
    } else {
        ast::schema::Type::NonNullType(Box::new(type_))
    }
}

/// Peel off one outer non-null wrapper, if there is one.
pub(crate) fn gql_strip_required(type_: &ast::schema::Type) -> &ast::schema::Type {
    match type_ {
        ast::schema::Type::NonNullType(inner) => inner.as_ref(),
        _ => type_,
    }
}

pub(crate) fn is_required(type_: &ast::schema::Type) -> bool {
    matches!(type_, ast::schema::Type::NonNullType(_))
}

pub(crate) fn gql_union_type(
    name: impl AsRef<str>,
    description: Option<String>,
    types: Vec<String>,
) -> ast::schema::UnionType {
    ast::schema::UnionType {
        position: ast::Pos::default(),
        description,
        name: name.as_ref().to_string(),
        directives: vec![],
        types,
    }
}

/// Render a type reference the way it is written in SDL (e.g. `[String!]`).
pub(crate) fn type_to_string(type_: &ast::schema::Type) -> String {
    match type_ {
        ast::schema::Type::NamedType(name) => name.to_string(),
        ast::schema::Type::ListType(inner) => format!("[{}]", type_to_string(inner)),
        ast::schema::Type::NonNullType(inner) => format!("{}!", type_to_string(inner)),
    }
}

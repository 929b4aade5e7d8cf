use crate::get_breaking_changes;
use crate::get_dangerous_changes;
use crate::BreakingChangeType;
use crate::ConversionError;
use crate::DangerousChangeType;
use crate::SchemaChange;
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn change<K>(kind: K, description: &str) -> SchemaChange<K> {
    SchemaChange {
        kind,
        description: description.to_string(),
    }
}

#[test]
fn type_removed_from_union() -> Result<()> {
    let breaking = get_breaking_changes("union Foo = String", "union Foo = Int")?;

    assert_eq!(breaking, vec![change(
        BreakingChangeType::TypeRemovedFromUnion,
        "String was removed from union type Foo.",
    )]);
    assert_eq!(serde_json::to_value(&breaking)?, json!([{
        "type": "TYPE_REMOVED_FROM_UNION",
        "description": "String was removed from union type Foo.",
    }]));
    Ok(())
}

#[test]
fn type_added_to_union() -> Result<()> {
    let dangerous = get_dangerous_changes("union Foo = String", "union Foo = String | Int")?;

    assert_eq!(dangerous, vec![change(
        DangerousChangeType::TypeAddedToUnion,
        "Int was added to union type Foo.",
    )]);
    assert!(get_breaking_changes("union Foo = String", "union Foo = String | Int")?.is_empty());
    Ok(())
}

#[test]
fn removed_types_and_kind_changes() -> Result<()> {
    let breaking = get_breaking_changes(
        "type Foo { a: Int }\nenum Bar { A }\nscalar Baz",
        "union Foo = Int\nscalar Baz",
    )?;

    assert_eq!(breaking, vec![
        change(
            BreakingChangeType::TypeChangedKind,
            "Foo changed from an Object type to a Union type.",
        ),
        change(BreakingChangeType::TypeRemoved, "Bar was removed."),
    ]);
    Ok(())
}

#[test]
fn enum_value_changes() -> Result<()> {
    let from = "enum Color { RED GREEN }";
    let to = "enum Color { RED BLUE }";

    assert_eq!(get_breaking_changes(from, to)?, vec![change(
        BreakingChangeType::ValueRemovedFromEnum,
        "GREEN was removed from enum type Color.",
    )]);
    assert_eq!(get_dangerous_changes(from, to)?, vec![change(
        DangerousChangeType::ValueAddedToEnum,
        "BLUE was added to enum type Color.",
    )]);
    Ok(())
}

/// Verifies that output fields may become non-null but not nullable, and
/// that removed fields are breaking.
#[test]
fn object_field_changes() -> Result<()> {
    let breaking = get_breaking_changes(
        "type Foo { a: Int b: String! c: [Int] d: Int }",
        "type Foo { a: Int! b: String c: [Int!]! }",
    )?;

    assert_eq!(breaking, vec![
        change(
            BreakingChangeType::FieldChangedKind,
            "Foo.b changed type from String! to String.",
        ),
        change(BreakingChangeType::FieldRemoved, "Foo.d was removed."),
    ]);
    Ok(())
}

#[test]
fn field_argument_changes() -> Result<()> {
    let from = "type Query { foo(a: Int, b: String!, c: Int): Int }";
    let to = "type Query { foo(a: Int!, b: String, d: Int!, e: Int, f: Int! = 1): Int }";

    assert_eq!(get_breaking_changes(from, to)?, vec![
        change(
            BreakingChangeType::ArgChangedKind,
            "Query.foo arg a has changed type from Int to Int!.",
        ),
        change(BreakingChangeType::ArgRemoved, "Query.foo arg c was removed."),
        change(
            BreakingChangeType::RequiredArgAdded,
            "A required arg d on Query.foo was added.",
        ),
    ]);
    assert_eq!(get_dangerous_changes(from, to)?, vec![
        change(
            DangerousChangeType::OptionalArgAdded,
            "An optional arg e on Query.foo was added.",
        ),
        change(
            DangerousChangeType::OptionalArgAdded,
            "An optional arg f on Query.foo was added.",
        ),
    ]);
    Ok(())
}

#[test]
fn input_field_changes() -> Result<()> {
    let from = "input Filter { a: Int b: [String] }";
    let to = "input Filter { a: Int! b: String c: Int! d: Int }";

    assert_eq!(get_breaking_changes(from, to)?, vec![
        change(
            BreakingChangeType::FieldChangedKind,
            "Filter.a changed type from Int to Int!.",
        ),
        change(
            BreakingChangeType::FieldChangedKind,
            "Filter.b changed type from [String] to String.",
        ),
        change(
            BreakingChangeType::RequiredInputFieldAdded,
            "A required field c on input type Filter was added.",
        ),
    ]);
    assert_eq!(get_dangerous_changes(from, to)?, vec![change(
        DangerousChangeType::OptionalInputFieldAdded,
        "An optional field d on input type Filter was added.",
    )]);
    Ok(())
}

#[test]
fn implemented_interface_changes() -> Result<()> {
    let from = "interface A { id: ID }\ninterface B { id: ID }\ntype Foo implements A { id: ID }";
    let to = "interface A { id: ID }\ninterface B { id: ID }\ntype Foo implements B { id: ID }";

    assert_eq!(get_breaking_changes(from, to)?, vec![change(
        BreakingChangeType::InterfaceRemovedFromObject,
        "Foo no longer implements interface A.",
    )]);
    assert_eq!(get_dangerous_changes(from, to)?, vec![change(
        DangerousChangeType::InterfaceAddedToObject,
        "B added to interfaces implemented by Foo.",
    )]);
    Ok(())
}

#[test]
fn identical_schemas_have_no_changes() -> Result<()> {
    let schema = "type Foo { a(x: Int): [String!]! }\nunion Bar = Foo\nenum Baz { A B }";

    assert!(get_breaking_changes(schema, schema)?.is_empty());
    assert!(get_dangerous_changes(schema, schema)?.is_empty());
    Ok(())
}

#[test]
fn invalid_sdl_is_a_parse_error() {
    let result = get_breaking_changes("type Foo {", "type Foo { a: Int }");

    assert!(matches!(result, Err(ConversionError::Parse(_))));
}

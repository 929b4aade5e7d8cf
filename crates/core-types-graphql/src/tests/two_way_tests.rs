use crate::convert_core_types_to_graphql;
use crate::convert_graphql_to_core_types;
use crate::CoreTypesToGraphqlOptions;
use crate::GraphqlToCoreTypesOptions;
use core_types::NodeDocument;
use core_types::NodeKind;
use core_types::NodeType;
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn clear_titles(node: &mut NodeType) {
    node.annotations.title = None;
    match &mut node.kind {
        NodeKind::Array { element_type } => clear_titles(element_type),
        NodeKind::Tuple { element_types } => element_types.iter_mut().for_each(clear_titles),
        NodeKind::Object { properties, .. } =>
            properties.values_mut().for_each(|prop| clear_titles(&mut prop.node)),
        NodeKind::Or { or } => or.iter_mut().for_each(clear_titles),
        _ => (),
    }
}

fn sdl_to_core_types(source: &str) -> Result<NodeDocument> {
    let mut doc = convert_graphql_to_core_types(source, &GraphqlToCoreTypesOptions::new())?.data;
    doc.clear_locations();
    Ok(doc)
}

fn core_types_to_sdl(doc: &NodeDocument) -> Result<String> {
    let options = CoreTypesToGraphqlOptions::new().with_include_comment(false);
    Ok(convert_core_types_to_graphql(doc, &options)?.data)
}

#[test]
fn core_types_survive_graphql_round_trip() -> Result<()> {
    let doc: NodeDocument = serde_json::from_value(json!({
        "version": 1,
        "types": [
            {
                "name": "Foo",
                "type": "object",
                "description": "A foo",
                "additionalProperties": false,
                "properties": {
                    "name": { "node": { "type": "string" }, "required": true },
                    "age": { "node": { "type": "integer" }, "required": false },
                    "tags": {
                        "node": { "type": "array", "elementType": { "type": "string" } },
                        "required": true,
                    },
                    "scores": {
                        "node": {
                            "type": "array",
                            "elementType": {
                                "type": "or",
                                "or": [{ "type": "null" }, { "type": "number" }],
                            },
                        },
                        "required": false,
                    },
                    "friend": {
                        "node": { "type": "ref", "ref": "Bar", "description": "A bar" },
                        "required": false,
                    },
                },
            },
            {
                "name": "Bar",
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "active": { "node": { "type": "boolean" }, "required": true },
                },
            },
        ],
    }))?;

    let mut round_tripped = sdl_to_core_types(&core_types_to_sdl(&doc)?)?;
    round_tripped.types.iter_mut().for_each(|named_type| clear_titles(&mut named_type.node));

    assert_eq!(round_tripped, doc);
    Ok(())
}

#[test]
fn graphql_survives_core_types_round_trip() -> Result<()> {
    let schema = r#"
        "Kind of a string"
        union Stringish = String

        "string or foo"
        union Bar = Stringish | Foo

        type Foo {
          "required prop"
          name: [Stringish!]!
          """
          optional prop

          # example
              `4`
          """
          age: Int
        }
    "#;

    let doc = sdl_to_core_types(schema)?;
    let round_tripped = sdl_to_core_types(&core_types_to_sdl(&doc)?)?;

    assert_eq!(round_tripped, doc);
    assert_eq!(doc.type_names(), vec!["Stringish", "Bar", "Foo"]);
    Ok(())
}

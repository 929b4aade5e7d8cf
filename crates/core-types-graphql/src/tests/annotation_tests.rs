use crate::annotation::parse_description;
use crate::annotation::stringify_annotations;
use crate::annotation::unindent_equal;
use core_types::Annotations;
use core_types::Examples;
use proptest::prelude::*;

fn annotations_with_examples(examples: Vec<&str>) -> Annotations {
    Annotations {
        examples: Examples::from_vec(
            examples.into_iter().map(str::to_string).collect(),
        ),
        ..Annotations::default()
    }
}

#[test]
fn stringify_empty_annotations() {
    assert_eq!(stringify_annotations(&Annotations::default(), true), "");
}

/// Verifies that single-line examples are inline-quoted, multi-line examples
/// are fenced, and every section body is indented by 4 spaces.
#[test]
fn stringify_examples_inline_then_fenced() {
    let annotations = annotations_with_examples(vec!["a", "b\nc"]);

    assert_eq!(
        stringify_annotations(&annotations, false),
        "# example\n    `a`\n# example\n    ```\n    b\n    c\n    ```",
    );
}

#[test]
fn stringify_all_sections_in_order() {
    let annotations = Annotations {
        description: Some("A foo".to_string()),
        examples: Some(Examples::from("1")),
        default_value: Some("2".to_string()),
        comment: Some("internal".to_string()),
        ..Annotations::default()
    };

    assert_eq!(
        stringify_annotations(&annotations, true),
        "A foo\n\n# example\n    `1`\n\n# default\n    `2`\n\ninternal",
    );
    assert_eq!(
        stringify_annotations(&annotations, false),
        "A foo\n\n# example\n    `1`\n\n# default\n    `2`",
    );
}

#[test]
fn stringify_leaves_backticked_code_bare() {
    let annotations = Annotations {
        default_value: Some("`x`".to_string()),
        ..Annotations::default()
    };

    assert_eq!(stringify_annotations(&annotations, false), "# default\n    `x`");
}

#[test]
fn stringify_ignores_title() {
    let annotations = Annotations {
        title: Some("Foo.bar".to_string()),
        ..Annotations::default()
    };

    assert_eq!(stringify_annotations(&annotations, true), "");
}

#[test]
fn parse_missing_or_empty_description() {
    assert_eq!(parse_description(None), Annotations::default());
    assert_eq!(parse_description(Some("")), Annotations::default());
}

#[test]
fn parse_plain_description() {
    let annotations = parse_description(Some("  Just a description  \n"));

    assert_eq!(annotations.description.as_deref(), Some("Just a description"));
    assert_eq!(annotations.examples, None);
    assert_eq!(annotations.default_value, None);
}

#[test]
fn parse_sections() {
    let annotations = parse_description(Some(
        "A foo\n\n# example\n    `a`\n## example\n    ```\n    b\n    c\n    ```",
    ));

    assert_eq!(annotations.description.as_deref(), Some("A foo"));
    assert_eq!(
        annotations.examples,
        Some(Examples::Many(vec![
            "`a`".to_string(),
            "```\nb\nc\n```".to_string(),
        ])),
    );
    assert_eq!(annotations.default_value, None);
}

#[test]
fn parse_single_example_and_default() {
    let annotations = parse_description(Some(
        "# example\n    `1`\n\n#default\n    `2`",
    ));

    assert_eq!(annotations.description, None);
    assert_eq!(annotations.examples, Some(Examples::One("`1`".to_string())));
    assert_eq!(annotations.default_value.as_deref(), Some("`2`"));
}

#[test]
fn parse_ignores_marker_lookalikes() {
    let annotations = parse_description(Some("# examples\nexample\n# default value"));

    assert_eq!(
        annotations.description.as_deref(),
        Some("# examples\nexample\n# default value"),
    );
    assert_eq!(annotations.examples, None);
}

#[test]
fn unindent_equal_with_tabs() {
    assert_eq!(
        unindent_equal(&["\t\t{", "\t\t\tfoo: 'bar'", "\t\t}"]),
        vec!["{", "\tfoo: 'bar'", "}"],
    );
}

#[test]
fn unindent_equal_with_spaces() {
    assert_eq!(
        unindent_equal(&["    {", "      foo: 'bar'", "    }"]),
        vec!["{", "  foo: 'bar'", "}"],
    );
}

#[test]
fn unindent_equal_without_common_indent() {
    assert_eq!(unindent_equal(&["{", "  x", "}"]), vec!["{", "  x", "}"]);
    assert_eq!(unindent_equal(&["  a", "", "  b"]), vec!["  a", "", "  b"]);
    assert_eq!(unindent_equal(&[]), Vec::<&str>::new());
}

proptest! {
    #[test]
    fn example_and_default_cardinality_survives_round_trip(
        examples in prop::collection::vec("[a-z0-9]{1,8}", 0..5),
        default_value in prop::option::of("[a-z0-9]{1,8}"),
    ) {
        let annotations = Annotations {
            examples: Examples::from_vec(examples.clone()),
            default_value: default_value.clone(),
            ..Annotations::default()
        };

        let parsed = parse_description(Some(
            &stringify_annotations(&annotations, false),
        ));

        let parsed_examples =
            parsed.examples
                .as_ref()
                .map(|examples| examples.as_slice().to_vec())
                .unwrap_or_default();
        let expected_examples =
            examples.iter()
                .map(|example| format!("`{example}`"))
                .collect::<Vec<_>>();
        prop_assert_eq!(parsed_examples, expected_examples);
        prop_assert_eq!(
            matches!(parsed.examples, Some(Examples::One(_))),
            examples.len() == 1,
        );
        prop_assert_eq!(
            parsed.default_value,
            default_value.map(|value| format!("`{value}`")),
        );
    }
}

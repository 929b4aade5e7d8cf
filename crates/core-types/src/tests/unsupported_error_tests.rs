use crate::Location;
use crate::NodeKind;
use crate::NodeType;
use crate::PathSegment;
use crate::UnsupportedError;

#[test]
fn for_node_captures_blob_and_location() {
    let node = NodeType::new(NodeKind::Null)
        .with_loc(Location::from_offsets(17, 42));

    let err = UnsupportedError::for_node(
        "Type 'null' not supported",
        &node,
        Some(vec![PathSegment::Index(0)]),
    );

    assert_eq!(err.to_string(), "Type 'null' not supported");
    assert_eq!(err.blob(), Some(&node));
    assert_eq!(err.loc(), Some(&Location::from_offsets(17, 42)));
    assert_eq!(err.path(), Some(&vec![PathSegment::Index(0)]));
}

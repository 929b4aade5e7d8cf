/// Where a node was defined in the source it was read from.
///
/// Both ends are optional and each end is either a plain offset or a
/// line/column/offset triple, depending on what the producer of the node
/// knew about its source.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}
impl Location {
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self {
            start: Some(Position::Offset(start)),
            end: Some(Position::Offset(end)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Position {
    Offset(usize),
    LineColumn(LineColumn),
}

/// A 1-based line/column pair along with the offset it corresponds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

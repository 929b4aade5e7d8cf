/// Documentation metadata which may be attached to any [`NodeType`](crate::NodeType).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Annotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Examples>,

    #[serde(
        default,
        rename = "default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
impl Annotations {
    /// Indicates whether none of the annotation fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.examples.is_none()
            && self.default_value.is_none()
            && self.comment.is_none()
    }
}

/// One example, or an ordered list of examples.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Examples {
    One(String),
    Many(Vec<String>),
}
impl Examples {
    /// View the example(s) as a slice regardless of cardinality.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(example) => std::slice::from_ref(example),
            Self::Many(examples) => examples.as_slice(),
        }
    }

    /// Build from a list of examples: no examples yields `None` and a single
    /// example collapses to [`Examples::One`].
    pub fn from_vec(mut examples: Vec<String>) -> Option<Self> {
        match examples.len() {
            0 => None,
            1 => examples.pop().map(Self::One),
            _ => Some(Self::Many(examples)),
        }
    }
}
impl std::convert::From<&str> for Examples {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}
impl std::convert::From<Vec<String>> for Examples {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

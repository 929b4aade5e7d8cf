use crate::NameGenerator;
use core_types::UnsupportedError;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Sink for non-fatal conversion diagnostics.
pub type WarnFn = Arc<dyn Fn(&str, &UnsupportedError) + Send + Sync>;

/// The warn sink used when none is configured.
pub(crate) fn default_warn(message: &str, _err: &UnsupportedError) {
    log::warn!("{message}");
}

/// What to do when a construct cannot be represented in the conversion
/// target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsupportedPolicy {
    /// Skip the construct silently.
    Ignore,
    /// Skip the construct and report it to the warn sink.
    Warn,
    /// Abort the whole conversion.
    Error,
}
impl UnsupportedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}
impl std::fmt::Display for UnsupportedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for UnsupportedPolicy {
    type Err = ParseUnsupportedPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ParseUnsupportedPolicyError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Invalid unsupported-type policy `{0}`: expected one of `ignore`, `warn` \
    or `error`"
)]
pub struct ParseUnsupportedPolicyError(String);

/// Options for [`convert_core_types_to_graphql`](crate::convert_core_types_to_graphql)
/// and [`convert_core_types_to_graphql_ast`](crate::convert_core_types_to_graphql_ast).
#[derive(Clone)]
pub struct CoreTypesToGraphqlOptions {
    pub warn: Option<WarnFn>,

    /// The filename the output is meant to be written to. This is only a hint
    /// for the header comment; nothing is written.
    pub filename: Option<String>,

    /// The name of the file the core types were read from.
    pub source_filename: Option<String>,

    /// The name of the package using this package.
    pub user_package: Option<String>,

    /// The url of the package using this package.
    pub user_package_url: Option<String>,

    /// When set, `null` types are emitted as references to this type name
    /// instead of being unsupported.
    pub null_type_name: Option<String>,

    /// Generates names for the types GraphQL requires to be declared
    /// separately (anonymous nested objects).
    pub name_generator: Option<Arc<dyn NameGenerator + Send + Sync>>,

    pub unsupported: UnsupportedPolicy,

    /// `Some(true)` includes the `comment` annotation in descriptions.
    /// Anything but `Some(false)` prefixes printed SDL with a header comment.
    pub include_comment: Option<bool>,
}
impl CoreTypesToGraphqlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl AsRef<str>) -> Self {
        self.filename = Some(filename.as_ref().to_string());
        self
    }

    pub fn with_include_comment(mut self, include_comment: bool) -> Self {
        self.include_comment = Some(include_comment);
        self
    }

    pub fn with_name_generator(
        mut self,
        name_generator: impl NameGenerator + Send + Sync + 'static,
    ) -> Self {
        self.name_generator = Some(Arc::new(name_generator));
        self
    }

    pub fn with_null_type_name(mut self, null_type_name: impl AsRef<str>) -> Self {
        self.null_type_name = Some(null_type_name.as_ref().to_string());
        self
    }

    pub fn with_source_filename(mut self, source_filename: impl AsRef<str>) -> Self {
        self.source_filename = Some(source_filename.as_ref().to_string());
        self
    }

    pub fn with_unsupported(mut self, unsupported: UnsupportedPolicy) -> Self {
        self.unsupported = unsupported;
        self
    }

    pub fn with_user_package(mut self, user_package: impl AsRef<str>) -> Self {
        self.user_package = Some(user_package.as_ref().to_string());
        self
    }

    pub fn with_user_package_url(mut self, user_package_url: impl AsRef<str>) -> Self {
        self.user_package_url = Some(user_package_url.as_ref().to_string());
        self
    }

    pub fn with_warn(
        mut self,
        warn: impl Fn(&str, &UnsupportedError) + Send + Sync + 'static,
    ) -> Self {
        self.warn = Some(Arc::new(warn));
        self
    }
}
impl std::default::Default for CoreTypesToGraphqlOptions {
    fn default() -> Self {
        Self {
            warn: None,
            filename: None,
            source_filename: None,
            user_package: None,
            user_package_url: None,
            null_type_name: None,
            name_generator: None,
            unsupported: UnsupportedPolicy::Warn,
            include_comment: None,
        }
    }
}
impl std::fmt::Debug for CoreTypesToGraphqlOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreTypesToGraphqlOptions")
            .field("warn", &self.warn.as_ref().map(|_| "<fn>"))
            .field("filename", &self.filename)
            .field("source_filename", &self.source_filename)
            .field("user_package", &self.user_package)
            .field("user_package_url", &self.user_package_url)
            .field("null_type_name", &self.null_type_name)
            .field("name_generator", &self.name_generator.as_ref().map(|_| "<fn>"))
            .field("unsupported", &self.unsupported)
            .field("include_comment", &self.include_comment)
            .finish()
    }
}

/// Options for [`convert_graphql_to_core_types`](crate::convert_graphql_to_core_types).
#[derive(Clone)]
pub struct GraphqlToCoreTypesOptions {
    pub warn: Option<WarnFn>,
    pub unsupported: UnsupportedPolicy,
}
impl GraphqlToCoreTypesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unsupported(mut self, unsupported: UnsupportedPolicy) -> Self {
        self.unsupported = unsupported;
        self
    }

    pub fn with_warn(
        mut self,
        warn: impl Fn(&str, &UnsupportedError) + Send + Sync + 'static,
    ) -> Self {
        self.warn = Some(Arc::new(warn));
        self
    }
}
impl std::default::Default for GraphqlToCoreTypesOptions {
    fn default() -> Self {
        Self {
            warn: None,
            unsupported: UnsupportedPolicy::Ignore,
        }
    }
}
impl std::fmt::Debug for GraphqlToCoreTypesOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlToCoreTypesOptions")
            .field("warn", &self.warn.as_ref().map(|_| "<fn>"))
            .field("unsupported", &self.unsupported)
            .finish()
    }
}

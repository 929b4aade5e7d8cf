use crate::ast;
use core_types::LineColumn;
use core_types::Location;
use core_types::Position;

/// A 1-based line/column pair as reported by the GraphQL parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GqlLocation {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<ast::Pos> for GqlLocation {
    fn from(value: ast::Pos) -> Self {
        Self {
            line: value.line,
            column: value.column,
        }
    }
}

/// Convert the first of `locations` into a core-types [`Location`] relative
/// to `source`.
///
/// The offset is the total length of all lines preceding the location's line
/// plus its column. Line terminators are not counted.
pub fn gql_locations_to_core_types_location(
    source: &str,
    locations: &[GqlLocation],
) -> Location {
    let Some(first) = locations.first() else {
        return Location::default();
    };

    let offset =
        source.split('\n')
            .take(first.line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>()
            + first.column;

    Location {
        start: Some(Position::LineColumn(LineColumn {
            line: first.line,
            column: first.column,
            offset,
        })),
        end: None,
    }
}

/// Map an AST position onto a core-types [`Location`] relative to `source`.
pub fn pos_to_location(source: &str, pos: ast::Pos) -> Location {
    gql_locations_to_core_types_location(source, &[pos.into()])
}

/// Extract the `line:column` positions carried by a `graphql_parser` parse
/// error.
///
/// `graphql_parser` only exposes positions through the error message, which
/// has the form `Parse error at {line}:{column}` followed by details.
pub fn parse_error_locations(err: &ast::schema::ParseError) -> Vec<GqlLocation> {
    locations_from_message(&err.to_string())
}

pub(crate) fn locations_from_message(message: &str) -> Vec<GqlLocation> {
    const PREFIX: &str = "Parse error at ";

    message.match_indices(PREFIX)
        .filter_map(|(idx, _)| {
            let rest = &message[idx + PREFIX.len()..];
            let end =
                rest.find(|c: char| !c.is_ascii_digit() && c != ':')
                    .unwrap_or(rest.len());
            let (line, column) = rest[..end].split_once(':')?;
            Some(GqlLocation {
                line: line.parse().ok()?,
                column: column.parse().ok()?,
            })
        })
        .collect()
}

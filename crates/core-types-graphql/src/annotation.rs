//! Encodes core-types [`Annotations`] into a GraphQL description and decodes
//! them back out again.
//!
//! Descriptions use a markdown-like layout: free-form description text
//! first, then one `# example` section per example, then a `# default`
//! section. Section bodies are indented by 4 spaces and quoted as code.

use core_types::Annotations;
use core_types::Examples;

const EXAMPLE_MARKER: &str = "example";
const DEFAULT_MARKER: &str = "default";

/// Render `annotations` as a single description block.
///
/// The `comment` annotation is only included when `include_comment` is set.
/// Returns an empty string when there is nothing to render.
pub fn stringify_annotations(
    annotations: &Annotations,
    include_comment: bool,
) -> String {
    let examples =
        annotations.examples
            .as_ref()
            .map(|examples| format_examples(examples.as_slice()));
    let default_value =
        annotations.default_value
            .as_deref()
            .map(format_default);
    let comment =
        if include_comment {
            annotations.comment.clone()
        } else {
            None
        };

    [annotations.description.clone(), examples, default_value, comment]
        .into_iter()
        .flatten()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

fn enquote_code(code: &str) -> String {
    if code.contains('`') {
        code.to_string()
    } else if code.contains('\n') {
        format!("```\n{code}\n```")
    } else {
        format!("`{code}`")
    }
}

fn format_examples(examples: &[String]) -> String {
    examples.iter()
        .map(|example| {
            format!("# {EXAMPLE_MARKER}\n{}", indent(&enquote_code(example)))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn format_default(default_value: &str) -> String {
    format!("# {DEFAULT_MARKER}\n{}", indent(&enquote_code(default_value)))
}

fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Description,
    Examples,
    Default,
}

/// Matches `^#+\s*{marker}$`.
fn is_section_marker(line: &str, marker: &str) -> bool {
    let rest = line.trim_start_matches('#');
    rest.len() < line.len() && rest.trim_start() == marker
}

/// Decode a description produced by [`stringify_annotations`] (or written by
/// hand in the same layout) back into [`Annotations`].
///
/// Never fails: lines which don't look like section markers are treated as
/// text of whichever section is currently open.
pub fn parse_description(description: Option<&str>) -> Annotations {
    let Some(text) = description.filter(|text| !text.is_empty()) else {
        return Annotations::default();
    };

    let mut description_lines: Vec<&str> = vec![];
    let mut example_blocks: Vec<Vec<&str>> = vec![];
    let mut default_lines: Vec<&str> = vec![];

    let mut section = Section::Description;
    for line in text.split('\n') {
        if is_section_marker(line, EXAMPLE_MARKER) {
            section = Section::Examples;
            example_blocks.push(vec![]);
            continue;
        } else if is_section_marker(line, DEFAULT_MARKER) {
            section = Section::Default;
            continue;
        }

        match section {
            Section::Description => description_lines.push(line),
            Section::Examples => {
                if let Some(block) = example_blocks.last_mut() {
                    block.push(line);
                }
            },
            Section::Default => default_lines.push(line),
        }
    }

    let examples =
        example_blocks.iter()
            .map(|block| join_unindented_block(block))
            .collect::<Vec<_>>();

    Annotations {
        description: non_empty(join_unindented_block(&description_lines)),
        examples: Examples::from_vec(examples),
        default_value: non_empty(join_unindented_block(&default_lines)),
        ..Annotations::default()
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn join_unindented_block(lines: &[&str]) -> String {
    unindent_equal(lines).join("\n").trim().to_string()
}

/// Strip the indentation shared by all `lines`.
///
/// The indentation character is taken from the first line (a space or a
/// tab). If the first line isn't indented, the lines are returned as-is. A
/// line without any leading indentation character (including an empty line)
/// means there is no shared indentation.
pub fn unindent_equal<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let indent_char =
        lines.first()
            .and_then(|first| first.chars().next())
            .filter(|c| *c == ' ' || *c == '\t');
    let Some(indent_char) = indent_char else {
        return lines.to_vec();
    };

    let indent =
        lines.iter()
            .map(|line| line.chars().take_while(|c| *c == indent_char).count())
            .min()
            .unwrap_or(0);

    lines.iter()
        .map(|line| &line[indent..])
        .collect()
}

//! Manifest text parser.
//!
//! The format is a pinned requirements file split into blank-line separated
//! sections. Each section opens with a `# Group` comment and holds
//! `name==version` pins and, at most once per manifest, an `-e <path>[extras]`
//! editable-install marker:
//!
//! ```text
//! # Optionals
//! -e .[full]
//!
//! # Testing
//! pytest==8.3.4
//! trio==0.27.0  # override
//! ```
//!
//! Only syntax is checked here. Duplicate, conflicting and malformed pins are
//! reported by validation so that every problem surfaces in one pass.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::manifest::{EditableMarker, Entry, Group, Manifest, Pin};
use crate::name::PackageName;

/// A syntax error at a specific line of the manifest.
///
/// Spans are byte offsets into the parsed text; attach the text with
/// [`miette::Report::with_source_code`] to render them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("line {line}: section does not start with a group header")]
    #[diagnostic(
        code(pinset::parse::missing_header),
        help("Begin each blank-line separated section with a `# Group name` comment")
    )]
    MissingHeader {
        line: usize,
        #[label("expected `# <group>` before this line")]
        span: SourceSpan,
    },

    #[error("line {line}: group header has no name")]
    #[diagnostic(code(pinset::parse::empty_header))]
    EmptyHeader {
        line: usize,
        #[label("empty header")]
        span: SourceSpan,
    },

    #[error("line {line}: {reason}")]
    #[diagnostic(
        code(pinset::parse::invalid_line),
        help("Entries must be `name==version` or `-e <path>[extras]`")
    )]
    InvalidLine {
        line: usize,
        reason: String,
        #[label("not a pin or editable marker")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingHeader { line, .. }
            | Self::EmptyHeader { line, .. }
            | Self::InvalidLine { line, .. } => *line,
        }
    }
}

/// Parse manifest text into a [`Manifest`].
///
/// Groups keep their order of first appearance; a repeated header
/// (case-insensitive) continues the earlier group.
pub fn parse(text: &str) -> Result<Manifest, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut groups: Vec<Group> = Vec::new();
    let mut current: Option<usize> = None;
    let mut offset = 0;

    for (idx, raw_line) in text.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let start = offset;
        offset += raw_line.len();

        let line = raw_line.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            current = None;
            continue;
        }
        let span = content_span(line, start);

        let Some(group_idx) = current else {
            let Some(header) = trimmed.strip_prefix('#') else {
                return Err(ParseError::MissingHeader {
                    line: line_no,
                    span,
                });
            };
            let name = header.trim_start_matches('#').trim();
            if name.is_empty() {
                return Err(ParseError::EmptyHeader {
                    line: line_no,
                    span,
                });
            }
            let group_idx = match groups.iter().position(|g| g.is_named(name)) {
                Some(existing) => {
                    tracing::debug!("line {line_no}: continuing group '{name}'");
                    existing
                }
                None => {
                    groups.push(Group::new(name, Vec::new()));
                    groups.len() - 1
                }
            };
            current = Some(group_idx);
            continue;
        };

        if trimmed.starts_with('#') {
            continue;
        }

        let entry = parse_entry(trimmed, line_no).map_err(|reason| ParseError::InvalidLine {
            line: line_no,
            reason,
            span,
        })?;
        groups[group_idx].push(entry);
    }

    let manifest = Manifest::from_groups(groups);
    tracing::debug!(
        "parsed {} groups, {} pins",
        manifest.groups().len(),
        manifest.pin_count()
    );
    Ok(manifest)
}

fn content_span(line: &str, line_start: usize) -> SourceSpan {
    let lead = line.len() - line.trim_start().len();
    (line_start + lead, line.trim().len()).into()
}

fn parse_entry(content: &str, line: usize) -> Result<Entry, String> {
    let (body, comment) = match content.split_once('#') {
        Some((body, comment)) => (body.trim(), Some(comment.trim())),
        None => (content, None),
    };

    if let Some(target) = editable_target(body) {
        return parse_editable(target).map(|m| Entry::Editable(m.with_line(line)));
    }

    let is_override = comment.is_some_and(|c| c.eq_ignore_ascii_case("override"));
    parse_pin(body).map(|p| Entry::Pin(p.with_override(is_override).with_line(line)))
}

fn editable_target(body: &str) -> Option<&str> {
    if let Some(rest) = body.strip_prefix("--editable") {
        if let Some(target) = rest.strip_prefix('=') {
            return Some(target.trim());
        }
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(rest.trim());
        }
    }
    if let Some(rest) = body.strip_prefix("-e") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(rest.trim());
        }
    }
    None
}

fn parse_editable(target: &str) -> Result<EditableMarker, String> {
    if target.is_empty() {
        return Err("editable marker has no target".to_string());
    }

    let (path, extras) = match target.find('[') {
        Some(open) => {
            let Some(inner) = target[open + 1..].strip_suffix(']') else {
                return Err(format!("unclosed extras in '{target}'"));
            };
            let extras = inner
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();
            (target[..open].trim(), extras)
        }
        None => (target, Vec::new()),
    };

    if path.is_empty() || path.contains(char::is_whitespace) {
        return Err(format!("invalid editable path in '{target}'"));
    }
    if let Some(bad) = extras.iter().find(|e| !PackageName::is_valid(e)) {
        return Err(format!("invalid extra '{bad}'"));
    }
    Ok(EditableMarker::new(path, extras))
}

fn parse_pin(body: &str) -> Result<Pin, String> {
    let Some((name, version)) = body.split_once("==") else {
        return Err(if body.contains(['<', '>', '~', '!', '=']) {
            format!("'{body}' is not an exact `==` pin")
        } else {
            format!("expected `name==version`, found '{body}'")
        });
    };
    let name = name.trim();
    let version = version.trim();

    if !PackageName::is_valid(name) {
        return Err(format!("invalid package name '{name}'"));
    }
    if version.is_empty() {
        return Err(format!("missing version for '{name}'"));
    }
    if !version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '!' | '-' | '_' | '*'))
    {
        return Err(format!("unsupported version '{version}' for '{name}'"));
    }
    Ok(Pin::new(name, version))
}

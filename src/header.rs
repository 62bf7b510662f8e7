//! ZMK `key-labels` headers: rendering the `#define` table a keymap
//! includes, and reading one back for verification.

use crate::error::{KeyLabelError, KlResult};
use crate::labels::{Grouping, KeyLabel, Row};
use crate::layouts::{KnownLayout, LayoutTable, MatrixIndex};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::debug;

const LICENSE_BLOCK: &str = "/*
 * Copyright (c) 2020 The ZMK Contributors
 *
 * SPDX-License-Identifier: MIT
 */
";

/// Width of one half in the banner diagram (6 cells of 4 chars).
const HALF_WIDTH: usize = 24;
const THUMB_PAD: usize = 11;

pub fn render_layout(layout: KnownLayout) -> String {
    let title = format!(
        "{} 42-key layout - {}",
        layout.display_name(),
        layout.description()
    );
    render(&layout.table(), &title)
}

/// Renders `table` as a ZMK header. Labels the table does not define are
/// skipped; the diagram shows them as `--`.
pub fn render(table: &LayoutTable, title: &str) -> String {
    let mut out = String::new();
    out.push_str(LICENSE_BLOCK);
    out.push_str("\n#pragma once\n\n");

    let _ = writeln!(out, "/* {}\n *", title);
    for line in diagram(table) {
        let _ = writeln!(out, " * {}", line);
    }
    out.push_str(" */\n");

    let mut current_row = None;
    for label in KeyLabel::iter() {
        let Some(index) = table.index_of(label) else {
            continue;
        };
        if current_row != Some(label.row()) {
            current_row = Some(label.row());
            let _ = writeln!(out, "\n/* {} */", row_heading(label.row()));
        }
        let _ = writeln!(out, "#define {:<3} {:>2}", label.to_string(), index);
    }
    out.push('\n');

    for group in Grouping::iter() {
        let members: Vec<String> = table
            .group(group)
            .iter()
            .map(|&i| {
                table
                    .name_at(i)
                    .map(str::to_string)
                    .unwrap_or_else(|| i.to_string())
            })
            .collect();
        let _ = write!(out, "#define {} {}", group, members.join(" "));
        match group {
            Grouping::KeysLeft => out.push_str("  // Left-hand keys."),
            Grouping::KeysRight => out.push_str("  // Right-hand keys."),
            Grouping::Thumbs => {}
        }
        out.push('\n');
    }
    out
}

fn row_heading(row: Row) -> String {
    let ordinal = row as usize;
    match row {
        Row::Thumb => format!("Row {} - Thumbs", ordinal),
        _ => format!("Row {} - {}", ordinal, row),
    }
}

fn cells(table: &LayoutTable, labels: &[KeyLabel]) -> String {
    labels
        .iter()
        .map(|&l| match table.index_of(l) {
            Some(i) => format!("{:>3} ", i),
            None => " -- ".to_string(),
        })
        .collect()
}

fn diagram(table: &LayoutTable) -> Vec<String> {
    let labels: Vec<KeyLabel> = KeyLabel::iter().collect();
    let bar = "─".repeat(HALF_WIDTH);
    let mut lines = vec![format!("╭{}┬{}╮", bar, bar)];

    for (row, chunk) in labels[..36].chunks(12).enumerate() {
        lines.push(format!(
            "│{}│{}│  (Row {})",
            cells(table, &chunk[..6]),
            cells(table, &chunk[6..]),
            row
        ));
    }

    let pad = "─".repeat(THUMB_PAD);
    lines.push(format!(
        "╰{}┮{}│{}╭{}╯  (Row 3 - thumbs)",
        pad,
        cells(table, &labels[36..39]),
        cells(table, &labels[39..]),
        pad
    ));
    let inner = "─".repeat(HALF_WIDTH - THUMB_PAD - 1);
    lines.push(format!(
        "{}╰{}┴{}╯",
        " ".repeat(THUMB_PAD + 1),
        inner,
        inner
    ));
    lines
}

/// Defines read from a header, in file order.
#[derive(Debug, Clone, Default)]
pub struct ParsedHeader {
    pub defines: Vec<(String, MatrixIndex)>,
    pub groups: HashMap<String, Vec<MatrixIndex>>,
}

impl ParsedHeader {
    pub fn get(&self, name: &str) -> Option<MatrixIndex> {
        self.defines
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, i)| i)
    }

    /// Builds a table for the verifier. A missing grouping macro shows up as
    /// an empty grouping.
    pub fn table(&self, name: &str) -> LayoutTable {
        let group = |g: Grouping| self.groups.get(&g.to_string()).cloned().unwrap_or_default();
        LayoutTable {
            name: name.to_string(),
            names: self.defines.iter().map(|(n, _)| n.clone()).collect(),
            indices: self.defines.iter().map(|&(_, i)| i).collect(),
            keys_left: group(Grouping::KeysLeft),
            keys_right: group(Grouping::KeysRight),
            thumbs: group(Grouping::Thumbs),
        }
    }
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> KlResult<ParsedHeader> {
    let content = fs::read_to_string(&path)?;
    debug!("Parsing header {}", path.as_ref().display());
    parse(&content)
}

/// Reads `#define` lines. A single numeric token binds a key label; a list
/// of previously defined labels binds a grouping. Other preprocessor lines
/// and comments are ignored.
pub fn parse(content: &str) -> KlResult<ParsedHeader> {
    let mut parsed = ParsedHeader::default();
    let mut in_block = false;

    for (n, raw) in content.lines().enumerate() {
        let line_no = n + 1;
        let line = strip_comments(raw, &mut in_block);
        let Some(rest) = line.trim().strip_prefix("#define") else {
            continue;
        };

        let mut tokens = rest.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(parse_error(line_no, "#define without a name"));
        };
        let values: Vec<&str> = tokens.collect();
        if values.is_empty() {
            // Include guards and feature flags.
            continue;
        }

        if parsed.get(name).is_some() || parsed.groups.contains_key(name) {
            return Err(parse_error(line_no, &format!("'{}' redefined", name)));
        }

        if let [single] = values.as_slice() {
            if single.starts_with(|c: char| c.is_ascii_digit()) {
                let index: MatrixIndex = single.parse().map_err(|_| {
                    parse_error(
                        line_no,
                        &format!("'{}' is not a valid matrix index for {}", single, name),
                    )
                })?;
                parsed.defines.push((name.to_string(), index));
                continue;
            }
        }

        let mut members = Vec::with_capacity(values.len());
        for token in values {
            let index = parsed.get(token).ok_or_else(|| {
                parse_error(
                    line_no,
                    &format!("'{}' in {} is not a defined key label", token, name),
                )
            })?;
            members.push(index);
        }
        parsed.groups.insert(name.to_string(), members);
    }

    if in_block {
        return Err(parse_error(content.lines().count(), "unterminated comment"));
    }
    Ok(parsed)
}

fn parse_error(line: usize, message: &str) -> KeyLabelError {
    KeyLabelError::Parse {
        line,
        message: message.to_string(),
    }
}

fn strip_comments(line: &str, in_block: &mut bool) -> String {
    let mut out = String::new();
    let mut rest = line;
    loop {
        if *in_block {
            match rest.find("*/") {
                Some(end) => {
                    *in_block = false;
                    rest = &rest[end + 2..];
                }
                None => return out,
            }
        }
        let block = rest.find("/*");
        let line_comment = rest.find("//");
        match (block, line_comment) {
            (Some(b), Some(l)) if l < b => {
                out.push_str(&rest[..l]);
                return out;
            }
            (Some(b), _) => {
                out.push_str(&rest[..b]);
                out.push(' ');
                *in_block = true;
                rest = &rest[b + 2..];
            }
            (None, Some(l)) => {
                out.push_str(&rest[..l]);
                return out;
            }
            (None, None) => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

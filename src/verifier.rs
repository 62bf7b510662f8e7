use crate::error::{KeyLabelError, KlResult};
use crate::labels::{canonical_names, Grouping, KeyLabel, KEY_COUNT};
use crate::layouts::{LayoutTable, MatrixIndex};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// A single authoring mistake found in a layout table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    LengthMismatch { names: usize, indices: usize },
    WrongKeyCount { found: usize },
    UnknownName { name: String },
    DuplicateName { name: String },
    MissingName { name: String },
    OutOfOrder { position: usize, expected: String, found: String },
    DuplicateIndex { index: MatrixIndex, first: String, second: String },
    GroupLength { group: Grouping, expected: usize, found: usize },
    UndefinedIndex { group: Grouping, position: usize, index: MatrixIndex },
    GroupOrder { group: Grouping, position: usize, expected: String, found: String },
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { names, indices } => {
                write!(f, "{} names but {} indices", names, indices)
            }
            Self::WrongKeyCount { found } => {
                write!(f, "expected {} keys, found {}", KEY_COUNT, found)
            }
            Self::UnknownName { name } => write!(f, "unknown key label '{}'", name),
            Self::DuplicateName { name } => write!(f, "label '{}' defined twice", name),
            Self::MissingName { name } => write!(f, "label '{}' is not defined", name),
            Self::OutOfOrder {
                position,
                expected,
                found,
            } => write!(
                f,
                "position {}: expected '{}', found '{}'",
                position, expected, found
            ),
            Self::DuplicateIndex {
                index,
                first,
                second,
            } => write!(
                f,
                "index {} bound to both '{}' and '{}'",
                index, first, second
            ),
            Self::GroupLength {
                group,
                expected,
                found,
            } => write!(f, "{} has {} entries, expected {}", group, found, expected),
            Self::UndefinedIndex {
                group,
                position,
                index,
            } => write!(
                f,
                "{}[{}] = {} is not bound to any label",
                group, position, index
            ),
            Self::GroupOrder {
                group,
                position,
                expected,
                found,
            } => write!(
                f,
                "{}[{}]: expected {}, found {}",
                group, position, expected, found
            ),
        }
    }
}

/// Collects every issue in `table`. An empty result means the table is a
/// complete, injective 42-key layout with well-formed groupings.
pub fn audit(table: &LayoutTable) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    if table.names.len() != table.indices.len() {
        issues.push(TableIssue::LengthMismatch {
            names: table.names.len(),
            indices: table.indices.len(),
        });
    }
    if table.names.len() != KEY_COUNT {
        issues.push(TableIssue::WrongKeyCount {
            found: table.names.len(),
        });
    }

    check_names(table, &mut issues);
    check_indices(table, &mut issues);
    for group in Grouping::iter() {
        check_group(table, group, &mut issues);
    }

    if issues.is_empty() {
        debug!("Layout '{}' passed audit", table.name);
    } else {
        warn!("Layout '{}' has {} issue(s)", table.name, issues.len());
    }
    issues
}

fn check_names(table: &LayoutTable, issues: &mut Vec<TableIssue>) {
    let mut seen = HashSet::new();
    let mut clean = true;

    for name in &table.names {
        // Parsing is case-insensitive; headers must use the exact mnemonic.
        match KeyLabel::from_str(name) {
            Ok(label) if label.to_string() == *name => {}
            _ => {
                issues.push(TableIssue::UnknownName { name: name.clone() });
                clean = false;
            }
        }
        if !seen.insert(name.as_str()) {
            issues.push(TableIssue::DuplicateName { name: name.clone() });
            clean = false;
        }
    }

    let canonical = canonical_names();
    for name in &canonical {
        if !seen.contains(name.as_str()) {
            issues.push(TableIssue::MissingName { name: name.clone() });
            clean = false;
        }
    }

    // Ordering only means something once the set of names is right.
    if clean {
        for (position, (found, expected)) in table.names.iter().zip(&canonical).enumerate() {
            if found != expected {
                issues.push(TableIssue::OutOfOrder {
                    position,
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
        }
    }
}

fn check_indices(table: &LayoutTable, issues: &mut Vec<TableIssue>) {
    let mut owners: HashMap<MatrixIndex, &str> = HashMap::new();
    for (name, &index) in table.names.iter().zip(&table.indices) {
        if let Some(first) = owners.insert(index, name) {
            issues.push(TableIssue::DuplicateIndex {
                index,
                first: first.to_string(),
                second: name.clone(),
            });
        }
    }
}

fn check_group(table: &LayoutTable, group: Grouping, issues: &mut Vec<TableIssue>) {
    let expected_labels = group.labels();
    let entries = table.group(group);

    if entries.len() != expected_labels.len() {
        issues.push(TableIssue::GroupLength {
            group,
            expected: expected_labels.len(),
            found: entries.len(),
        });
    }

    for (position, &index) in entries.iter().enumerate() {
        let Some(found) = table.name_at(index) else {
            issues.push(TableIssue::UndefinedIndex {
                group,
                position,
                index,
            });
            continue;
        };

        if let Some(expected) = expected_labels.get(position) {
            let expected = expected.to_string();
            if found != expected {
                issues.push(TableIssue::GroupOrder {
                    group,
                    position,
                    expected,
                    found: found.to_string(),
                });
            }
        }
    }
}

/// Fails with a `Validation` error listing every issue in `table`.
pub fn ensure_valid(table: &LayoutTable) -> KlResult<()> {
    let issues = audit(table);
    if issues.is_empty() {
        info!("Layout '{}' verified ({} keys)", table.name, table.names.len());
        return Ok(());
    }

    let details: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    Err(KeyLabelError::Validation(format!(
        "layout '{}': {}",
        table.name,
        details.join("; ")
    )))
}

/// Names present in exactly one of the two tables, as
/// `(only_in_a, only_in_b)`. Both empty means the tables can be swapped
/// without renaming any reference.
pub fn compare_names(a: &LayoutTable, b: &LayoutTable) -> (Vec<String>, Vec<String>) {
    let set_a: HashSet<&String> = a.names.iter().collect();
    let set_b: HashSet<&String> = b.names.iter().collect();

    let only_a = a
        .names
        .iter()
        .filter(|n| !set_b.contains(n))
        .cloned()
        .collect();
    let only_b = b
        .names
        .iter()
        .filter(|n| !set_a.contains(n))
        .cloned()
        .collect();
    (only_a, only_b)
}

/// Labels whose index differs between `actual` and `reference`, as
/// `(name, reference_index, actual_index)`. Labels missing from either side
/// are left to [`audit`].
pub fn diff_values(
    reference: &LayoutTable,
    actual: &LayoutTable,
) -> Vec<(String, MatrixIndex, MatrixIndex)> {
    reference
        .names
        .iter()
        .zip(&reference.indices)
        .filter_map(|(name, &want)| match actual.get(name) {
            Some(got) if got != want => Some((name.clone(), want, got)),
            _ => None,
        })
        .collect()
}

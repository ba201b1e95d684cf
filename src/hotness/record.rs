use super::segment::CommitRecord;
use crate::error::{HotError, Result};
use std::collections::HashMap;

/// What a single commit contributes for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    /// The commit removed the file; everything accumulated so far is forgotten.
    Deleted,
    Changed(u64),
}

pub type DeltaMap = HashMap<String, Delta>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Lines(u64),
    /// `-` in numstat output.
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLine<'a> {
    Create(&'a str),
    Delete(&'a str),
    ModeChange,
    ChangeSize {
        added: Count,
        removed: Count,
        path: &'a str,
    },
}

/// Classifies one line of `git log --summary --numstat` output.
///
/// Summary lines look like ` create mode 100644 <path>`; the path is
/// everything after the fourth space so paths with spaces survive.
/// Numstat lines are `<added>\t<removed>\t<path>`.
pub fn classify(line: &str) -> Option<RecordLine<'_>> {
    if line.starts_with(" delete") {
        return summary_path(line).map(RecordLine::Delete);
    }
    if line.starts_with(" create") {
        return summary_path(line).map(RecordLine::Create);
    }
    if line.starts_with(" mode") {
        return Some(RecordLine::ModeChange);
    }

    let mut fields = line.split('\t');
    let (added, removed, path) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    Some(RecordLine::ChangeSize {
        added: count(added)?,
        removed: count(removed)?,
        path,
    })
}

fn summary_path(line: &str) -> Option<&str> {
    line.splitn(5, ' ').nth(4).filter(|p| !p.is_empty())
}

fn count(field: &str) -> Option<Count> {
    if field == "-" {
        return Some(Count::Binary);
    }
    field.parse().ok().map(Count::Lines)
}

/// Builds the per-path contribution of one commit.
///
/// Lines are applied in the order git printed them. A `create` only cancels
/// a numstat line that came before it, which is how git orders them.
pub fn parse_commit(record: &CommitRecord) -> Result<DeltaMap> {
    let mut result = DeltaMap::new();
    for line in record.lines() {
        let Some(parsed) = classify(line) else {
            return Err(HotError::MalformedRecord {
                line: line.clone(),
                record: record.lines().join("\n"),
            });
        };

        match parsed {
            RecordLine::Delete(path) => {
                result.insert(path.to_string(), Delta::Deleted);
            }
            RecordLine::Create(path) => {
                result.remove(path);
            }
            RecordLine::ModeChange => {}
            RecordLine::ChangeSize {
                added: Count::Lines(added),
                removed: Count::Lines(removed),
                path,
            } => {
                result.insert(path.to_string(), Delta::Changed(added.saturating_add(removed)));
            }
            // binary files are excluded from hotness
            RecordLine::ChangeSize { .. } => {}
        }
    }
    Ok(result)
}

/// The non-blank lines git printed for a single commit, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitRecord {
    lines: Vec<String>,
}

impl CommitRecord {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Groups a line stream into commit records. Blank lines are delimiters and
/// never produce an empty record.
pub struct Commits<I> {
    lines: I,
}

impl<I, S> Iterator for Commits<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    type Item = CommitRecord;

    fn next(&mut self) -> Option<CommitRecord> {
        let mut pending = Vec::new();
        for line in self.lines.by_ref() {
            let line = line.into();
            if line.is_empty() {
                if !pending.is_empty() {
                    return Some(CommitRecord::new(pending));
                }
            } else {
                pending.push(line);
            }
        }
        (!pending.is_empty()).then(|| CommitRecord::new(pending))
    }
}

pub fn group_into_commits<I>(lines: I) -> Commits<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Commits {
        lines: lines.into_iter(),
    }
}

use super::record::{parse_commit, Delta, DeltaMap};
use super::segment::CommitRecord;
use crate::error::Result;
use crate::model::HotnessMap;

/// Folds per-commit deltas, oldest commit first, into total hotness.
///
/// A deletion forgets whatever the path had accumulated up to that point;
/// later changes to a re-created file start again from zero.
pub fn combine_changes<I>(changes: I) -> HotnessMap
where
    I: IntoIterator<Item = DeltaMap>,
{
    let mut totals = HotnessMap::new();
    for commit in changes {
        for (path, delta) in commit {
            match delta {
                Delta::Deleted => {
                    totals.remove(&path);
                }
                Delta::Changed(lines) => {
                    let total = totals.entry(path).or_insert(0);
                    *total = total.saturating_add(lines);
                }
            }
        }
    }
    totals
}

/// Computes hotness from records in git's newest-first order.
pub fn compute_hotness<I>(records: I) -> Result<HotnessMap>
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut records: Vec<CommitRecord> = records.into_iter().collect();
    records.reverse();
    let changes = records
        .iter()
        .map(parse_commit)
        .collect::<Result<Vec<_>>>()?;
    Ok(combine_changes(changes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotness::segment::group_into_commits;
    use pretty_assertions::assert_eq;

    fn deltas(pairs: &[(&str, Delta)]) -> DeltaMap {
        pairs.iter().map(|(p, d)| (p.to_string(), *d)).collect()
    }

    fn hotness(pairs: &[(&str, u64)]) -> HotnessMap {
        pairs.iter().map(|(p, h)| (p.to_string(), *h)).collect()
    }

    fn from_log(text: &str) -> HotnessMap {
        compute_hotness(group_into_commits(text.lines())).unwrap()
    }

    #[test]
    fn plain_changes_sum_in_any_order() {
        let a = deltas(&[("a", Delta::Changed(3)), ("b", Delta::Changed(1))]);
        let b = deltas(&[("a", Delta::Changed(4))]);
        let c = deltas(&[("b", Delta::Changed(10)), ("c", Delta::Changed(2))]);
        let expected = hotness(&[("a", 7), ("b", 11), ("c", 2)]);

        assert_eq!(combine_changes([a.clone(), b.clone(), c.clone()]), expected);
        assert_eq!(combine_changes([c, a, b]), expected);
    }

    #[test]
    fn delete_of_unseen_path_is_noop() {
        assert_eq!(
            combine_changes([deltas(&[("ghost", Delta::Deleted), ("a", Delta::Changed(1))])]),
            hotness(&[("a", 1)])
        );
    }

    #[test]
    fn delete_forgets_accumulated_hotness() {
        let changes = [
            deltas(&[("a", Delta::Changed(8))]),
            deltas(&[("a", Delta::Changed(2))]),
            deltas(&[("a", Delta::Deleted)]),
        ];
        assert!(combine_changes(changes).is_empty());
    }

    #[test]
    fn recreated_file_counts_only_after_delete() {
        let changes = [
            deltas(&[("a", Delta::Changed(8))]),
            deltas(&[("a", Delta::Deleted)]),
            deltas(&[("a", Delta::Changed(3))]),
            deltas(&[("a", Delta::Changed(1))]),
        ];
        assert_eq!(combine_changes(changes), hotness(&[("a", 4)]));
    }

    #[test]
    fn creation_bulk_is_excluded() {
        // newest first: the modification, then the creating commit
        let log = "3\t2\ta.py\n\n10\t0\ta.py\n create mode 100644 a.py\n";
        assert_eq!(from_log(log), hotness(&[("a.py", 5)]));
    }

    #[test]
    fn deleted_file_is_absent() {
        let log = "0\t5\tb.py\n delete mode 100644 b.py\n\n5\t0\tb.py\n";
        assert!(from_log(log).is_empty());
    }

    #[test]
    fn replay_runs_oldest_first() {
        // b.py was deleted, then re-created and edited
        let log = "\
2\t1\tb.py

4\t0\tb.py
 create mode 100644 b.py

0\t4\tb.py
 delete mode 100644 b.py

6\t6\tb.py
";
        assert_eq!(from_log(log), hotness(&[("b.py", 3)]));
    }

    #[test]
    fn binary_changes_never_create_entries() {
        let log = "-\t-\tlogo.png\n\n-\t-\tlogo.png\n1\t1\tREADME\n";
        assert_eq!(from_log(log), hotness(&[("README", 2)]));
    }

    #[test]
    fn malformed_record_aborts() {
        let log = "1\t1\ta\n\ngarbage\n";
        assert!(compute_hotness(group_into_commits(log.lines())).is_err());
    }

    // Captured from `git log --no-renames --summary --numstat --format=format:`.
    // git prints every numstat line of a commit before its summary lines.
    const CAPTURED_LOG: &str = "\
1\t0\tsrc/main.rs
0\t12\tsrc/old.rs
0\t0\tscripts/run.sh
 delete mode 100644 src/old.rs
 mode change 100644 => 100755 scripts/run.sh

-\t-\tassets/logo.png
4\t2\tsrc/main.rs
3\t0\tscripts/run.sh
 create mode 100644 assets/logo.png
 create mode 100644 scripts/run.sh

7\t1\tsrc/main.rs
10\t2\tsrc/old.rs

20\t0\tsrc/main.rs
12\t0\tsrc/old.rs
 create mode 100644 src/main.rs
 create mode 100644 src/old.rs";

    #[test]
    fn captured_log_fixture() {
        assert_eq!(
            from_log(CAPTURED_LOG),
            hotness(&[("src/main.rs", 15), ("scripts/run.sh", 0)])
        );
    }
}

pub mod aggregate;
pub mod exec;
pub mod output;
pub mod record;
pub mod segment;

pub use aggregate::{combine_changes, compute_hotness};
pub use exec::exec;
pub use output::{output_json, output_ndjson, output_table, rank};
pub use record::{parse_commit, Delta, DeltaMap};
pub use segment::{group_into_commits, CommitRecord};

use crate::error::Result;
use crate::git::HistorySource;
use crate::model::{HotnessMap, LogScope};

/// Reads the history for `scope` and computes the hotness of every file in it.
pub fn calculate_hotness<S: HistorySource + ?Sized>(
    source: &S,
    scope: &LogScope,
) -> Result<HotnessMap> {
    let log = source.history(scope)?;
    compute_hotness(group_into_commits(log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::StaticHistory;
    use pretty_assertions::assert_eq;

    #[test]
    fn calculates_from_history_source() {
        let source = StaticHistory::new(
            "3\t2\ta.py\n\n10\t0\ta.py\n create mode 100644 a.py\n\n5\t0\tb.py\n",
        );
        let hotness = calculate_hotness(&source, &LogScope::default()).unwrap();
        assert_eq!(hotness, HotnessMap::from([("a.py".to_string(), 5), ("b.py".to_string(), 5)]));
    }
}

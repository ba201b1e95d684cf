use super::{calculate_hotness, output_json, output_ndjson, output_table, rank};
use crate::cli::CommonArgs;
use crate::git::{GitLog, GitRepo};
use crate::model::LogScope;
use anyhow::Context;
use tracing::info;

pub fn exec(
    common: CommonArgs,
    json: bool,
    ndjson: bool,
    path: Option<String>,
) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;

    // a relative path scope is relative to where the user pointed us, not the worktree root
    let workdir = match &common.repo {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let scope = LogScope {
        path: path.clone().unwrap_or_default(),
        since: common.since.clone(),
        until: common.until.clone(),
    };

    // Progress goes to stderr, but keep it out of machine-readable runs entirely
    let source = GitLog::new(&workdir).with_progress(!json && !ndjson);
    let hotness = calculate_hotness(&source, &scope).context("Failed to compute hotness")?;
    info!(files = hotness.len(), "hotness computed");

    let entries = rank(hotness, common.top);
    if json {
        output_json(&entries, &repo, &common, path.as_deref())?;
    } else if ndjson {
        output_ndjson(&entries)?;
    } else {
        output_table(&entries, &common)?;
    }

    Ok(())
}

use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::model::{HotEntry, HotOutput, HotnessMap, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;

/// Hottest first, ties by path. `top == 0` keeps every entry.
pub fn rank(hotness: HotnessMap, top: usize) -> Vec<HotEntry> {
    let mut entries: Vec<HotEntry> = hotness
        .into_iter()
        .map(|(path, hotness)| HotEntry { path, hotness })
        .collect();
    entries.sort_by(|a, b| b.hotness.cmp(&a.hotness).then_with(|| a.path.cmp(&b.path)));
    if top > 0 {
        entries.truncate(top);
    }
    entries
}

pub fn output_json(
    entries: &[HotEntry],
    repo: &GitRepo,
    common: &CommonArgs,
    path_prefix: Option<&str>,
) -> Result<()> {
    let output = HotOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        path_prefix: path_prefix.unwrap_or("").to_string(),
        since: common.since.clone(),
        until: common.until.clone(),
        top: common.top,
        entries: entries.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(entries: &[HotEntry]) -> Result<()> {
    for e in entries {
        println!("{}", serde_json::to_string(e)?);
    }
    Ok(())
}

pub fn output_table(entries: &[HotEntry], common: &CommonArgs) -> Result<()> {
    if entries.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    if let (Some(since), Some(until)) = (&common.since, &common.until) {
        println!("Filtering commits from {} to {}", since, until);
    } else if let Some(since) = &common.since {
        println!("Filtering commits since {}", since);
    } else if let Some(until) = &common.until {
        println!("Filtering commits until {}", until);
    }

    println!("{:<70} {:>10}", style("Path").bold(), style("Hotness").bold());
    println!("{}", "─".repeat(81));
    for e in entries {
        println!("{:<70} {:>10}", e.path, e.hotness);
    }
    Ok(())
}
